/// length of given text in content units, one per character
pub fn text_len(text: &str) -> usize {
	text.chars().count()
}

/// byte length of the first `units` characters of `text`, clamped to its end
///
/// scans only the characters it skips, so walking a text forward in chunks stays linear
pub fn char_span(text: &str, units: usize) -> usize {
	text.char_indices()
		.nth(units)
		.map_or(text.len(), |(idx, _)| idx)
}
