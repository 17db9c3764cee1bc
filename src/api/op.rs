//! ### Op
//! A single rich-text change operation: insert, retain or delete over a run of content units.

use std::collections::BTreeMap;

use crate::tools;

/// formatting metadata attached to inserts and retains, passed through unexamined
pub type AttributeMap = BTreeMap<String, serde_json::Value>;

/// retain length standing for `{ retain: ∞ }`, what an exhausted cursor hands out
///
/// reserved: operations coming from the exchange format can't use it as a real length
pub const INFINITE_RETAIN: usize = usize::MAX;

/// payload of an insert: either a run of text or a single atomic embed
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
	/// text run, one content unit per character
	Text(String),
	/// opaque embedded object, always exactly one content unit
	Embed(serde_json::Value),
}

impl Content {
	/// number of content units this payload spans
	pub fn len(&self) -> usize {
		match self {
			Content::Text(txt) => tools::text_len(txt),
			Content::Embed(_) => 1,
		}
	}

	pub fn is_empty(&self) -> bool {
		matches!(self, Content::Text(txt) if txt.is_empty())
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			Content::Text(txt) => Some(txt),
			Content::Embed(_) => None,
		}
	}
}

impl From<&str> for Content {
	fn from(value: &str) -> Self {
		Content::Text(value.to_string())
	}
}

impl From<String> for Content {
	fn from(value: String) -> Self {
		Content::Text(value)
	}
}

/// tag of an [Op], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum OpKind {
	Insert,
	Retain,
	Delete,
}

impl std::fmt::Display for OpKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OpKind::Insert => write!(f, "insert"),
			OpKind::Retain => write!(f, "retain"),
			OpKind::Delete => write!(f, "delete"),
		}
	}
}

/// a change operation over a run of content units
///
/// exactly one kind per value: an operation populating no tag or more than one simply cannot be
/// built. values coming from the exchange format go through [crate::api::RawOp] validation
///
/// ### examples
///
/// ```rust
/// use delta_cursor::Op;
///
/// let bold = Op::retain(5).with_attribute("bold", true);
/// assert_eq!(bold.len(), 5);
/// assert_eq!(bold.attributes().and_then(|a| a.get("bold")), Some(&serde_json::json!(true)));
///
/// let image = Op::insert_embed(serde_json::json!({ "image": "octocat.png" }));
/// assert_eq!(image.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "crate::api::RawOp", into = "crate::api::RawOp"))]
pub enum Op {
	Insert {
		content: Content,
		attributes: Option<AttributeMap>,
	},
	Retain {
		len: usize,
		attributes: Option<AttributeMap>,
	},
	Delete {
		len: usize,
	},
}

impl Op {
	/// insert a run of text
	pub fn insert(txt: impl Into<String>) -> Self {
		Op::Insert { content: Content::Text(txt.into()), attributes: None }
	}

	/// insert a single atomic embed
	pub fn insert_embed(embed: serde_json::Value) -> Self {
		Op::Insert { content: Content::Embed(embed), attributes: None }
	}

	pub fn retain(len: usize) -> Self {
		Op::Retain { len, attributes: None }
	}

	pub fn delete(len: usize) -> Self {
		Op::Delete { len }
	}

	/// the `{ retain: ∞ }` operation
	pub fn infinite_retain() -> Self {
		Op::retain(INFINITE_RETAIN)
	}

	/// attach attributes to this operation, replacing previous ones
	///
	/// an empty map clears attributes; deletes never carry attributes, so they are left untouched
	pub fn with_attributes(mut self, attrs: AttributeMap) -> Self {
		let attrs = if attrs.is_empty() { None } else { Some(attrs) };
		match &mut self {
			Op::Insert { attributes, .. } | Op::Retain { attributes, .. } => *attributes = attrs,
			Op::Delete { .. } => {},
		}
		self
	}

	/// set a single attribute on this operation, keeping the other ones
	pub fn with_attribute(self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
		let mut attrs = self.attributes().cloned().unwrap_or_default();
		attrs.insert(key.into(), value.into());
		self.with_attributes(attrs)
	}

	pub fn kind(&self) -> OpKind {
		match self {
			Op::Insert { .. } => OpKind::Insert,
			Op::Retain { .. } => OpKind::Retain,
			Op::Delete { .. } => OpKind::Delete,
		}
	}

	pub fn attributes(&self) -> Option<&AttributeMap> {
		match self {
			Op::Insert { attributes, .. } | Op::Retain { attributes, .. } => attributes.as_ref(),
			Op::Delete { .. } => None,
		}
	}

	/// number of content units this operation spans
	///
	/// text inserts span one unit per character, embeds always span 1
	pub fn len(&self) -> usize {
		match self {
			Op::Insert { content, .. } => content.len(),
			Op::Retain { len, .. } | Op::Delete { len } => *len,
		}
	}

	/// returns true if this operation spans no content at all
	pub fn is_empty(&self) -> bool {
		match self {
			Op::Insert { content, .. } => content.is_empty(),
			Op::Retain { len, .. } | Op::Delete { len } => *len == 0,
		}
	}

	/// returns true for the `{ retain: ∞ }` an exhausted cursor produces
	///
	/// this only looks at the length: a retain of [INFINITE_RETAIN] built by hand is
	/// indistinguishable from it, which is why [crate::api::RawOp] refuses that length
	pub fn is_unbounded(&self) -> bool {
		matches!(self, Op::Retain { len: INFINITE_RETAIN, .. })
	}
}
