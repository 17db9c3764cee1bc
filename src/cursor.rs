//! ### Cursor
//! A chunked reader over a sequence of [Op]s.
//!
//! compose/transform/diff walk two or more operation sequences in lockstep: at every step they
//! ask each cursor how much it can give ([Cursor::peek_length]), take the minimum and consume
//! exactly that much from all of them ([Cursor::next]). Operations are sliced on demand, never
//! pre-split, and the underlying sequence is never touched.
//!
//! Once exhausted, a cursor behaves as an endless `{ retain: ∞ }`, so algorithms pulling from an
//! exhausted side keep receiving no-op retains instead of failing.

use std::borrow::Cow;

use crate::{
	api::{Content, Op, OpKind},
	errors::{CursorError, CursorResult},
	tools,
};

/// amount of content units, possibly unbounded
///
/// `Infinite` compares greater than any finite length, so `a.min(b)` picks the finite side
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Length {
	Finite(usize),
	Infinite,
}

impl Length {
	pub fn is_finite(&self) -> bool {
		matches!(self, Length::Finite(_))
	}

	/// the finite amount, if any
	pub fn finite(self) -> Option<usize> {
		match self {
			Length::Finite(n) => Some(n),
			Length::Infinite => None,
		}
	}
}

impl From<usize> for Length {
	fn from(value: usize) -> Self {
		Length::Finite(value)
	}
}

impl std::fmt::Display for Length {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Length::Finite(n) => write!(f, "{n}"),
			Length::Infinite => write!(f, "∞"),
		}
	}
}

/// snapshot of a cursor position, see [Cursor::mark] and [Cursor::reset]
///
/// only meaningful for the cursor (or a clone of it) that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
	index: usize,
	offset: usize,
	byte: usize,
	len: usize,
}

/// stateful reader handing out arbitrary-length slices of an operation sequence
///
/// ### examples
///
/// ```rust
/// use delta_cursor::{Cursor, Length, Op};
///
/// let ops = vec![
///   Op::insert("Hello"),
///   Op::retain(5).with_attribute("bold", true),
///   Op::delete(3),
/// ];
/// let mut cursor = Cursor::new(&ops);
///
/// assert_eq!(cursor.next(3), Op::insert("Hel"));
/// assert_eq!(cursor.next(10), Op::insert("lo")); // clamped to what is left
/// assert_eq!(cursor.next(2), Op::retain(2).with_attribute("bold", true));
/// assert_eq!(cursor.peek_length(), Length::Finite(3));
///
/// let rest = cursor.rest();
/// assert_eq!(rest.as_ref(), &[Op::retain(3).with_attribute("bold", true), Op::delete(3)]);
/// assert_eq!(cursor.position(), (1, 2)); // rest never moves the cursor
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	ops: &'a [Op],
	index: usize,
	/// content units already consumed from current operation
	offset: usize,
	/// byte position matching `offset` inside a text insert, 0 for anything else
	byte: usize,
	/// content units of current operation, measured once when reaching it
	len: usize,
}

impl<'a> Cursor<'a> {
	pub fn new(ops: &'a [Op]) -> Self {
		Cursor { ops, index: 0, offset: 0, byte: 0, len: ops.first().map_or(0, Op::len) }
	}

	/// returns true until every operation has been fully consumed
	pub fn has_next(&self) -> bool {
		self.peek_length().is_finite()
	}

	/// returns true once the cursor only hands out `{ retain: ∞ }`
	pub fn is_exhausted(&self) -> bool {
		!self.has_next()
	}

	/// operation currently being consumed, whole and unsliced
	pub fn peek(&self) -> Option<&'a Op> {
		self.ops.get(self.index)
	}

	/// content units left in current operation, [Length::Infinite] once exhausted
	pub fn peek_length(&self) -> Length {
		if self.index < self.ops.len() {
			Length::Finite(self.len - self.offset)
		} else {
			Length::Infinite
		}
	}

	/// kind of current operation, [OpKind::Retain] once exhausted
	pub fn peek_type(&self) -> OpKind {
		self.peek().map_or(OpKind::Retain, Op::kind)
	}

	/// current `(index, offset)` pair
	pub fn position(&self) -> (usize, usize) {
		(self.index, self.offset)
	}

	pub fn mark(&self) -> Mark {
		Mark { index: self.index, offset: self.offset, byte: self.byte, len: self.len }
	}

	/// move back to a position previously taken with [Cursor::mark]
	///
	/// # Panics
	/// in debug builds, when given a mark which doesn't fit this cursor's sequence
	pub fn reset(&mut self, mark: Mark) {
		debug_assert!(mark.index <= self.ops.len(), "mark index {} out of sequence", mark.index);
		debug_assert!(
			mark.len == self.ops.get(mark.index).map_or(0, Op::len) && mark.offset <= mark.len,
			"mark offset {} doesn't fit operation {}", mark.offset, mark.index,
		);
		self.index = mark.index;
		self.offset = mark.offset;
		self.byte = mark.byte;
		self.len = mark.len;
	}

	/// consume up to `len` content units from current operation
	///
	/// the returned operation spans exactly `min(len, peek_length())` units and keeps the kind
	/// and attributes of the operation it was cut from. an exhausted cursor returns
	/// `{ retain: ∞ }` and stays exhausted
	///
	/// # Panics
	/// when the request can't be satisfied without splitting an atomic unit, see
	/// [Cursor::try_next]. this only happens if the caller let its cursors drift apart
	pub fn next(&mut self, len: impl Into<Length>) -> Op {
		match self.try_next(len) {
			Ok(op) => op,
			Err(e) => {
				tracing::error!("cursor contract violated at {:?}: {}", self.position(), e);
				panic!("cursor contract violated: {e}");
			},
		}
	}

	/// like [Cursor::next], but reports contract violations instead of panicking
	///
	/// requesting anything other than exactly one unit of an embed is
	/// [CursorError::EmbedSplit]. on error the cursor doesn't move
	pub fn try_next(&mut self, len: impl Into<Length>) -> CursorResult<Op> {
		let Some(op) = self.peek() else {
			return Ok(Op::infinite_retain());
		};
		let available = self.len - self.offset;
		let taken = match len.into() {
			Length::Finite(n) => n.min(available),
			Length::Infinite => available,
		};

		let (out, bytes) = slice(op, self.offset, self.byte, taken)?;

		if taken == available {
			self.index += 1;
			self.offset = 0;
			self.byte = 0;
			self.len = self.peek().map_or(0, Op::len);
			tracing::trace!("cursor advanced to operation {}", self.index);
		} else {
			self.offset += taken;
			self.byte += bytes;
		}

		Ok(out)
	}

	/// everything left to consume, honoring a partially consumed current operation
	///
	/// on an operation boundary this borrows the remaining tail of the sequence, otherwise the
	/// remainder of current operation is sliced off and prepended to it. the cursor doesn't move
	pub fn rest(&self) -> Cow<'a, [Op]> {
		if self.offset == 0 {
			return Cow::Borrowed(self.ops.get(self.index..).unwrap_or_default());
		}

		let mut ahead = self.clone();
		let head = ahead.next(Length::Infinite);
		let mut out = Vec::with_capacity(self.ops.len() - self.index);
		out.push(head);
		out.extend_from_slice(&ahead.ops[ahead.index..]);
		Cow::Owned(out)
	}
}

/// cut `taken` units out of `op`, starting `offset` units (`byte` bytes) in
///
/// also returns how many bytes of text were consumed
fn slice(op: &Op, offset: usize, byte: usize, taken: usize) -> CursorResult<(Op, usize)> {
	Ok(match op {
		Op::Delete { .. } => (Op::Delete { len: taken }, 0),
		Op::Retain { attributes, .. } => (Op::Retain { len: taken, attributes: attributes.clone() }, 0),
		Op::Insert { content: Content::Text(txt), attributes } => {
			let rest = &txt[byte..];
			let span = tools::char_span(rest, taken);
			let op = Op::Insert {
				content: Content::Text(rest[..span].to_string()),
				attributes: attributes.clone(),
			};
			(op, span)
		},
		Op::Insert { content: Content::Embed(embed), attributes } => {
			// embeds are atomic
			if offset != 0 || taken != 1 {
				return Err(CursorError::EmbedSplit { offset, requested: taken });
			}
			(Op::Insert { content: Content::Embed(embed.clone()), attributes: attributes.clone() }, 0)
		},
	})
}
