//! # delta-cursor
//! chunked cursor over sequences of rich-text change operations
//!
//! operational transform algorithms (compose, transform, diff) walk two or more operation
//! sequences side by side, consuming arbitrary sub-lengths of each operation. this crate provides
//! the primitive they build upon: a [Cursor] over a slice of [Op]s which slices operations on
//! demand without ever touching the underlying sequence.
//!
//! deciding *how much* to consume at each step is left to the calling algorithm.
//!
//! ```rust
//! use delta_cursor::prelude::*;
//!
//! let ops: Vec<DeltaOp> = serde_json::from_str(r#"[
//!   { "insert": "Hello" },
//!   { "retain": 5, "attributes": { "bold": true } }
//! ]"#)?;
//!
//! let mut a = DeltaCursor::new(&ops);
//! let b_ops = vec![DeltaOp::retain(2), DeltaOp::delete(4)];
//! let mut b = DeltaCursor::new(&b_ops);
//!
//! let len = a.peek_length().min(b.peek_length());
//! assert_eq!(a.next(len), DeltaOp::insert("He"));
//! assert_eq!(b.next(len), DeltaOp::retain(2));
//! # Ok::<(), serde_json::Error>(())
//! ```

/// data model walked by cursors
pub mod api;

/// the cursor itself
pub mod cursor;

/// crate error types
pub mod errors;

/// text measuring helpers
pub mod tools;

/// all-in-one imports with `use delta_cursor::prelude::*`
pub mod prelude;

pub use api::{AttributeMap, Content, Op, OpKind, RawOp};
pub use cursor::{Cursor, Length, Mark};
pub use errors::{CursorError, CursorResult, OpError, OpResult};
