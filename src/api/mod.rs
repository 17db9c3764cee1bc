//! # API
//! Data types walked by the [crate::Cursor] and exchanged with compose/transform/diff algorithms.

/// the operation data model
pub mod op;

/// exchange-format shape of operations, and its validation
pub mod raw;

pub use op::{AttributeMap, Content, Op, OpKind, INFINITE_RETAIN};
pub use raw::RawOp;
