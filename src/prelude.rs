//! ### Prelude
//!
//! all-in-one renamed imports with `use delta_cursor::prelude::*`

pub use crate::errors::{
	CursorError as DeltaCursorError,
	CursorResult as DeltaCursorResult,
	OpError as DeltaOpError,
	OpResult as DeltaOpResult,
};

pub use crate::api::{
	Op as DeltaOp,
	OpKind as DeltaOpKind,
	Content as DeltaContent,
	AttributeMap as DeltaAttributeMap,
};

pub use crate::cursor::{
	Cursor as DeltaCursor,
	Length as DeltaLength,
};
