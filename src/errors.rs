//! ### Errors
//! Contract and validation errors raised while building or walking operations.

pub type OpResult<T> = std::result::Result<T, OpError>;

/// an operation received in exchange format could not be turned into an [crate::Op]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
	#[error("operation must populate exactly one of insert/delete/retain, found {populated}")]
	Malformed { populated: usize },

	#[error("delete operations never carry attributes")]
	AttributedDelete,

	#[error("retain length {len} is reserved for the unbounded retain")]
	ReservedRetain { len: usize },
}



pub type CursorResult<T> = std::result::Result<T, CursorError>;

/// the caller asked the cursor for a slice it can never produce
///
/// it means cursors walking different sequences went out of alignment:
/// it is reported, never recovered from
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
	#[error("embeds are atomic: requested {requested} unit(s) at offset {offset}")]
	EmbedSplit { offset: usize, requested: usize },
}
