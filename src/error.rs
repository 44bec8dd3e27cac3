use thiserror::Error;

/// Errors reported by [`List`](crate::List) and its cursors.
///
/// Every operation validates its arguments before touching any link, so a
/// returned error always leaves the list unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The index is outside the bound `len` of the operation.
    ///
    /// Access and removal accept `0..len`, while insertion and cursor
    /// positioning accept `0..=len`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// An endpoint operation was requested on an empty list.
    #[error("the list is empty")]
    EmptyCollection,
    /// A cursor was asked to `set` or `remove` without a last-returned element.
    #[error("the cursor has no last-returned element")]
    InvalidCursorState,
}

pub type Result<T> = std::result::Result<T, Error>;
