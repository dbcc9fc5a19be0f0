use thiserror::Error;

/// Errors returned by [`AvlTree`](crate::AvlTree) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AvlError {
    /// The value handed to `remove` is not stored in the tree. Removal is
    /// the only operation whose contract requires the value to exist;
    /// lookups report absence as `None` instead.
    #[error("NOT_FOUND")]
    NotFound,
}
