use thiserror::Error;

/// Errors returned by the checked operations of a [`Vector`](crate::Vector)
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum VectorError {
    #[error("index {index} is out of range for vector of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    /// Not returned by this crate: `map` and `for_each` take typed closures, so a
    /// non-callable callback does not compile.
    #[error("must pass a function to '{0}'")]
    InvalidCallback(&'static str),
}

impl VectorError {
    pub(crate) fn out_of_range(index: usize, size: usize) -> Self {
        VectorError::IndexOutOfRange { index, size }
    }
}
