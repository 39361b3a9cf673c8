use thiserror::Error;

pub(crate) const SPLIT_NOT_ALLOWED: &str = "split() was called on a hand that cannot be split! \
Both initially dealt cards must be equal in value in order to split.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Bad input to a constructor or a draw.
    #[error("{0}")]
    InvalidArgument(String),
    /// The operation is not allowed in the current state of a hand.
    #[error("{0}")]
    InvalidState(String),
}

impl Error {
    pub(crate) fn argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub(crate) fn state(message: impl Into<String>) -> Self {
        Error::InvalidState(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
