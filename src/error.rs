//! Error type shared by every fallible map operation

use crate::config::MAX_CAPACITY;

/// Represents errors that can occur when building or using an `OpenMap`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key or value handed to `put_checked` was absent
    InvalidArgument(&'static str),

    /// Initial capacity or load factor is out of range
    InvalidConfiguration(&'static str),

    /// Requested initial capacity is larger than [`MAX_CAPACITY`]
    CapacityExceeded {
        /// Capacity that was asked for
        requested: usize,
        /// Largest capacity accepted at construction
        max: usize,
    },

    /// An iterator was advanced after it was exhausted
    NoSuchElement,
}

impl Error {
    /// Builds the error returned when the initial capacity is above the ceiling
    pub(crate) fn capacity_exceeded(requested: usize) -> Self {
        Self::CapacityExceeded { requested, max: MAX_CAPACITY }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Self::InvalidConfiguration(what) => write!(f, "invalid configuration: {what}"),
            Self::CapacityExceeded { requested, max } => write!(
                f,
                "attempt to create a map whose capacity ({requested}) is larger than {max}"
            ),
            Self::NoSuchElement => write!(f, "iterator has no more elements"),
        }
    }
}

impl std::error::Error for Error {}

/// Map result
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::capacity_exceeded(20_000).to_string(),
            "attempt to create a map whose capacity (20000) is larger than 10000"
        );
        assert_eq!(Error::NoSuchElement.to_string(), "iterator has no more elements");
        assert_eq!(
            Error::InvalidArgument("key is absent").to_string(),
            "invalid argument: key is absent"
        );
    }
}
