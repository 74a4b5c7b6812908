// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the ring search.

use thiserror::Error;

/// Result type for ring search operations.
pub type RingResult<T> = Result<T, RingError>;

/// Errors reported before a search starts.
///
/// The search itself is total over valid input, so the only failure is a
/// ring size that does not satisfy the precondition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// The ring size is not an integer in [3, 5].
    #[error("invalid ring size {input:?}: expected an integer in range [3, 5]")]
    InvalidArgument { input: String },
}

impl RingError {
    pub(crate) fn invalid(input: impl ToString) -> Self {
        RingError::InvalidArgument {
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_input() {
        let err = RingError::invalid("7");
        assert_eq!(
            err.to_string(),
            "invalid ring size \"7\": expected an integer in range [3, 5]"
        );
    }
}
