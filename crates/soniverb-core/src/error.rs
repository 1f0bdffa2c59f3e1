//! Error types for the SoniVerb core.

use thiserror::Error;

use crate::types::ParamIndex;

/// Errors that can occur in the SoniVerb core.
///
/// Conversion and block processing never fail; only the control path
/// (parameter access) and construction return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReverbError {
    /// Parameter index outside `[0, PARAM_COUNT)`.
    #[error("parameter index {index} out of range")]
    OutOfRange {
        /// The rejected host index.
        index: ParamIndex,
    },
    /// The reverb engine could not be allocated or initialized.
    #[error("reverb engine initialization failed: {0}")]
    EngineInitFailure(String),
}

impl ReverbError {
    /// Create an init failure from any message.
    pub fn init_failure(reason: impl Into<String>) -> Self {
        Self::EngineInitFailure(reason.into())
    }
}

/// Result type for SoniVerb operations.
pub type ReverbResult<T> = Result<T, ReverbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ReverbError::OutOfRange { index: 4 };
        assert_eq!(err.to_string(), "parameter index 4 out of range");

        let err = ReverbError::init_failure("out of memory");
        assert_eq!(
            err.to_string(),
            "reverb engine initialization failed: out of memory"
        );
    }
}
