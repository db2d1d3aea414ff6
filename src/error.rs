//! Error types shared across the crate.

use std::fmt;

/// Convenience alias for fallible dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Error returned by dispatch operations.
///
/// Two categories cover everything the core can reject: unusable input
/// snapshots and out-of-range configuration. Both carry a message the
/// caller can log before retrying with corrected data; the core itself
/// never panics on bad input.
///
/// # Examples
///
/// ```
/// use u_dispatch::error::DispatchError;
///
/// let err = DispatchError::input("no pending tasks");
/// assert_eq!(err.to_string(), "invalid input: no pending tasks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The input snapshot cannot be processed (no deployable units,
    /// no pending tasks, an empty point set).
    Input(String),
    /// A configuration value is out of range or an algorithm name is
    /// unknown.
    Configuration(String),
}

impl DispatchError {
    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        DispatchError::Input(message.into())
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        DispatchError::Configuration(message.into())
    }

    /// The underlying message, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            DispatchError::Input(m) | DispatchError::Configuration(m) => m,
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Input(m) => write!(f, "invalid input: {}", m),
            DispatchError::Configuration(m) => write!(f, "invalid configuration: {}", m),
        }
    }
}

impl std::error::Error for DispatchError {}
