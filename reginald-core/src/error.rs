//! Error types for Reginald

use thiserror::Error;

/// The main error type for Reginald operations
///
/// Builder mutators are total over their inputs and never fail; the error
/// type covers the fallible edges around the builder, such as parsing a
/// dialect tag out of configuration text.
#[derive(Error, Debug)]
pub enum Error {
    /// Unrecognized dialect tag
    #[error("Unknown dialect: '{name}'")]
    UnknownDialect { name: String },
}

/// Convenience Result type for Reginald operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new unknown dialect error
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::UnknownDialect { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::unknown_dialect("oracle");
        assert!(matches!(err, Error::UnknownDialect { .. }));
        assert_eq!(err.to_string(), "Unknown dialect: 'oracle'");
    }
}
