//! Error types for structured-data

use thiserror::Error;

/// Errors raised while building, converting or parsing structured data.
///
/// Construction errors are fatal for the entity being built: an invalid
/// entity graph is never produced. Missing Google Search Console properties
/// are not errors; they are reported through [`GscReport`](crate::GscReport).
#[derive(Debug, Error)]
pub enum Error {
    /// The property is not declared in the schema of the type or its ancestors
    #[error("'{property}' is not a recognized property for {type_name}")]
    UnknownProperty { property: String, type_name: String },

    /// The value does not match any of the declared types of the property
    #[error("Invalid type for '{property}'. Expected one of {expected:?}.")]
    TypeMismatch {
        property: String,
        expected: Vec<String>,
    },

    /// Several values were given for a property that holds a single one
    #[error("'{property}' is not repeatable but multiple values were provided")]
    NotRepeatable { property: String },

    /// A primitive wrapper received a value of the wrong kind
    #[error("expected {expected}, got {found}")]
    WrongKind {
        expected: &'static str,
        found: &'static str,
    },

    /// Malformed literal for a primitive data type
    #[error("invalid {kind}: {value}")]
    InvalidLiteral { kind: &'static str, value: String },

    /// Failed to parse or validate the URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// URL parse error (from url crate)
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A type-specific invariant does not hold
    #[error("{type_name}: {message}")]
    Constraint { type_name: String, message: String },

    /// JSON-LD names a type that has no registered entity kind
    #[error("unknown schema type: {0}")]
    UnknownType(String),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read file
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn constraint(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Constraint {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Whether the error is about the kind of a value rather than its content.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch { .. } | Self::NotRepeatable { .. } | Self::WrongKind { .. }
        )
    }

    /// Whether the error is about the content of a correctly typed value,
    /// an unknown name, or a violated invariant.
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownProperty { .. }
                | Self::InvalidLiteral { .. }
                | Self::InvalidUrl(_)
                | Self::UrlParse(_)
                | Self::Constraint { .. }
                | Self::UnknownType(_)
        )
    }
}

/// Result type alias for structured-data operations.
pub type Result<T> = std::result::Result<T, Error>;
