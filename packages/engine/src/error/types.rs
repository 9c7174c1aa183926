//! Core error types for selector construction and document scanning.

use thiserror::Error;

/// Classification of a [`SiftError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad selector text, raised while constructing a path expression
    SelectorSyntax,
    /// Malformed input or I/O failure during a scan
    Stream,
    /// Requested output kind is not one of the supported representations
    UnsupportedRepresentation,
    /// A named resource could not be loaded
    Resource,
    /// Extractor settings out of range
    Configuration,
}

/// Main error type for xmlsift operations
///
/// Scan errors are always fatal to the scan that raised them: no partial
/// result mapping is ever returned alongside a `Stream` error.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Selector text rejected at construction
    #[error("'{selector}' is not a valid path expression: {reason}")]
    SelectorSyntax { selector: String, reason: String },

    /// Malformed document or failed read
    #[error("XML stream error{}: {message}", position_suffix(.position))]
    Stream {
        message: String,
        position: Option<u64>,
    },

    /// Output kind outside {text, markup, node}
    #[error("unsupported representation '{requested}', expected one of: text, markup, node")]
    UnsupportedRepresentation { requested: String },

    /// Resource loading failure
    #[error("failed to read resource '{name}': {source}")]
    Resource {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Rejected extractor settings
    #[error(transparent)]
    Configuration(#[from] crate::config::ConfigurationError),
}

fn position_suffix(position: &Option<u64>) -> String {
    position.map(|p| format!(" at byte {p}")).unwrap_or_default()
}

/// Result type for xmlsift operations
pub type SiftResult<T> = Result<T, SiftError>;

impl SiftError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SiftError::SelectorSyntax { .. } => ErrorKind::SelectorSyntax,
            SiftError::Stream { .. } => ErrorKind::Stream,
            SiftError::UnsupportedRepresentation { .. } => ErrorKind::UnsupportedRepresentation,
            SiftError::Resource { .. } => ErrorKind::Resource,
            SiftError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_selector_syntax(&self) -> bool {
        self.kind() == ErrorKind::SelectorSyntax
    }

    #[inline]
    #[must_use]
    pub fn is_stream(&self) -> bool {
        self.kind() == ErrorKind::Stream
    }

    /// Byte offset in the input where a stream error was detected, if known
    #[must_use]
    pub fn position(&self) -> Option<u64> {
        match self {
            SiftError::Stream { position, .. } => *position,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_error_display_includes_position() {
        let err = SiftError::stream_at("unexpected end of input", 42);
        assert_eq!(
            err.to_string(),
            "XML stream error at byte 42: unexpected end of input"
        );
        assert_eq!(err.position(), Some(42));
    }

    #[test]
    fn stream_error_display_without_position() {
        let err = SiftError::stream("reader closed");
        assert_eq!(err.to_string(), "XML stream error: reader closed");
        assert!(err.is_stream());
    }

    #[test]
    fn kinds_are_classified() {
        assert_eq!(
            SiftError::selector_syntax("/a/", "trailing slash").kind(),
            ErrorKind::SelectorSyntax
        );
        assert_eq!(
            SiftError::unsupported_representation("json").kind(),
            ErrorKind::UnsupportedRepresentation
        );
    }
}
