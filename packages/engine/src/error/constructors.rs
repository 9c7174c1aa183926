//! Constructor helpers for [`SiftError`]

use super::types::SiftError;

impl SiftError {
    /// Creates a selector syntax error
    ///
    /// # Arguments
    /// * `selector` - The rejected selector text
    /// * `reason` - Why the selector was rejected
    pub fn selector_syntax(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        SiftError::SelectorSyntax {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Creates a stream error without position information
    pub fn stream(message: impl Into<String>) -> Self {
        SiftError::Stream {
            message: message.into(),
            position: None,
        }
    }

    /// Creates a stream error located at a byte offset of the input
    pub fn stream_at(message: impl Into<String>, position: u64) -> Self {
        SiftError::Stream {
            message: message.into(),
            position: Some(position),
        }
    }

    /// Creates an unsupported representation error
    pub fn unsupported_representation(requested: impl Into<String>) -> Self {
        SiftError::UnsupportedRepresentation {
            requested: requested.into(),
        }
    }

    /// Creates a resource loading error
    pub fn resource(name: impl Into<String>, source: std::io::Error) -> Self {
        SiftError::Resource {
            name: name.into(),
            source,
        }
    }

    /// Attach a byte position to a stream error that does not carry one yet
    #[must_use]
    pub fn at_position(self, offset: u64) -> Self {
        match self {
            SiftError::Stream {
                message,
                position: None,
            } => SiftError::Stream {
                message,
                position: Some(offset),
            },
            other => other,
        }
    }
}
