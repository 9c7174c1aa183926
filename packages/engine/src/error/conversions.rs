//! Conversions from tokenizer and I/O errors
//!
//! Everything raised while reading or writing markup is a stream error.

use super::types::SiftError;

impl From<quick_xml::Error> for SiftError {
    fn from(err: quick_xml::Error) -> Self {
        SiftError::stream(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for SiftError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        SiftError::stream(format!("malformed attribute: {err}"))
    }
}

impl From<std::io::Error> for SiftError {
    fn from(err: std::io::Error) -> Self {
        SiftError::stream(format!("I/O failure: {err}"))
    }
}

impl From<std::str::Utf8Error> for SiftError {
    fn from(err: std::str::Utf8Error) -> Self {
        SiftError::stream(format!("invalid UTF-8: {err}"))
    }
}

impl From<std::string::FromUtf8Error> for SiftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SiftError::stream(format!("invalid UTF-8: {err}"))
    }
}
