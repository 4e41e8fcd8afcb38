//! Error types for color extraction

use thiserror::Error;

/// Result type alias for color extraction operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Everything that can reject an extraction.
///
/// Both variants are terminal: the pipeline never returns a partial list.
#[derive(Error, Debug)]
pub enum ColorError {
    /// A caller-supplied argument is out of contract
    #[error("Invalid argument: {parameter} = {value}")]
    InvalidArgument { parameter: &'static str, value: String },

    /// The image could not be turned into a pixel buffer
    #[error("Failed to load image: {message}")]
    Acquisition {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    pub fn invalid_argument(parameter: &'static str, value: impl ToString) -> Self {
        Self::InvalidArgument {
            parameter,
            value: value.to_string(),
        }
    }

    /// Create an acquisition error with its underlying cause
    pub fn acquisition<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Acquisition {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an acquisition error that has no underlying cause
    pub fn acquisition_message(message: impl Into<String>) -> Self {
        Self::Acquisition {
            message: message.into(),
            source: None,
        }
    }

    pub fn is_acquisition(&self) -> bool {
        matches!(self, ColorError::Acquisition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_argument_message_names_the_parameter() {
        let err = ColorError::invalid_argument("number_of_colors", -3);
        assert_eq!(err.to_string(), "Invalid argument: number_of_colors = -3");
        assert!(!err.is_acquisition());
    }

    #[test]
    fn acquisition_keeps_its_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err = ColorError::acquisition("could not read file", io);
        assert!(err.is_acquisition());
        assert_eq!(err.to_string(), "Failed to load image: could not read file");
        assert!(err.source().is_some());

        let bare = ColorError::acquisition_message("no decoder");
        assert!(bare.source().is_none());
    }
}
