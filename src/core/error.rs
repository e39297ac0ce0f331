// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for slaformats.
//!
//! Registry lookups never fail: an unknown id or a missing capability is
//! reported as `None`. The errors below come from configuration parsing and
//! from the concrete archive readers and writers.

use thiserror::Error;

/// Errors that can occur while configuring, writing or reading an archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Parse error in an archive or configuration document
    #[error("Parse error in {context}: {message}")]
    ParseError {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Configuration value is missing or malformed
    #[error("Invalid configuration key '{key}': {reason}")]
    InvalidConfig {
        /// Configuration key
        key: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Archive belongs to a different format than the reader expects
    #[error("Format mismatch: expected '{expected}', found '{found}'")]
    FormatMismatch {
        /// Format id the reader was built for
        expected: String,
        /// Format id recorded in the archive
        found: String,
    },

    /// Stored checksum does not match the archive contents
    #[error("Checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch {
        /// Checksum recorded in the trailer
        stored: u32,
        /// Checksum computed over the archive
        computed: u32,
    },

    /// Unsupported feature or archive version
    #[error("Unsupported feature: '{feature}'")]
    Unsupported {
        /// What is not supported
        feature: String,
    },

    /// Progress callback asked to stop
    #[error("Operation cancelled at {percent}%")]
    Cancelled {
        /// Last reported progress
        percent: u32,
    },

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArchiveError {
    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        ArchiveError::ParseError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ArchiveError::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a format mismatch error.
    pub fn format_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ArchiveError::FormatMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an unsupported feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        ArchiveError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ArchiveError::ParseError { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            ArchiveError::InvalidConfig { key, reason } => {
                vec![("key", key.clone()), ("reason", reason.clone())]
            }
            ArchiveError::FormatMismatch { expected, found } => {
                vec![("expected", expected.clone()), ("found", found.clone())]
            }
            ArchiveError::ChecksumMismatch { stored, computed } => vec![
                ("stored", stored.to_string()),
                ("computed", computed.to_string()),
            ],
            ArchiveError::Unsupported { feature } => vec![("feature", feature.clone())],
            ArchiveError::Cancelled { percent } => vec![("percent", percent.to_string())],
            ArchiveError::Io(err) => vec![("message", err.to_string())],
        }
    }
}

/// Result type for slaformats operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = ArchiveError::parse("PrintConfig", "expected `=`");
        assert!(matches!(err, ArchiveError::ParseError { .. }));
        assert_eq!(err.to_string(), "Parse error in PrintConfig: expected `=`");
    }

    #[test]
    fn test_invalid_config_error() {
        let err = ArchiveError::invalid_config("layer_height", "not a number");
        assert_eq!(
            err.to_string(),
            "Invalid configuration key 'layer_height': not a number"
        );
    }

    #[test]
    fn test_format_mismatch_error() {
        let err = ArchiveError::format_mismatch("SL1", "PWMO");
        assert_eq!(
            err.to_string(),
            "Format mismatch: expected 'SL1', found 'PWMO'"
        );
    }

    #[test]
    fn test_checksum_mismatch_display() {
        let err = ArchiveError::ChecksumMismatch {
            stored: 0xdead_beef,
            computed: 0x1,
        };
        assert_eq!(
            err.to_string(),
            "Checksum mismatch: stored 0xdeadbeef, computed 0x00000001"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ArchiveError = io.into();
        assert!(matches!(err, ArchiveError::Io(_)));
        assert_eq!(err.log_fields()[0].0, "message");
    }

    #[test]
    fn test_log_fields() {
        let err = ArchiveError::Cancelled { percent: 40 };
        assert_eq!(err.log_fields(), vec![("percent", "40".to_string())]);

        let err = ArchiveError::unsupported("container version 9");
        assert_eq!(
            err.log_fields(),
            vec![("feature", "container version 9".to_string())]
        );
    }
}
