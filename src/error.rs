//! Error types for Lifeline Assist.

use crate::dialogue::Step;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Record store error: {0}")]
    RecordStore(#[from] RecordStoreError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Failures loading the record list.
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Failed to read records from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse records in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Presentation channel errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} failed to start: {reason}")]
    StartupFailed { name: String, reason: String },

    #[error("Failed to read upload {path}: {reason}")]
    UploadFailed { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Events the dialogue refuses outright.
///
/// Invalid IDs and unclear yes/no answers are not errors: they re-prompt
/// inside the conversation. These cover input the current step never
/// offers, and leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Step {step} does not accept {event}")]
    NotOffered { step: Step, event: String },

    #[error("Empty submission")]
    EmptySubmission,

    #[error("Unsupported photo file: {name} (expected jpg, jpeg or png)")]
    UnsupportedPhoto { name: String },
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
