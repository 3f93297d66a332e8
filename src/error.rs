//! Error types for Ansage
//!
//! All fallible operations in this crate return [`AnsageError`]. Errors in
//! the encoding pipeline are fatal to the invocation that raised them: no
//! partial WAV is produced and nothing is retried.

use thiserror::Error;

/// Result type alias using AnsageError
pub type Result<T> = std::result::Result<T, AnsageError>;

/// All possible errors in Ansage
#[derive(Error, Debug)]
pub enum AnsageError {
    // Acquisition errors
    #[error("Audio clip unavailable: {url} ({reason})")]
    ClipUnavailable { url: String, reason: String },

    #[error("Failed to decode audio clip {url}: {reason}")]
    DecodeFailure { url: String, reason: String },

    // Capability errors
    #[error("Audio decoding is not available: {reason}")]
    UnsupportedEnvironment { reason: String },

    // Buffer errors
    #[error("Invalid audio clip: {reason}")]
    InvalidClip { reason: String },

    // Directory errors
    #[error("Unknown line: {line}")]
    UnknownLine { line: String },

    // Generic I/O
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnsageError {
    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::ClipUnavailable { .. } => {
                "Check that the URL is reachable and the clip exists on the server"
            }
            Self::DecodeFailure { .. } => {
                "Verify the clip is a supported format (MP3, AAC, FLAC, Vorbis, WAV)"
            }
            Self::UnsupportedEnvironment { .. } => {
                "Rebuild with the 'codecs' feature or supply a custom decoder"
            }
            Self::InvalidClip { .. } => "The decoder produced inconsistent channel data",
            Self::UnknownLine { .. } => "Use the 'lines' command to list known lines",
            _ => "Check the error details and try again",
        }
    }
}
