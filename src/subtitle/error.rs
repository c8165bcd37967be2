use thiserror::Error;

/// Errors raised while decoding, transforming or re-encoding subtitle entries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SrtError {
    /// Malformed index line, timestamp, time range or number
    #[error("Format error: {0}")]
    Format(String),

    /// A value the SRT format cannot represent (hours >= 100, arithmetic overflow)
    #[error("Range error: {0}")]
    Range(String),

    /// Text that cannot be decoded or re-encoded in the file's encoding
    #[error("Encoding error: {0}")]
    Encoding(String),
}

pub type SrtResult<T> = Result<T, SrtError>;
