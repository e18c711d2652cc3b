//! Error types for `CadGltf`

use thiserror::Error;

/// The error type for `CadGltf` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Document Invariant Errors ====================
    /// A cross-reference points past the end of its target array.
    #[error("{kind} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// What the index refers to (e.g. "accessor", "node").
        kind: &'static str,
        /// The dangling index.
        index: usize,
        /// Length of the target array.
        len: usize,
    },

    /// A buffer view or accessor reaches past the end of the data it windows.
    #[error("{kind} {index} ends at byte {end} but only {available} bytes are available")]
    ByteRangeOutOfBounds {
        /// "bufferView" or "accessor".
        kind: &'static str,
        /// Index of the offending record.
        index: usize,
        /// One past the last byte the record covers.
        end: usize,
        /// Bytes available in the enclosing buffer or view.
        available: usize,
    },

    /// The embedded payload does not match the buffer's declared `byteLength`.
    #[error("buffer {index} declares {declared} bytes but its payload holds {actual}")]
    BufferLengthMismatch {
        /// Buffer index.
        index: usize,
        /// Declared `byteLength`.
        declared: usize,
        /// Decoded payload length.
        actual: usize,
    },

    // ==================== Data URI Errors ====================
    /// The URI is not an `application/octet-stream` base64 data URI.
    #[error("not an embedded octet-stream data URI")]
    InvalidDataUri,

    /// The data URI payload is not valid base64.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Not enough bytes to read the requested elements.
    #[error("unexpected end of buffer data")]
    UnexpectedEof,

    // ==================== Serialization Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for `CadGltf` operations.
pub type Result<T> = std::result::Result<T, Error>;
