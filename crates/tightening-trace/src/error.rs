//! Error types for tightening trace payload handling.

use thiserror::Error;

/// Trace payload decode errors.
#[derive(Error, Debug)]
pub enum TraceFormatError {
    /// Payload is not valid base64 (bad alphabet or padding).
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded payload cannot be split into whole little-endian i16 samples.
    #[error("decoded payload has odd byte length {len}; samples are 2 bytes each")]
    OddLength {
        /// Byte length of the decoded payload.
        len: usize,
    },
}

/// Result type for trace payload operations.
pub type TraceResult<T> = std::result::Result<T, TraceFormatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    #[test]
    fn odd_length_display_names_the_length() {
        let err = TraceFormatError::OddLength { len: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn base64_error_converts() {
        match STANDARD.decode("not base64!") {
            Err(decode_err) => {
                let err: TraceFormatError = decode_err.into();
                assert!(matches!(err, TraceFormatError::Base64(_)));
            }
            Ok(_) => panic!("expected decode error"),
        }
    }
}
