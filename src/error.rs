use thiserror::Error;

/// Errors surfaced by the codec. End-of-stream during decoding is not an
/// error; it is the normal termination signal and stays internal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("data too short for header (need 3 bytes)")]
    TruncatedHeader,

    #[error("unsupported integer width {0}, must be 8, 16, 32 or 64")]
    UnsupportedWidth(u8),

    #[error("rice parameter k={k} exceeds integer width {width}")]
    KOutOfRange { k: u8, width: u8 },

    #[error("input length {len} is not a multiple of {chunk} bytes")]
    RaggedInput { len: usize, chunk: usize },
}
