use thiserror::Error;

/// Errors that can occur when parsing hexadecimal text.
///
/// Offsets are counted from the first character after leading whitespace
/// has been trimmed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The trimmed text has an odd number of digits
    #[error("odd length hex string")]
    OddLength,

    /// A character outside `[0-9a-fA-F]`
    #[error("invalid hex character {c:?} at position {index}")]
    InvalidHexCharacter { c: char, index: usize },
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                Error::InvalidHexCharacter { c, index }
            }
            // only produced by decode_to_slice, which is not used here
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                Error::OddLength
            }
        }
    }
}
