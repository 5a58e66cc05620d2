use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("error reading input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to decode PEM block: {0}")]
    Pem(#[from] pem::error::Error),

    #[error("error decoding hex: {0}")]
    Hex(#[from] hextext::error::Error),

    #[error("invalid key length: {0} bytes (expected 32 or 64)")]
    InvalidLength(usize),

    #[error("error encoding PEM: {0}")]
    Encode(#[source] std::io::Error),

    #[error("error writing hex: {0}")]
    Write(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
