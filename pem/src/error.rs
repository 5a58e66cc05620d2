use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when parsing PEM data.
///
/// PEM parsing follows RFC 7468: a block needs matching boundary markers
/// and a valid base64 body. Optional RFC 1421 headers are `Name: value`
/// lines and must be followed by at least one more line before the end.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No opening boundary marker (e.g., `-----BEGIN PUBLIC KEY-----`) found
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// Missing the closing boundary marker (e.g., `-----END PUBLIC KEY-----`)
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// The BEGIN and END labels do not match (e.g., BEGIN PRIVATE KEY, END PUBLIC KEY)
    #[error("label doesn't match")]
    LabelMissMatch,

    /// Malformed boundary marker
    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    /// Headers directly followed by the post encapsulation boundary
    #[error("missing PEM data")]
    MissingData,

    /// Failed to decode base64 data
    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
