use std::io::Write;

use hex2pem::decoder::Decoder;
use hextext::Hex;
use pem::Pem;
use tracing::debug;

use crate::error::{Error, Result};
use crate::key::KeyKind;

/// Hex to PEM.
///
/// The label comes from the payload length: 32 bytes is a public key, 64
/// bytes a private key. Nothing is written for any other length.
pub(crate) fn execute<W: Write>(input: &[u8], out: &mut W) -> Result<()> {
    let hex: Hex = input.decode()?;
    let bytes = hex.into_bytes();

    let kind = KeyKind::from_len(bytes.len()).ok_or(Error::InvalidLength(bytes.len()))?;
    debug!(?kind, len = bytes.len(), "detected key type");

    let pem = Pem::from_bytes(kind.into(), &bytes);
    writeln!(out, "{pem}").map_err(Error::Encode)?;
    out.flush().map_err(Error::Encode)
}
