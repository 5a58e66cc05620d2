pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use error::Error;
use hex2pem::decoder::{DecodableFrom, Decoder};

/// Byte payload in its hexadecimal text form.
///
/// `Display` renders lower-case digits with no separators. Parsing accepts
/// either case and ignores Unicode whitespace around the digits, but not
/// between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hex {
    bytes: Vec<u8>,
}

impl Hex {
    pub fn from_bytes(data: &[u8]) -> Self {
        Hex {
            bytes: data.to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn parse(input: &[u8]) -> Result<Self, Error> {
        let text = String::from_utf8_lossy(input);
        let trimmed = text.trim();
        let bytes = hex::decode(trimmed).map_err(|e| match Error::from(e) {
            // hex reports the offending byte, not the character it belongs to
            Error::InvalidHexCharacter { index, .. } => Error::InvalidHexCharacter {
                c: char_at(trimmed, index),
                index,
            },
            other => other,
        })?;
        Ok(Hex { bytes })
    }
}

fn char_at(s: &str, index: usize) -> char {
    s.char_indices()
        .take_while(|(i, _)| *i <= index)
        .last()
        .map_or(char::REPLACEMENT_CHARACTER, |(_, c)| c)
}

impl Display for Hex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(&self.bytes))
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::parse(s.as_bytes())
    }
}

impl DecodableFrom<&[u8]> for Hex {}

impl Decoder<&[u8], Hex> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Hex, Self::Error> {
        Hex::parse(self)
    }
}

impl DecodableFrom<Hex> for Vec<u8> {}

impl Decoder<Hex, Vec<u8>> for Hex {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        Ok(self.bytes.clone())
    }
}
