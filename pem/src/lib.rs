pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use base64::{
    Engine, alphabet,
    engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
};
use error::Error;
use hex2pem::decoder::{DecodableFrom, Decoder};
use regex::Regex;

const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";

// RFC 7468: base64 text is wrapped at 64 characters
const LINE_WIDTH: usize = 64;

// Padding is still required, but non-zero bits after the last full byte
// are ignored.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Private key material
    PrivateKey,
    /// Public key material
    PublicKey,
    /// Any other label found in an input block
    Other(String),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::PrivateKey => write!(f, "{}", PRIVATE_KEY_LABEL),
            Label::PublicKey => write!(f, "{}", PUBLIC_KEY_LABEL),
            Label::Other(label) => write!(f, "{}", label),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        match s {
            PRIVATE_KEY_LABEL => Label::PrivateKey,
            PUBLIC_KEY_LABEL => Label::PublicKey,
            other => Label::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Begin,
    End,
}

impl Label {
    fn get_label(line: &str) -> Result<(Boundary, Label), Error> {
        let re = Regex::new(r"^-----(BEGIN|END) (.*)-----[ \t\r]*$")
            .map_err(|_| Error::InvalidEncapsulationBoundary)?;
        let captured = re
            .captures(line)
            .ok_or(Error::InvalidEncapsulationBoundary)?;
        let boundary = match captured.get(1).map(|m| m.as_str()) {
            Some("BEGIN") => Boundary::Begin,
            Some("END") => Boundary::End,
            _ => return Err(Error::InvalidEncapsulationBoundary),
        };
        let label = captured
            .get(2)
            .map(|m| Label::from(m.as_str()))
            .ok_or(Error::InvalidEncapsulationBoundary)?;
        Ok((boundary, label))
    }
}

/*
ref: https://www.rfc-editor.org/rfc/rfc7468.html#section-3
     https://www.rfc-editor.org/rfc/rfc1421.html#section-4.4 (headers)
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pem {
    label: Label,
    headers: Vec<(String, String)>,
    contents: Vec<u8>,
}

impl Pem {
    pub fn from_bytes(label: Label, data: &[u8]) -> Self {
        Pem {
            label,
            headers: Vec::new(),
            contents: data.to_vec(),
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// RFC 1421 headers in the order they appeared in the block.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

impl Display for Pem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}{}-----", BEGIN_PREFIX, self.label)?;
        for (name, value) in &self.headers {
            writeln!(f, "{}: {}", name, value)?;
        }
        if !self.headers.is_empty() {
            writeln!(f)?;
        }
        let encoded = STANDARD.encode(&self.contents);
        for chunk in encoded.as_bytes().chunks(LINE_WIDTH) {
            let line = std::str::from_utf8(chunk).map_err(|_| std::fmt::Error)?;
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}{}-----", END_PREFIX, self.label)
    }
}

impl DecodableFrom<Pem> for Vec<u8> {}

impl Decoder<Pem, Vec<u8>> for Pem {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        // This discards label and header information.
        Ok(self.contents.clone())
    }
}

impl DecodableFrom<String> for Pem {}

impl Decoder<String, Pem> for String {
    type Error = Error;

    fn decode(&self) -> Result<Pem, Self::Error> {
        Pem::from_str(self)
    }
}

impl DecodableFrom<&str> for Pem {}

impl Decoder<&str, Pem> for &str {
    type Error = Error;

    fn decode(&self) -> Result<Pem, Self::Error> {
        Pem::from_str(self)
    }
}

/// Parses the first valid PEM block in `s`.
///
/// Text before the block and anything after its post encapsulation
/// boundary is ignored. When a block starting at some `-----BEGIN ` line
/// turns out to be malformed, parsing moves on to the next one; if none
/// succeeds, the error of the first candidate is returned.
impl FromStr for Pem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.lines().collect::<Vec<&str>>();
        let mut first_error = None;
        for (i, line) in lines.iter().enumerate() {
            if !line.starts_with(BEGIN_PREFIX) {
                // explanatory text
                continue;
            }
            match parse_block(&lines[i..]) {
                Ok(pem) => return Ok(pem),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        Err(first_error.unwrap_or(Error::MissingPreEncapsulationBoundary))
    }
}

/*
* pre-eb -> headers -> base64lines -> post-eb
*        |---------->|   |_|
 */
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
enum PemParsingState {
    #[default]
    PreEncapsulationBoundary,
    Headers,
    Base64Lines,
    PostEncapsulationBoundary,
}

fn parse_block(lines: &[&str]) -> Result<Pem, Error> {
    let mut state = PemParsingState::default();
    let mut label = Label::Other(String::new());
    let mut headers = vec![];
    let mut base64_data = String::new();
    let mut has_body = false;
    let mut lines = lines.iter().copied().peekable();
    loop {
        match state {
            PemParsingState::PreEncapsulationBoundary => match lines.next() {
                Some(line) => match Label::get_label(line)? {
                    (Boundary::Begin, l) => {
                        label = l;
                        state = PemParsingState::Headers;
                    }
                    (Boundary::End, _) => return Err(Error::MissingPreEncapsulationBoundary),
                },
                None => return Err(Error::MissingPreEncapsulationBoundary),
            },
            PemParsingState::Headers => match lines.peek().and_then(|line| parse_header(line)) {
                Some(header) => {
                    headers.push(header);
                    lines.next();
                }
                None if lines.peek().is_some() => state = PemParsingState::Base64Lines,
                None => return Err(Error::MissingPostEncapsulationBoundary),
            },
            PemParsingState::Base64Lines => match lines.next() {
                Some(line) if is_boundary(line) => match Label::get_label(line)? {
                    (Boundary::End, l) => {
                        if l.ne(&label) {
                            return Err(Error::LabelMissMatch);
                        }
                        // headers must be separated from the post-eb by at least one line
                        if !headers.is_empty() && !has_body {
                            return Err(Error::MissingData);
                        }
                        state = PemParsingState::PostEncapsulationBoundary;
                    }
                    (Boundary::Begin, _) => return Err(Error::MissingPostEncapsulationBoundary),
                },
                Some(line) => {
                    has_body = true;
                    base64_data.extend(line.chars().filter(|c| !matches!(c, ' ' | '\t' | '\r')));
                }
                None => return Err(Error::MissingPostEncapsulationBoundary),
            },
            PemParsingState::PostEncapsulationBoundary => break,
        }
    }

    let contents = LENIENT.decode(&base64_data).map_err(Error::Base64Decode)?;

    Ok(Pem {
        label,
        headers,
        contents,
    })
}

fn is_boundary(line: &str) -> bool {
    line.starts_with(BEGIN_PREFIX) || line.starts_with(END_PREFIX)
}

fn parse_header(line: &str) -> Option<(String, String)> {
    if is_boundary(line) {
        return None;
    }
    let (name, value) = line.split_once(':')?;
    Some((name.trim().to_string(), value.trim().to_string()))
}
