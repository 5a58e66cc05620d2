use pem::Label;

const PUBLIC_KEY_LEN: usize = 32;
const PRIVATE_KEY_LEN: usize = 64;

/// Key type guessed from the payload length alone.
///
/// The bytes themselves are never inspected, so a 32-byte payload is a
/// "public key" whatever it actually contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyKind {
    Public,
    Private,
}

impl KeyKind {
    pub(crate) fn from_len(len: usize) -> Option<Self> {
        match len {
            PUBLIC_KEY_LEN => Some(KeyKind::Public),
            PRIVATE_KEY_LEN => Some(KeyKind::Private),
            _ => None,
        }
    }
}

impl From<KeyKind> for Label {
    fn from(kind: KeyKind) -> Self {
        match kind {
            KeyKind::Public => Label::PublicKey,
            KeyKind::Private => Label::PrivateKey,
        }
    }
}
