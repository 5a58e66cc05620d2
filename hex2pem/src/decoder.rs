//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type
//! `D`. Both codecs of the converter implement it: text becomes a `Pem` or
//! a `Hex`, and those become raw payload bytes.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - performs the conversion
//! 2. `DecodableFrom<T>` - marker trait restricting which pairs exist
//!
//! A pair that was never declared with `DecodableFrom` does not compile.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use hex2pem::decoder::{Decoder, DecodableFrom};
//!
//! struct Armored(String);
//! struct Payload(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct ArmorError;
//!
//! impl DecodableFrom<Armored> for Payload {}
//!
//! impl Decoder<Armored, Payload> for Armored {
//!     type Error = ArmorError;
//!
//!     fn decode(&self) -> Result<Payload, Self::Error> {
//!         Ok(Payload(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. The destination type must implement
/// `DecodableFrom<T>`.
///
/// # Examples
///
/// ```no_run
/// use hex2pem::decoder::{Decoder, DecodableFrom};
///
/// struct Label(String);
///
/// #[derive(Debug)]
/// struct NotUtf8;
///
/// impl DecodableFrom<Vec<u8>> for Label {}
///
/// impl Decoder<Vec<u8>, Label> for Vec<u8> {
///     type Error = NotUtf8;
///
///     fn decode(&self) -> Result<Label, Self::Error> {
///         String::from_utf8(self.clone()).map(Label).map_err(|_| NotUtf8)
///     }
/// }
///
/// let label: Label = b"PUBLIC KEY".to_vec().decode().unwrap();
/// assert_eq!(label.0, "PUBLIC KEY");
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The conditions depend on
    /// the implementing codec.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for each destination type next to the
/// matching `Decoder` implementation:
///
/// ```no_run
/// use hex2pem::decoder::DecodableFrom;
///
/// struct Text;
/// struct Bytes;
///
/// impl DecodableFrom<Text> for Bytes {}
/// ```
pub trait DecodableFrom<T> {}
