//! # hex2pem
//!
//! Core conversion traits for the hex2pem key material converter.
//!
//! The codecs in this workspace (`pem` and `hextext`) each turn a textual
//! form into a typed value and a typed value into its payload bytes. They
//! share the `Decoder` trait defined here so the converter can chain them
//! the same way in both directions.
//!
//! ## Overview
//!
//! ```text
//! &str  → Pem → Vec<u8> → Hex   (PEM to hex)
//! &[u8] → Hex → Vec<u8> → Pem   (hex to PEM)
//! ```
//!
//! Rendering back to text goes through `Display` on `Pem` and `Hex`.
//!
//! ## Example
//!
//! ```ignore
//! use hex2pem::decoder::Decoder;
//! use pem::Pem;
//!
//! let pem: Pem = "-----BEGIN PUBLIC KEY-----\nAQID\n-----END PUBLIC KEY-----".decode()?;
//! let bytes: Vec<u8> = pem.decode()?;
//! assert_eq!(bytes, vec![1, 2, 3]);
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
