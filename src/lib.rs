//! saltpipe: password-based symmetric encryption round trip
//!
//! A minimal, correct reference for combining a password-based key
//! derivation function (scrypt) with a block cipher (AES-256 in CBC mode,
//! PKCS#7 padding). The [`pipeline::Pipeline`] generates random password,
//! salt, and IV material, derives a 256-bit key, encrypts a plaintext
//! string to hex, decrypts it back, and returns both artifacts.
//!
//! The scheme is deliberately unauthenticated: CBC carries no integrity
//! tag, and the only tamper signal is padding validation on decrypt. It is
//! a teaching reference, not a production envelope format.

pub mod cipher;
pub mod config;
pub mod error;
pub mod kdf;
pub mod material;
pub mod pipeline;
pub mod random;

pub use cipher::CipherEngine;
pub use config::CryptoConfig;
pub use error::{CryptoError, ErrorCategory, ErrorKind, Result};
pub use kdf::derive_key;
pub use material::{CommonKey, InitializationVector, Password, Salt};
pub use pipeline::{Pipeline, RoundTrip};
pub use random::{FixedRandomSource, OsRandomSource, SecureRandomSource};
