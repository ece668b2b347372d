//! End-to-end encryption round-trip pipeline
//!
//! Generates fresh secret material, derives a key, encrypts, then decrypts
//! through a second engine call with the same key and IV, returning both
//! artifacts so the caller can verify the round trip. Straight-line control
//! flow: any step failure propagates unmodified.
//!
//! The pipeline deliberately persists nothing. A real deployment would have
//! to store {key, IV} separately from {ciphertext} under different access
//! controls; producing those values is where this crate's job ends.

use zeroize::Zeroizing;

use crate::cipher::CipherEngine;
use crate::config::CryptoConfig;
use crate::error::{CryptoError, ErrorKind, Result};
use crate::kdf::derive_key;
use crate::material::{InitializationVector, Password, Salt};
use crate::random::{OsRandomSource, SecureRandomSource};

/// Outcome of one pipeline run: the hex ciphertext and the plaintext
/// recovered by decrypting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    pub ciphertext_hex: String,
    pub recovered: String,
}

/// Orchestrates random generation, key derivation, encryption, and
/// decryption. Every run constructs entirely fresh value objects and cipher
/// state; nothing is shared or cached across invocations.
pub struct Pipeline {
    config: CryptoConfig,
    random: Box<dyn SecureRandomSource>,
}

impl Pipeline {
    /// Pipeline with OS-backed randomness.
    pub fn new(config: CryptoConfig) -> Self {
        Self::with_random_source(config, Box::new(OsRandomSource::new()))
    }

    /// Pipeline with an injected random source (for testing).
    pub fn with_random_source(config: CryptoConfig, random: Box<dyn SecureRandomSource>) -> Self {
        Self { config, random }
    }

    /// Run the full round trip for one plaintext string.
    pub fn run(&mut self, plaintext: &str) -> Result<RoundTrip> {
        let password = Password::generate(self.random.as_mut())?;
        let salt = Salt::generate(self.random.as_mut())?;
        let iv = InitializationVector::generate(self.random.as_mut())?;

        let key = derive_key(&password, &salt, &self.config)?;

        let engine = CipherEngine::new(self.config);
        let ciphertext_hex = engine.encrypt(&key, &iv, plaintext.as_bytes())?;
        let recovered_bytes = engine.decrypt(&key, &iv, &ciphertext_hex)?;

        let recovered = recovered_string(recovered_bytes)?;

        Ok(RoundTrip {
            ciphertext_hex,
            recovered,
        })
    }
}

fn recovered_string(bytes: Zeroizing<Vec<u8>>) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| {
        CryptoError::with_kind_and_source(
            ErrorKind::DecryptionIntegrity,
            "recovered plaintext is not valid UTF-8",
            e,
        )
    })
}
