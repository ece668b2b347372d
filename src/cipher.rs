//! AES-256-CBC encryption and decryption
//!
//! Cipher state is single-use: every encrypt or decrypt call constructs a
//! fresh encryptor/decryptor bound to (key, IV), runs one pad-and-process
//! pass, and drops it. CBC chaining state must never survive across
//! messages.
//!
//! The mode is unauthenticated. The only integrity signal on decrypt is
//! PKCS#7 padding validation, which catches gross corruption but not
//! arbitrary tampering; callers must treat any decrypt failure as
//! "ciphertext untrustworthy" rather than attempt partial recovery.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use zeroize::Zeroizing;

use crate::config::CryptoConfig;
use crate::error::{CryptoError, ErrorKind, Result};
use crate::material::{CommonKey, InitializationVector};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-256-CBC engine with PKCS#7 padding and hex-encoded ciphertext.
///
/// Stateless apart from its configuration; safe to call repeatedly, with
/// fresh cipher state constructed per operation.
pub struct CipherEngine {
    config: CryptoConfig,
}

impl CipherEngine {
    pub fn new(config: CryptoConfig) -> Self {
        Self { config }
    }

    fn check_material(&self, key: &CommonKey, iv: &InitializationVector) -> Result<()> {
        if key.as_bytes().len() != self.config.key_len {
            return Err(CryptoError::with_kind(
                ErrorKind::CipherConfiguration,
                format!(
                    "key must be {} bytes for this engine, got {}",
                    self.config.key_len,
                    key.as_bytes().len()
                ),
            ));
        }
        if iv.as_bytes().len() != self.config.block_len {
            return Err(CryptoError::with_kind(
                ErrorKind::CipherConfiguration,
                format!(
                    "IV must match the {}-byte block size, got {}",
                    self.config.block_len,
                    iv.as_bytes().len()
                ),
            ));
        }
        Ok(())
    }

    /// Encrypt plaintext bytes, returning hex-encoded ciphertext.
    pub fn encrypt(
        &self,
        key: &CommonKey,
        iv: &InitializationVector,
        plaintext: &[u8],
    ) -> Result<String> {
        self.check_material(key, iv)?;

        let encryptor = Aes256CbcEnc::new_from_slices(key.as_bytes(), iv.as_bytes())
            .map_err(|e| {
                CryptoError::with_kind(
                    ErrorKind::CipherConfiguration,
                    format!("cipher rejected key/IV material: {}", e),
                )
            })?;
        let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        Ok(hex::encode(ciphertext))
    }

    /// Decrypt hex-encoded ciphertext, returning the plaintext bytes.
    ///
    /// The plaintext comes back in a `Zeroizing` buffer; whether it is
    /// secret is the caller's call, so it is wiped by default.
    pub fn decrypt(
        &self,
        key: &CommonKey,
        iv: &InitializationVector,
        ciphertext_hex: &str,
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.check_material(key, iv)?;

        let ciphertext = hex::decode(ciphertext_hex).map_err(|e| {
            CryptoError::with_kind_and_source(
                ErrorKind::DecryptionIntegrity,
                format!("ciphertext is not valid hex: {}", e),
                e,
            )
        })?;

        let decryptor = Aes256CbcDec::new_from_slices(key.as_bytes(), iv.as_bytes())
            .map_err(|e| {
                CryptoError::with_kind(
                    ErrorKind::CipherConfiguration,
                    format!("cipher rejected key/IV material: {}", e),
                )
            })?;
        let plaintext = decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| {
                CryptoError::with_kind(
                    ErrorKind::DecryptionIntegrity,
                    "padding validation failed: ciphertext or key/IV material invalid",
                )
            })?;

        Ok(Zeroizing::new(plaintext))
    }
}
