//! Pipeline configuration
//!
//! All algorithm parameters live in one immutable struct handed to the
//! pipeline constructor, rather than module-level constants, so tests can
//! substitute cost factors and exercise length validation.

/// Fixed configuration of the encryption pipeline.
///
/// The published defaults are: AES-256 in CBC mode with PKCS#7 padding,
/// scrypt with N=2^15, r=8, p=1, a 32-byte derived key, and 16-byte
/// password/salt/IV material. Plaintext is UTF-8 and ciphertext is
/// hex-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoConfig {
    /// scrypt CPU/memory cost as log2(N). Must satisfy scrypt's own
    /// constraints (N a power of two greater than 1).
    pub scrypt_log_n: u8,
    /// scrypt block size parameter.
    pub scrypt_r: u32,
    /// scrypt parallelization parameter.
    pub scrypt_p: u32,
    /// Length of the derived symmetric key in bytes.
    pub key_len: usize,
    /// Cipher block size; also the IV length.
    pub block_len: usize,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            scrypt_log_n: 15, // N = 32768
            scrypt_r: 8,
            scrypt_p: 1,
            key_len: 32,
            block_len: 16,
        }
    }
}
