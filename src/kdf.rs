//! Key derivation using scrypt
//!
//! scrypt is intentionally slow and memory-hard, which is the point: a
//! brute-force guess of the password pays the full cost per attempt. For
//! fixed (password, salt, parameters) the output is always identical, which
//! is what lets the decrypt side reconstruct the same key.

use scrypt::{Params, scrypt};
use zeroize::Zeroizing;

use crate::config::CryptoConfig;
use crate::error::{CryptoError, ErrorKind, Result};
use crate::material::{CommonKey, Password, Salt};

/// Derive the symmetric key from a password and salt.
///
/// Cost parameters and output length come from `config`. This call
/// dominates the pipeline's runtime by construction; latency-sensitive
/// callers should run it off their serving thread.
pub fn derive_key(password: &Password, salt: &Salt, config: &CryptoConfig) -> Result<CommonKey> {
    let params = Params::new(
        config.scrypt_log_n,
        config.scrypt_r,
        config.scrypt_p,
        config.key_len,
    )
    .map_err(|e| {
        CryptoError::with_kind(
            ErrorKind::KeyDerivation,
            format!("invalid scrypt parameters: {}", e),
        )
    })?;

    let mut key = Zeroizing::new(vec![0u8; config.key_len]);
    scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut key).map_err(|e| {
        CryptoError::with_kind(
            ErrorKind::KeyDerivation,
            format!("scrypt key derivation failed: {}", e),
        )
    })?;

    CommonKey::from_bytes(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> CryptoConfig {
        // Low cost so tests stay quick; determinism and lengths do not
        // depend on the cost factors.
        CryptoConfig {
            scrypt_log_n: 10,
            ..CryptoConfig::default()
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let password = Password::from_bytes(b"0123456789abcdef").unwrap();
        let salt = Salt::from_bytes(b"fedcba9876543210").unwrap();
        let config = fast_config();

        let k1 = derive_key(&password, &salt, &config).unwrap();
        let k2 = derive_key(&password, &salt, &config).unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_derived_key_is_32_bytes() {
        let password = Password::from_bytes(&[1u8; 16]).unwrap();
        let salt = Salt::from_bytes(&[2u8; 16]).unwrap();
        let key = derive_key(&password, &salt, &fast_config()).unwrap();
        assert_eq!(key.as_bytes().len(), 32);
    }

    #[test]
    fn test_different_salt_different_key() {
        let password = Password::from_bytes(&[1u8; 16]).unwrap();
        let salt_a = Salt::from_bytes(&[2u8; 16]).unwrap();
        let salt_b = Salt::from_bytes(&[3u8; 16]).unwrap();
        let config = fast_config();

        let ka = derive_key(&password, &salt_a, &config).unwrap();
        let kb = derive_key(&password, &salt_b, &config).unwrap();
        assert_ne!(ka.as_bytes(), kb.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = Salt::from_bytes(&[2u8; 16]).unwrap();
        let pw_a = Password::from_bytes(&[1u8; 16]).unwrap();
        let pw_b = Password::from_bytes(&[4u8; 16]).unwrap();
        let config = fast_config();

        let ka = derive_key(&pw_a, &salt, &config).unwrap();
        let kb = derive_key(&pw_b, &salt, &config).unwrap();
        assert_ne!(ka.as_bytes(), kb.as_bytes());
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let password = Password::from_bytes(&[1u8; 16]).unwrap();
        let salt = Salt::from_bytes(&[2u8; 16]).unwrap();
        let config = CryptoConfig {
            scrypt_r: 0,
            ..fast_config()
        };

        let err = derive_key(&password, &salt, &config).expect_err("r=0 must be rejected");
        assert_eq!(err.kind, ErrorKind::KeyDerivation);
        assert!(err.message().contains("invalid scrypt parameters"));
    }
}
