//! Typed value objects for secret byte material
//!
//! Password, salt, IV, and derived key are distinct types with fixed-length
//! invariants enforced at construction. All of them hold their bytes in
//! `Zeroizing` buffers and are immutable once built; malformed lengths are
//! rejected here so they can never reach the cipher layer.

use zeroize::Zeroizing;

use crate::error::{CryptoError, ErrorKind, Result};
use crate::random::SecureRandomSource;

/// Length in bytes of generated password, salt, and IV material.
pub const MATERIAL_LEN: usize = 16;

/// Length in bytes of the derived symmetric key (AES-256).
pub const KEY_LEN: usize = 32;

fn checked(name: &str, expected: usize, bytes: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if bytes.len() != expected {
        return Err(CryptoError::with_kind(
            ErrorKind::CipherConfiguration,
            format!(
                "{} must be exactly {} bytes, got {}",
                name,
                expected,
                bytes.len()
            ),
        ));
    }
    Ok(Zeroizing::new(bytes.to_vec()))
}

/// Secret password material consumed only by key derivation.
///
/// Illustrative design: real passwords are variable-length UTF-8, but here
/// the password is 16 random bytes like the rest of the material.
#[derive(Debug)]
pub struct Password(Zeroizing<Vec<u8>>);

impl Password {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked("password", MATERIAL_LEN, bytes)?))
    }

    pub fn generate(source: &mut dyn SecureRandomSource) -> Result<Self> {
        Ok(Self(source.generate(MATERIAL_LEN)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Random salt mixed into key derivation.
///
/// Must be generated fresh per encryption operation; reusing a salt with the
/// same password removes the uniqueness guarantee of the derived key.
pub struct Salt(Zeroizing<Vec<u8>>);

impl Salt {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked("salt", MATERIAL_LEN, bytes)?))
    }

    pub fn generate(source: &mut dyn SecureRandomSource) -> Result<Self> {
        Ok(Self(source.generate(MATERIAL_LEN)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// CBC initialization vector, one cipher block long.
///
/// Must never be reused with the same key for different plaintexts; CBC
/// leaks plaintext structure under IV reuse.
pub struct InitializationVector(Zeroizing<Vec<u8>>);

impl InitializationVector {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked("IV", MATERIAL_LEN, bytes)?))
    }

    pub fn generate(source: &mut dyn SecureRandomSource) -> Result<Self> {
        Ok(Self(source.generate(MATERIAL_LEN)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Derived 256-bit symmetric key.
///
/// Never generated directly from randomness; always a deterministic function
/// of (password, salt) and the derivation parameters. The most sensitive
/// artifact in the pipeline - its exposure defeats the scheme.
#[derive(Debug)]
pub struct CommonKey(Zeroizing<Vec<u8>>);

impl CommonKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(checked("key", KEY_LEN, bytes)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandomSource;

    #[test]
    fn test_from_bytes_accepts_exact_lengths() {
        assert_eq!(Password::from_bytes(&[7u8; 16]).unwrap().as_bytes(), &[7u8; 16]);
        assert_eq!(Salt::from_bytes(&[8u8; 16]).unwrap().as_bytes(), &[8u8; 16]);
        assert_eq!(
            InitializationVector::from_bytes(&[9u8; 16]).unwrap().as_bytes(),
            &[9u8; 16]
        );
        assert_eq!(CommonKey::from_bytes(&[1u8; 32]).unwrap().as_bytes(), &[1u8; 32]);
    }

    #[test]
    fn test_from_bytes_rejects_wrong_lengths() {
        for len in [0usize, 15, 17, 32] {
            let err = Password::from_bytes(&vec![0u8; len]).expect_err("bad password length");
            assert_eq!(err.kind, ErrorKind::CipherConfiguration);
        }
        let err = CommonKey::from_bytes(&[0u8; 16]).expect_err("bad key length");
        assert_eq!(err.kind, ErrorKind::CipherConfiguration);
        assert!(err.message().contains("32 bytes"));
    }

    #[test]
    fn test_generate_pulls_exact_material_length() {
        let mut source = FixedRandomSource::new(vec![0x42]);
        assert_eq!(Password::generate(&mut source).unwrap().as_bytes().len(), 16);
        assert_eq!(Salt::generate(&mut source).unwrap().as_bytes().len(), 16);
        assert_eq!(
            InitializationVector::generate(&mut source).unwrap().as_bytes().len(),
            16
        );
    }
}
