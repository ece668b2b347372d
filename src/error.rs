use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// The environment or the calling code is at fault: entropy failure,
    /// invalid derivation parameters, or key/IV material of the wrong
    /// length. These are fatal and not recoverable by retrying.
    Internal,

    /// The data supplied by the user is at fault: ciphertext that does not
    /// decode, or ciphertext whose padding fails validation under the
    /// supplied key and IV.
    User,
}

/// Condition tags matching the failure points of the pipeline. Every error
/// carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The OS entropy source failed or was asked for a nonsensical amount
    /// of material.
    RandomGeneration,
    /// scrypt rejected its cost parameters or requested output length.
    KeyDerivation,
    /// Key or IV material does not match the configured cipher lengths.
    CipherConfiguration,
    /// Ciphertext could not be decoded, or padding validation failed during
    /// decrypt finalization. With an unauthenticated cipher this is the only
    /// integrity signal: treat the ciphertext as untrustworthy, never as
    /// partially recoverable.
    DecryptionIntegrity,
}

impl ErrorKind {
    /// Broad category implied by the kind.
    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorKind::RandomGeneration
            | ErrorKind::KeyDerivation
            | ErrorKind::CipherConfiguration => ErrorCategory::Internal,
            ErrorKind::DecryptionIntegrity => ErrorCategory::User,
        }
    }
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct CryptoError {
    /// Specific condition tag, always provided. Consumers branch on this to
    /// tell a configuration bug (fix code) from an integrity failure
    /// (fix data or rotate keys).
    pub kind: ErrorKind,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl CryptoError {
    /// Creates a new error tagged with a kind and display message.
    pub fn with_kind(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that also retains the originating source error.
    pub fn with_kind_and_source(
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// Broad category of the failure, derived from its kind.
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CryptoError>;
