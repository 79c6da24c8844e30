//! Credential validation against configured accounts.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

use super::AuthError;

// ===========================================
// PasswordDigest
// ===========================================

/// SHA-256 digest of a password.
///
/// Stores a 64-character lowercase hex string. Config files carry the digest,
/// never the password itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hex: String,
}

/// Errors when parsing a password digest from a hex string.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("invalid password digest: expected 64 hex characters, got {0} characters")]
    InvalidLength(usize),

    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidCharacter { position: usize, character: char },
}

impl PasswordDigest {
    /// Hashes a plaintext password.
    pub fn compute(password: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        Self {
            hex: format!("{:x}", hasher.finalize()),
        }
    }

    /// Parses a digest from its hex form, normalizing to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::InvalidLength` if the string is not 64 characters.
    /// Returns `DigestError::InvalidCharacter` if it contains non-hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let hex = hex.trim();
        if hex.len() != 64 {
            return Err(DigestError::InvalidLength(hex.len()));
        }
        if let Some((position, character)) =
            hex.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(DigestError::InvalidCharacter {
                position,
                character,
            });
        }
        Ok(Self {
            hex: hex.to_ascii_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

// ===========================================
// Accounts
// ===========================================

/// An `[[accounts]]` entry from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub username: String,
    pub password_sha256: String,
}

/// Checks a username/password pair.
pub trait CredentialValidator {
    /// # Errors
    ///
    /// - `EmptyCredentials` if either value is blank
    /// - `InvalidCredentials` if the pair does not match an account
    fn validate(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// Validates against accounts loaded from configuration.
///
/// Usernames compare ignoring case; passwords compare by digest.
#[derive(Debug, Default)]
pub struct ConfiguredAccounts {
    accounts: Vec<(String, PasswordDigest)>,
}

/// A configured account whose digest could not be parsed.
#[derive(Debug, Error)]
#[error("account '{username}' has an invalid password_sha256")]
pub struct InvalidAccount {
    pub username: String,
    #[source]
    pub source: DigestError,
}

impl ConfiguredAccounts {
    /// Builds the validator, rejecting malformed digests up front.
    pub fn new(accounts: &[Account]) -> Result<Self, InvalidAccount> {
        let accounts = accounts
            .iter()
            .map(|a| {
                PasswordDigest::from_hex(&a.password_sha256)
                    .map(|digest| (a.username.trim().to_lowercase(), digest))
                    .map_err(|source| InvalidAccount {
                        username: a.username.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { accounts })
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl CredentialValidator for ConfiguredAccounts {
    fn validate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }

        let key = username.trim().to_lowercase();
        let digest = PasswordDigest::compute(password);
        let matched = self
            .accounts
            .iter()
            .any(|(name, expected)| *name == key && *expected == digest);

        if matched {
            Ok(())
        } else {
            tracing::debug!(username = %key, "credential check failed");
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // sha256("secret")
    const SECRET_HEX: &str = "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";

    fn accounts() -> ConfiguredAccounts {
        ConfiguredAccounts::new(&[Account {
            username: "Alice".to_string(),
            password_sha256: SECRET_HEX.to_string(),
        }])
        .unwrap()
    }

    #[test]
    fn compute_produces_known_digest() {
        assert_eq!(PasswordDigest::compute("secret").as_str(), SECRET_HEX);
    }

    #[test]
    fn from_hex_normalizes_case() {
        let digest = PasswordDigest::from_hex(&SECRET_HEX.to_uppercase()).unwrap();
        assert_eq!(digest, PasswordDigest::compute("secret"));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            PasswordDigest::from_hex("abc"),
            Err(DigestError::InvalidLength(3))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        let bad = format!("z{}", &SECRET_HEX[1..]);
        assert!(matches!(
            PasswordDigest::from_hex(&bad),
            Err(DigestError::InvalidCharacter {
                position: 0,
                character: 'z'
            })
        ));
    }

    #[test]
    fn new_rejects_malformed_account() {
        let err = ConfiguredAccounts::new(&[Account {
            username: "bob".to_string(),
            password_sha256: "nope".to_string(),
        }])
        .unwrap_err();
        assert_eq!(err.username, "bob");
    }

    #[test]
    fn validate_accepts_matching_pair_ignoring_username_case() {
        assert!(accounts().validate("alice", "secret").is_ok());
        assert!(accounts().validate(" ALICE ", "secret").is_ok());
    }

    #[test]
    fn validate_rejects_blank_input() {
        assert!(matches!(
            accounts().validate("", "secret"),
            Err(AuthError::EmptyCredentials)
        ));
        assert!(matches!(
            accounts().validate("alice", ""),
            Err(AuthError::EmptyCredentials)
        ));
    }

    #[test]
    fn validate_rejects_wrong_password_or_user() {
        assert!(matches!(
            accounts().validate("alice", "Secret"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            accounts().validate("mallory", "secret"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn no_accounts_rejects_everyone() {
        let empty = ConfiguredAccounts::default();
        assert!(empty.is_empty());
        assert!(matches!(
            empty.validate("alice", "secret"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
