//! Password hashing service.
//!
//! Thin wrapper over bcrypt with a per-credential random salt stored
//! alongside the digest. The salt is mixed into the hashed input; bcrypt
//! itself contributes its own embedded salt on top, and its verify
//! primitive performs the constant-time comparison.

use bcrypt::{hash, verify};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{DomainError, DomainResult};

/// Number of random bytes in a generated salt
const SALT_BYTES: usize = 16;

/// Salted one-way password hasher with a configurable work factor
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: 10 }
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Generate a fresh per-credential salt: 16 random bytes, hex encoded.
    ///
    /// Regenerated on every password set or reset; never derived from the
    /// digest.
    pub fn generate_salt() -> String {
        let mut bytes = [0u8; SALT_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Hash a plaintext password with the given salt
    pub fn hash(&self, plaintext: &str, salt: &str) -> DomainResult<String> {
        hash(Self::salted(plaintext, salt), self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// The comparison is delegated to the bcrypt primitive.
    pub fn verify(&self, plaintext: &str, salt: &str, digest: &str) -> DomainResult<bool> {
        verify(Self::salted(plaintext, salt), digest).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }

    /// Salt goes first: bcrypt truncates its input at 72 bytes, and with
    /// the 32-char hex salt in front the salt always contributes. The
    /// password contributes its first 40 bytes; request validation caps
    /// password length accordingly.
    fn salted(plaintext: &str, salt: &str) -> String {
        format!("{}{}", salt, plaintext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        // Minimum cost keeps the tests fast
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = hasher();
        let salt = PasswordHasher::generate_salt();

        let digest = hasher.hash("s3cret", &salt).unwrap();

        assert!(hasher.verify("s3cret", &salt, &digest).unwrap());
        assert!(!hasher.verify("wrong", &salt, &digest).unwrap());
    }

    #[test]
    fn test_wrong_salt_fails_verification() {
        let hasher = hasher();
        let salt = PasswordHasher::generate_salt();
        let other_salt = PasswordHasher::generate_salt();

        let digest = hasher.hash("s3cret", &salt).unwrap();

        assert!(!hasher.verify("s3cret", &other_salt, &digest).unwrap());
    }

    #[test]
    fn test_salt_contributes_even_for_long_passwords() {
        // bcrypt only reads the first 72 input bytes; the salt must sit
        // inside that window no matter how long the password is
        let hasher = hasher();
        let salt = PasswordHasher::generate_salt();
        let other_salt = PasswordHasher::generate_salt();
        let long_password = "x".repeat(100);

        let digest = hasher.hash(&long_password, &salt).unwrap();

        assert!(hasher.verify(&long_password, &salt, &digest).unwrap());
        assert!(!hasher.verify(&long_password, &other_salt, &digest).unwrap());
    }

    #[test]
    fn test_generated_salts_are_unique_hex() {
        let a = PasswordHasher::generate_salt();
        let b = PasswordHasher::generate_salt();

        assert_eq!(a.len(), SALT_BYTES * 2);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
