//! Personal token generation
//!
//! Generates cryptographically secure token secrets with hashing.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Result of generating a new token secret
#[derive(Debug, Clone)]
pub struct GeneratedToken {
    /// The full secret (only shown once at creation)
    pub secret: String,
    /// The digest stored in place of the secret
    pub digest: String,
}

/// Generator for secure token secrets
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    /// Prefix for all generated secrets
    prefix: String,
    /// Number of random bytes to generate
    secret_bytes: usize,
}

impl TokenGenerator {
    /// Create a new token generator
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            secret_bytes: 32,
        }
    }

    /// Set the number of random bytes
    pub fn with_secret_bytes(mut self, bytes: usize) -> Self {
        self.secret_bytes = bytes;
        self
    }

    /// Generate a new token secret
    pub fn generate(&self) -> GeneratedToken {
        let mut random_bytes = vec![0u8; self.secret_bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        let secret = format!("{}{}", self.prefix, URL_SAFE_NO_PAD.encode(&random_bytes));
        let digest = self.hash_secret(&secret);

        GeneratedToken { secret, digest }
    }

    /// Hash a secret for storage
    pub fn hash_secret(&self, secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        let result = hasher.finalize();
        format!("sha256${}", URL_SAFE_NO_PAD.encode(result))
    }

    /// Verify a secret against a stored digest
    pub fn verify_secret(&self, secret: &str, stored_digest: &str) -> bool {
        let computed = self.hash_secret(secret);
        constant_time_compare(&computed, stored_digest)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new("apim_")
    }
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut result = 0u8;

    for i in 0..a.len() {
        result |= a_bytes[i] ^ b_bytes[i];
    }

    result == 0
}
