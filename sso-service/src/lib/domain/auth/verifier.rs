use auth::PasswordError;
use auth::PasswordHasher;

/// Hashes and checks passwords off the async executor.
///
/// Both operations run on the blocking pool; Argon2 is CPU-bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialVerifier {
    hasher: PasswordHasher,
}

impl CredentialVerifier {
    pub fn new() -> Self {
        Self {
            hasher: PasswordHasher::new(),
        }
    }

    /// Produce a PHC hash for a new or changed password.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing failed or the blocking task was lost
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let hasher = self.hasher;
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
    }

    /// Compare a supplied password with a stored hash.
    ///
    /// # Returns
    /// `false` on mismatch; a mismatch is not an error
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is corrupt or the blocking task was lost
    pub async fn verify(&self, stored_hash: &str, password: &str) -> Result<bool, PasswordError> {
        let hasher = self.hasher;
        let stored_hash = stored_hash.to_owned();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| PasswordError::VerificationFailed(e.to_string()))?
    }
}
