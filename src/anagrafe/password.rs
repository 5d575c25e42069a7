//! Password hashing and verification, Argon2id with PHC-format output

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use secrecy::{ExposeSecret, SecretString};

/// Hash a password with a random salt, returns a PHC-format string
/// # Errors
/// Return error if the hashing computation fails
pub fn hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow!("Error hashing password: {e}"))
}

/// Verify a password against a stored PHC-format hash, the salt and
/// parameters embedded in the hash drive the recomputation. Returns false on
/// mismatch and on a malformed stored hash.
#[must_use]
pub fn verify(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Hash on the blocking pool so the work factor does not stall the executor
/// # Errors
/// Return error if the hashing computation fails or the task is cancelled
pub async fn hash_async(password: SecretString) -> Result<String> {
    tokio::task::spawn_blocking(move || hash(password.expose_secret())).await?
}

/// Verify on the blocking pool
/// # Errors
/// Return error if the task is cancelled
pub async fn verify_async(password: SecretString, stored: String) -> Result<bool> {
    Ok(tokio::task::spawn_blocking(move || verify(password.expose_secret(), &stored)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "my_secure_password";

        let hash = hash(password).unwrap();

        assert!(verify(password, &hash));
        assert!(!verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let password = "my_secure_password";

        let hash1 = hash(password).unwrap();
        let hash2 = hash(password).unwrap();

        // Hashes differ because of the random salt
        assert_ne!(hash1, hash2);

        // But both verify
        assert!(verify(password, &hash1));
        assert!(verify(password, &hash2));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let password = "my_secure_password";

        let hash = hash(password).unwrap();

        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_malformed_hash() {
        assert!(!verify("password", "not_a_phc_string"));
        assert!(!verify("password", ""));
        assert!(!verify("password", "$argon2id$truncated"));
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let password = SecretString::from("my_secure_password");

        let hash = hash_async(password.clone()).await.unwrap();

        assert!(verify_async(password, hash.clone()).await.unwrap());
        assert!(!verify_async(SecretString::from("nope"), hash).await.unwrap());
    }
}
