use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hashes `password` into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
}

/// Checks `password` against a stored PHC hash.
///
/// An unparseable stored hash is logged and treated as a mismatch.
pub fn password_matches(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(error = %err, "stored password hash is malformed");
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_matches_only_the_original() {
        let hash = hash_password("S3cr3t!").expect("hash should succeed");
        assert!(hash.starts_with("$argon2"));
        assert!(password_matches("S3cr3t!", &hash));
        assert!(!password_matches("wrong", &hash));
    }

    #[test]
    fn malformed_hash_never_matches() {
        assert!(!password_matches("pw", "not-a-phc-string"));
    }
}
