use bcrypt::{hash, verify};
use crate::error::AppError;

// Deliberately above bcrypt's default: password hashing happens only at
// registration and login, so the extra latency is acceptable.
const HASH_COST: u32 = 14;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST).map_err(|e| AppError::internal(format!("Hash error: {e}")))
}

/// Returns false on mismatch and on a malformed digest; never errors, so a
/// corrupted row can only fail the login it belongs to.
pub fn verify_password(password: &str, digest: &str) -> bool {
    verify(password, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrips() {
        let digest = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &digest));
    }

    #[test]
    fn rejects_wrong_password() {
        // Low cost keeps the test fast; verify reads the cost from the digest.
        let digest = hash(b"right", 4).unwrap();
        assert!(!verify_password("wrong", &digest));
    }

    #[test]
    fn rejects_malformed_digest() {
        assert!(!verify_password("anything", "not-a-bcrypt-digest"));
    }
}
