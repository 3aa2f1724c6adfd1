//! Password hashing and verification using salted PBKDF2-HMAC-SHA256
//!
//! Credentials store the salt and digest as hex strings. Verification
//! re-derives the digest from the candidate password and the stored salt and
//! compares in constant time; plaintext passwords are never persisted.

use crate::core::error::{Result, SitedeskError};
use rand::RngCore;
use sha2::Sha256;

/// Salt length in bytes. Freshly random per credential, never reused.
pub const SALT_LEN: usize = 16;

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Digest length in bytes (SHA-256 native output).
pub const DIGEST_LEN: usize = 32;

/// Derive a password digest.
///
/// When `salt_hex` is `None` a fresh random salt is generated; otherwise the
/// given salt is decoded and must be exactly [`SALT_LEN`] bytes of hex.
/// Returns `(salt_hex, digest_hex)`. For a fixed `(password, salt)` pair the
/// digest is deterministic, which is what makes verification by
/// recomputation possible.
pub fn derive_password(password: &str, salt_hex: Option<&str>) -> Result<(String, String)> {
    let salt: Vec<u8> = match salt_hex {
        Some(s) => {
            let bytes = hex::decode(s)
                .map_err(|_| SitedeskError::ValidationError("salt is not valid hex".to_string()))?;
            if bytes.len() != SALT_LEN {
                return Err(SitedeskError::ValidationError(format!(
                    "salt must be {} bytes, got {}",
                    SALT_LEN,
                    bytes.len()
                )));
            }
            bytes
        }
        None => {
            let mut bytes = vec![0u8; SALT_LEN];
            rand::thread_rng().fill_bytes(&mut bytes);
            bytes
        }
    };

    let mut digest = [0u8; DIGEST_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut digest);

    Ok((hex::encode(salt), hex::encode(digest)))
}

/// Verify a candidate password against a stored salt and digest.
pub fn verify_password(password: &str, salt_hex: &str, stored_digest_hex: &str) -> Result<bool> {
    let (_, candidate) = derive_password(password, Some(salt_hex))?;
    Ok(constant_time_eq(
        candidate.as_bytes(),
        stored_digest_hex.as_bytes(),
    ))
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_salt_has_expected_shape() {
        let (salt, digest) = derive_password("secret1", None).unwrap();
        assert_eq!(salt.len(), SALT_LEN * 2);
        assert_eq!(digest.len(), DIGEST_LEN * 2);
        assert!(hex::decode(&salt).is_ok());
        assert!(hex::decode(&digest).is_ok());
    }

    #[test]
    fn test_distinct_salts_give_distinct_digests() {
        // Salting defeats precomputation: same password, two fresh salts.
        let (s1, d1) = derive_password("secret1", None).unwrap();
        let (s2, d2) = derive_password("secret1", None).unwrap();
        assert_ne!(s1, s2);
        assert_ne!(d1, d2);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let (salt, digest) = derive_password("secret1", None).unwrap();
        let (_, again) = derive_password("secret1", Some(&salt)).unwrap();
        let (_, once_more) = derive_password("secret1", Some(&salt)).unwrap();
        assert_eq!(digest, again);
        assert_eq!(again, once_more);
    }

    #[test]
    fn test_round_trip_reproduces_stored_pair() {
        let (salt, digest) = derive_password("secret1", None).unwrap();
        let (salt2, digest2) = derive_password("secret1", Some(&salt)).unwrap();
        assert_eq!(salt, salt2);
        assert_eq!(digest, digest2);
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let (salt, digest) = derive_password("secret1", None).unwrap();
        assert!(verify_password("secret1", &salt, &digest).unwrap());
        assert!(!verify_password("secret2", &salt, &digest).unwrap());
        assert!(!verify_password("", &salt, &digest).unwrap());
    }

    #[test]
    fn test_invalid_salt_rejected() {
        assert!(matches!(
            derive_password("secret1", Some("not hex!")),
            Err(SitedeskError::ValidationError(_))
        ));
        // Valid hex, wrong length.
        assert!(matches!(
            derive_password("secret1", Some("aabbcc")),
            Err(SitedeskError::ValidationError(_))
        ));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abcd", b"abcd"));
        assert!(!constant_time_eq(b"abcd", b"abce"));
        assert!(!constant_time_eq(b"ab", b"abcd"));
    }
}
