use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;
use tracing::error;

// Pinned so a dependency bump never silently changes the stored format.
fn argon2id() -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
}

fn failed(op: &'static str) -> impl Fn(password_hash::Error) -> anyhow::Error {
    move |e| {
        error!(error = %e, op, "argon2 failure");
        anyhow::anyhow!("argon2 {op}: {e}")
    }
}

/// Argon2id digest in PHC string format, with a fresh random salt per call.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = argon2id()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(failed("hash"))?;
    Ok(digest.to_string())
}

/// `Ok(false)` on mismatch. A digest that cannot be parsed, or any other
/// argon2 failure, is an error.
pub fn verify_password(plain: &str, digest: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(digest).map_err(failed("parse"))?;
    match argon2id().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(failed("verify")(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let digest = hash_password("secret").expect("hashing should succeed");
        assert!(verify_password("secret", &digest).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let digest = hash_password("correct-horse-battery-staple").unwrap();
        assert!(!verify_password("wrong", &digest).expect("mismatch is not an error"));
    }

    #[test]
    fn same_input_yields_distinct_digests() {
        let a = hash_password("secret").unwrap();
        let b = hash_password("secret").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("secret", &a).unwrap());
        assert!(verify_password("secret", &b).unwrap());
    }

    #[test]
    fn digest_is_argon2id_phc_without_plaintext() {
        let digest = hash_password("hunter2-plaintext").unwrap();
        assert!(digest.starts_with("$argon2id$v=19$"));
        assert!(!digest.contains("hunter2-plaintext"));
    }

    #[test]
    fn malformed_digest_is_an_error_not_a_mismatch() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(err.to_string().starts_with("argon2 parse:"));
    }
}
