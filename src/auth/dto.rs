use serde::{Deserialize, Serialize};

use crate::validation::{normalize_email, require_non_empty, Validate};

/// Request body for both signup and signin.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

impl Validate for AuthRequest {
    fn validate(&mut self) -> Result<(), String> {
        normalize_email(&mut self.email)?;
        require_non_empty("password", &self.password)
    }
}

/// Response returned after signup or signin.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_normalises_email() {
        let mut req = AuthRequest { email: " Foo@Bar.com".into(), password: "secret".into() };
        req.validate().unwrap();
        assert_eq!(req.email, "foo@bar.com");
    }

    #[test]
    fn validate_rejects_empty_password() {
        let mut req = AuthRequest { email: "foo@bar.com".into(), password: "".into() };
        assert!(req.validate().is_err());
    }

    #[test]
    fn response_uses_access_token_key() {
        let json = serde_json::to_value(AuthResponse { access_token: "t".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "access_token": "t" }));
    }
}
