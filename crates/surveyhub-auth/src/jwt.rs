//! JWT issuance and verification.
//!
//! Verification failure is deliberately collapsed into a single
//! unauthorized error: the middleware never tells a caller whether a token
//! was missing a signature, expired, or plain garbage.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};

use surveyhub_config::JwtConfig;
use surveyhub_core::AppError;

use crate::claims::Claims;

/// Signs an identity token for `email`, carrying `extra` claim fields
/// verbatim. Expiry is `access_token_expiry` seconds from now.
pub fn issue_token(
    email: &str,
    extra: Map<String, Value>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry;

    let claims = Claims {
        email: email.to_string(),
        exp: exp as usize,
        iat: now as usize,
        extra,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

/// Verifies signature and expiry, returning the decoded claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("unauthorized access"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    #[test]
    fn test_issue_token_success() {
        let config = get_test_jwt_config();
        let result = issue_token("test@example.com", Map::new(), &config);

        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token_round_trip() {
        let config = get_test_jwt_config();
        let token = issue_token("test@example.com", Map::new(), &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.email, "test@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_extra_claims_survive_round_trip() {
        let config = get_test_jwt_config();
        let mut extra = Map::new();
        extra.insert("name".to_string(), json!("Test User"));
        extra.insert("photo".to_string(), json!("photo.png"));

        let token = issue_token("test@example.com", extra, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.extra["name"], json!("Test User"));
        assert_eq!(claims.extra["photo"], json!("photo.png"));
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        assert!(verify_token("invalid-token", &config).is_err());
        assert!(verify_token("", &config).is_err());
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = issue_token("test@example.com", Map::new(), &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        // Past the default 60s validation leeway.
        let expired_config = JwtConfig {
            access_token_expiry: -120,
            ..get_test_jwt_config()
        };

        let token = issue_token("test@example.com", Map::new(), &expired_config).unwrap();
        let result = verify_token(&token, &get_test_jwt_config());

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().status.as_u16(), 401);
    }
}
