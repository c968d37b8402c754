use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use surveyhub_auth::{Claims, verify_token};
use surveyhub_core::AppError;

use crate::state::AppState;

/// Extractor that validates the bearer token and provides the decoded
/// claims to the handler.
///
/// Every rejection is a plain 401 `unauthorized access`; callers learn
/// nothing about whether the header was missing, the token malformed, the
/// signature bad, or the expiry passed.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The identity this request acts as.
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

/// Pulls the token out of an `Authorization` header value.
///
/// The token is the second space-delimited segment; the scheme segment is
/// not inspected, matching the wire contract clients already rely on. A
/// header without a second segment yields `None` and is rejected upstream.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("unauthorized access"))?;

        let token = bearer_token(auth_header)
            .ok_or_else(|| AppError::unauthorized("unauthorized access"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_takes_second_segment() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        // Scheme is never inspected.
        assert_eq!(bearer_token("Token abc"), Some("abc"));
    }

    #[test]
    fn bearer_token_missing_segment_is_none() {
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token(""), None);
    }
}
