use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT claims for identity tokens.
///
/// The only field the application ever reads back is `email`; everything
/// else the caller put into the token request is carried verbatim in
/// `extra` and round-trips through signing untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The identity this token asserts.
    pub email: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Any additional claim fields, passed through unvalidated.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_flatten_on_serialize() {
        let mut extra = Map::new();
        extra.insert("name".to_string(), json!("Ada"));

        let claims = Claims {
            email: "ada@x.com".to_string(),
            exp: 9999999999,
            iat: 1234567890,
            extra,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["email"], json!("ada@x.com"));
        assert_eq!(value["name"], json!("Ada"));
    }

    #[test]
    fn extra_fields_collect_on_deserialize() {
        let json = r#"{"email":"u@x.com","exp":9999999999,"iat":1,"photo":"p.png","role":"surveyor"}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email, "u@x.com");
        assert_eq!(claims.extra["photo"], json!("p.png"));
        assert_eq!(claims.extra["role"], json!("surveyor"));
    }
}
