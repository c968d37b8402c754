use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use surveyhub::router::init_router;
use surveyhub::state::AppState;
use surveyhub::surveyhub_auth::issue_token;
use surveyhub::surveyhub_config::{CorsConfig, JwtConfig};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_origins("*"),
    };
    init_router(state)
}

/// Signs a token for `email` with the test secret.
#[allow(dead_code)]
pub fn token_for(email: &str) -> String {
    issue_token(email, Default::default(), &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("user-{}@test.com", Uuid::new_v4())
}

/// Inserts a user document directly, bypassing the API.
#[allow(dead_code)]
pub async fn seed_user(pool: &PgPool, doc: Value) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO users (doc) VALUES ($1) RETURNING id")
        .bind(sqlx::types::Json(doc))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts a survey document directly, bypassing the API.
#[allow(dead_code)]
pub async fn seed_survey(pool: &PgPool, doc: Value) -> Uuid {
    sqlx::query_scalar::<_, Uuid>("INSERT INTO surveys (doc) VALUES ($1) RETURNING id")
        .bind(sqlx::types::Json(doc))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn authed_json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
