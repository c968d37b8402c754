use sqlx::PgPool;

use surveyhub_config::{CorsConfig, JwtConfig};
use surveyhub_db::{init_db_pool, run_migrations};

/// Shared application state, built once at startup and cloned into every
/// handler and extractor. The store handle lives here rather than in any
/// process-wide global.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    run_migrations(&db)
        .await
        .expect("Failed to run database migrations");

    AppState {
        db,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
