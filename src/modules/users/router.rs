use axum::{
    Router,
    routing::get,
};

use crate::modules::users::controller::{
    check_admin, check_surveyor, create_user, get_users, promote_admin, promote_surveyor,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users).post(create_user))
        .route("/users/admin/{key}", get(check_admin).patch(promote_admin))
        .route(
            "/users/surveyor/{key}",
            get(check_surveyor).patch(promote_surveyor),
        )
}
