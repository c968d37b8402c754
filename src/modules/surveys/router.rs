use axum::{Router, routing::get};

use crate::modules::surveys::controller::{
    create_survey, get_survey, list_surveys, update_survey,
};
use crate::state::AppState;

pub fn init_surveys_router() -> Router<AppState> {
    Router::new()
        .route("/surveys", get(list_surveys).post(create_survey))
        .route("/surveys/{id}", get(get_survey).patch(update_survey))
        // Legacy alias for the detail endpoint, kept for existing clients.
        .route("/surveyDetails/{id}", get(get_survey))
}
