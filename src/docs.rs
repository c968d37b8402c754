use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use surveyhub_db::{InsertResult, UpdateResult};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{TokenRequest, TokenResponse};
use crate::modules::surveys::model::UpdateSurveyDto;
use crate::modules::users::model::{AdminStatus, SurveyorStatus, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::create_token,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::promote_admin,
        crate::modules::users::controller::check_surveyor,
        crate::modules::users::controller::promote_surveyor,
        crate::modules::surveys::controller::create_survey,
        crate::modules::surveys::controller::list_surveys,
        crate::modules::surveys::controller::get_survey,
        crate::modules::surveys::controller::update_survey,
    ),
    components(
        schemas(
            TokenRequest,
            TokenResponse,
            UserRole,
            AdminStatus,
            SurveyorStatus,
            UpdateSurveyDto,
            InsertResult,
            UpdateResult,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "User registration and role management"),
        (name = "Surveys", description = "Survey submission and editing")
    ),
    info(
        title = "Surveyhub API",
        version = "0.1.0",
        description = "A survey platform REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
