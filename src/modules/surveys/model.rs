use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Patch body for a survey.
///
/// Always overwrites exactly these three keys; a key missing from the
/// body is written back as null rather than left alone.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSurveyDto {
    #[serde(rename = "surveyName")]
    pub survey_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SurveyListQuery {
    /// Restrict the listing to surveys owned by this email.
    pub email: Option<String>,
}
