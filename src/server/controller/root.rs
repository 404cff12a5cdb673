use axum::{response::IntoResponse, Json};

use crate::model::api::ServiceInfoDto;

/// Tag for grouping service endpoints in OpenAPI documentation
pub static ROOT_TAG: &str = "root";

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Service metadata.
///
/// Returns the service name and version with links to the interactive API documentation
/// and the raw OpenAPI document.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfoDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(ServiceInfoDto {
        message: "University registry API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        docs: DOCS_PATH.to_string(),
        openapi: OPENAPI_PATH.to_string(),
    })
}
