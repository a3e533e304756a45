//! OpenAPI documentation.

use axum::response::Json;
use utoipa::OpenApi;

use crate::handlers::convert_handler::ConvertRequest;
use common::error::ErrorBody;
use common::{Conversion, ErrorResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::convert_handler::convert),
    components(schemas(ConvertRequest, Conversion, ErrorResponse, ErrorBody)),
    tags((name = "Conversion", description = "Dollar amount to English words"))
)]
pub struct ApiDoc;

/// Serve the generated document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
