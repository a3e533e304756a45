//! JSON conversion handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::{AppResult, Conversion};

use crate::extractors::ValidatedJson;
use crate::handlers::check_input_length;
use crate::state::AppState;

/// Conversion request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConvertRequest {
    /// Amount in dollars: ',' as decimal separator, spaces as optional thousands separator
    #[validate(length(min = 1, max = 64, message = "Amount must be between 1 and 64 characters"))]
    #[schema(example = "999 999 999,99")]
    pub amount: String,
}

/// Create conversion routes
pub fn convert_routes() -> Router<AppState> {
    Router::new().route("/convert", post(convert))
}

/// Convert an amount to English words
#[utoipa::path(
    post,
    path = "/api/convert",
    tag = "Conversion",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Amount converted", body = Conversion),
        (status = 400, description = "Amount rejected (format, overflow, range or granularity)", body = common::ErrorResponse)
    )
)]
pub async fn convert(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ConvertRequest>,
) -> AppResult<Json<Conversion>> {
    check_input_length(&state, &payload.amount)?;

    let conversion = common::convert(&payload.amount)?;
    tracing::debug!(cents = conversion.cents, "Converted amount");

    Ok(Json(conversion))
}
