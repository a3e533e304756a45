//! HTTP request handlers.

pub mod convert_handler;
pub mod form_handler;
pub mod health_handler;

pub use convert_handler::convert_routes;
pub use form_handler::form_routes;
pub use health_handler::health_routes;

use common::{AppError, AppResult};

use crate::state::AppState;

/// Reject amount text longer than the configured limit.
pub(crate) fn check_input_length(state: &AppState, input: &str) -> AppResult<()> {
    let max = state.config.max_input_length;
    if input.chars().count() > max {
        return Err(AppError::validation(format!(
            "Amount must be at most {} characters",
            max
        )));
    }
    Ok(())
}
