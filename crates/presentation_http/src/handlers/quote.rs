//! Quote handler

use axum::{Json, extract::State};
use domain::Quote;
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

const QUOTE_FAILED: &str = "Could not fetch quote data.";

/// One random quote
pub async fn get_quote(State(state): State<AppState>) -> Result<Json<Quote>, ApiError> {
    match state.quote_service.random_quote() {
        Ok(quote) => {
            info!(author = %quote.author, "Quote sent");
            Ok(Json(quote))
        },
        Err(e) => {
            warn!(error = %e, "Quote selection failed");
            Err(ApiError::internal(QUOTE_FAILED))
        },
    }
}
