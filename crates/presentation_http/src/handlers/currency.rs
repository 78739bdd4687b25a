//! Currency handlers

use application::ConversionRequest;
use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;
use domain::{ConversionResult, LegacyConversion};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

const LEGACY_FAILED: &str = "Could not fetch currency data.";
const CONVERT_FAILED: &str = "Could not fetch currency data. Please try again later.";

/// `?amount=`
#[derive(Debug, Default, Deserialize)]
pub struct AmountQuery {
    pub amount: Option<String>,
}

/// `?amount=&from=&to=`
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// INR into USD and EUR
pub async fn legacy_currency(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<AmountQuery>, ApiError>,
) -> Result<Json<LegacyConversion>, ApiError> {
    let result = state
        .currency_service
        .legacy(query.amount.as_deref())
        .await
        .map_err(|e| {
            warn!(error = %e, amount = ?query.amount, "Legacy conversion failed");
            if e.is_client_error() {
                ApiError::from(e)
            } else {
                ApiError::internal(LEGACY_FAILED)
            }
        })?;

    info!(inr = result.inr, usd = result.usd, eur = result.eur, "Currency data sent");
    Ok(Json(result))
}

/// Any supported pair
pub async fn convert_currency(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ConvertQuery>, ApiError>,
) -> Result<Json<ConversionResult>, ApiError> {
    let request = ConversionRequest {
        amount: query.amount.as_deref(),
        from: query.from.as_deref(),
        to: query.to.as_deref(),
    };

    let result = state
        .currency_service
        .convert(request)
        .await
        .map_err(|e| {
            warn!(error = %e, ?request, "Conversion failed");
            if e.is_client_error() {
                ApiError::from(e)
            } else {
                ApiError::internal_with_details(CONVERT_FAILED, e)
            }
        })?;

    info!(
        from = %result.from,
        to = %result.to,
        amount = result.from_amount,
        converted = result.to_amount,
        "Conversion sent"
    );
    Ok(Json(result))
}
