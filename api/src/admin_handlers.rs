//! Admin endpoints guarded by the node's bearer token

use crate::{ApiError, ApiResult, ApiState};
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use serde::Serialize;
use tok_economics::PricingConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub status: String,
    pub pricing_file: String,
    pub currencies: usize,
    pub countries: usize,
    pub gifts: usize,
    pub packages: usize,
}

fn require_admin(state: &ApiState, headers: &HeaderMap) -> ApiResult<()> {
    let expected = state
        .admin_token
        .as_deref()
        .ok_or_else(|| ApiError::Unauthorized("Admin endpoints are disabled".to_string()))?;

    let provided = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match provided {
        Some(token) if token == expected => Ok(()),
        Some(_) => Err(ApiError::Unauthorized("Invalid admin token".to_string())),
        None => Err(ApiError::Unauthorized("Missing bearer token".to_string())),
    }
}

/// Re-read the pricing file and swap the new tables in
pub async fn reload_pricing(
    State(state): State<ApiState>,
    headers: HeaderMap,
) -> ApiResult<Json<ReloadResponse>> {
    if let Err(e) = require_admin(&state, &headers) {
        tracing::warn!("rejected pricing reload: {}", e);
        return Err(e);
    }

    let path = state
        .pricing_path
        .clone()
        .ok_or_else(|| ApiError::BadRequest("No pricing file configured".to_string()))?;

    let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::warn!("failed to read pricing file {}: {}", path.display(), e);
        ApiError::Internal(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let pricing = PricingConfig::from_toml_str(&contents).map_err(|e| {
        tracing::warn!("pricing file {} rejected: {}", path.display(), e);
        ApiError::from(e)
    })?;

    let response = ReloadResponse {
        status: "reloaded".to_string(),
        pricing_file: path.display().to_string(),
        currencies: pricing.rates.len(),
        countries: pricing.countries.len(),
        gifts: pricing.gifts.len(),
        packages: pricing.packages.len(),
    };

    state.replace_pricing(pricing).await;
    tracing::info!(
        "pricing reloaded from {} ({} currencies, {} countries, {} gifts, {} packages)",
        response.pricing_file,
        response.currencies,
        response.countries,
        response.gifts,
        response.packages
    );

    Ok(Json(response))
}
