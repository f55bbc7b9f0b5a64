//! API routes organization
//!
//! - `catalog` - Countries, gifts, recharge packages, coin rates, commission
//! - `calculate` - Coin, diamond, earnings, withdrawal and best-value calculators
//! - `admin` - Token-guarded pricing reload
//!
//! Each submodule exports a router function.

mod admin;
mod calculate;
mod catalog;

use crate::ApiState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Create the main router with all API endpoints
pub fn create_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest(
            "/api",
            catalog::catalog_routes().nest("/calculate", calculate::calculate_routes()),
        )
        .nest("/admin", admin::admin_routes())
}

async fn root() -> &'static str {
    "TokRecharge Pricing API"
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    uptime_secs: u64,
}

async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
