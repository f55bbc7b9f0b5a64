//! Read-only pricing catalog endpoints

use crate::catalog_handlers::{
    get_coin_rates, get_commission, get_country, list_countries, list_gifts,
    list_recharge_packages,
};
use crate::ApiState;
use axum::{routing::get, Router};

/// Register catalog routes
pub fn catalog_routes() -> Router<ApiState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/{code}", get(get_country))
        .route("/gifts", get(list_gifts))
        .route("/recharge-packages", get(list_recharge_packages))
        .route("/coin-rates", get(get_coin_rates))
        .route("/commission", get(get_commission))
}
