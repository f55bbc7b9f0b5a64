//! Calculator endpoints

use crate::calculator_handlers::{
    best_value_handler, coins_to_currency_handler, coins_to_diamonds_handler,
    currency_to_coins_handler, diamonds_to_coins_handler, earnings_handler, gift_ranking_handler,
    gift_value_handler, withdrawal_handler,
};
use crate::ApiState;
use axum::{routing::get, Router};

/// Register calculator routes
pub fn calculate_routes() -> Router<ApiState> {
    Router::new()
        .route("/coins-to-currency", get(coins_to_currency_handler))
        .route("/currency-to-coins", get(currency_to_coins_handler))
        .route("/coins-to-diamonds", get(coins_to_diamonds_handler))
        .route("/diamonds-to-coins", get(diamonds_to_coins_handler))
        .route("/earnings", get(earnings_handler))
        .route("/withdrawal", get(withdrawal_handler))
        .route("/best-value", get(best_value_handler))
        .route("/gift-value", get(gift_value_handler))
        .route("/gift-ranking", get(gift_ranking_handler))
}
