use crate::admin_handlers::reload_pricing;
use crate::ApiState;
use axum::{routing::post, Router};

/// Register admin routes
pub fn admin_routes() -> Router<ApiState> {
    Router::new().route("/pricing/reload", post(reload_pricing))
}
