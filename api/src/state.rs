//! API State Management
use std::path::PathBuf;
use std::sync::Arc;
use tok_economics::PricingConfig;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ApiState {
    pricing: Arc<RwLock<Arc<PricingConfig>>>,
    pub pricing_path: Option<PathBuf>,
    pub admin_token: Option<String>,
    pub start_time: std::time::Instant,
}

impl ApiState {
    pub fn new(pricing: PricingConfig) -> Self {
        Self {
            pricing: Arc::new(RwLock::new(Arc::new(pricing))),
            pricing_path: None,
            admin_token: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Set the pricing file re-read by the reload endpoint
    pub fn with_pricing_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pricing_path = Some(path.into());
        self
    }

    /// Set the bearer token required by admin endpoints
    pub fn with_admin_token(mut self, token: Option<String>) -> Self {
        self.admin_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Snapshot of the active pricing tables.
    ///
    /// Callers keep the snapshot for the whole request, so a concurrent reload
    /// never mixes old and new tables.
    pub async fn pricing(&self) -> Arc<PricingConfig> {
        self.pricing.read().await.clone()
    }

    /// Swap in a new set of tables
    pub async fn replace_pricing(&self, pricing: PricingConfig) {
        *self.pricing.write().await = Arc::new(pricing);
    }
}
