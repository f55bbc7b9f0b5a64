//! Economics error types

use thiserror::Error;

/// Pricing engine errors
///
/// All of these are deterministic: the same inputs and configuration always
/// produce the same error, so none of them is worth retrying.
#[derive(Error, Debug)]
pub enum EconomicsError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Invalid package: {0}")]
    InvalidPackage(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EconomicsError>;

/// Reject negative, NaN and infinite quantities.
pub(crate) fn ensure_valid_amount(value: f64, what: &str) -> Result<f64> {
    if !value.is_finite() {
        return Err(EconomicsError::InvalidAmount(format!(
            "{} must be a finite number, got {}",
            what, value
        )));
    }
    if value < 0.0 {
        return Err(EconomicsError::InvalidAmount(format!(
            "{} must not be negative, got {}",
            what, value
        )));
    }
    Ok(value)
}
