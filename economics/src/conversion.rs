//! Coin <-> currency and coin <-> diamond conversions

use crate::config::PricingConfig;
use crate::constants::COINS_PER_DIAMOND;
use crate::currency::CurrencyCode;
use crate::error::{ensure_valid_amount, EconomicsError, Result};

/// Distance from a whole number, in ULPs of that number, still treated as it.
const WHOLE_COIN_ULPS: f64 = 4.0;

/// Value of `coins` in the given currency. Full precision, no rounding.
pub fn coins_to_currency(config: &PricingConfig, coins: f64, currency: CurrencyCode) -> Result<f64> {
    let coins = ensure_valid_amount(coins, "coins")?;
    let rate = config.rates.units_per_coin(currency)?;
    Ok(coins * rate)
}

/// Whole coins bought by `amount` of the given currency.
///
/// Coins are indivisible so the quotient is floored. A quotient within
/// floating-point noise of a whole number counts as that number, which keeps
/// `currency_to_coins(coins_to_currency(c))` equal to `c`.
pub fn currency_to_coins(config: &PricingConfig, amount: f64, currency: CurrencyCode) -> Result<u64> {
    let amount = ensure_valid_amount(amount, "amount")?;
    let rate = config.rates.units_per_coin(currency)?;

    let raw = amount / rate;
    if !raw.is_finite() || raw > u64::MAX as f64 {
        return Err(EconomicsError::InvalidAmount(format!(
            "{} {} is too large to convert",
            amount, currency
        )));
    }

    let nearest = raw.round();
    let coins = if (raw - nearest).abs() <= nearest.max(1.0) * WHOLE_COIN_ULPS * f64::EPSILON {
        nearest
    } else {
        raw.floor()
    };

    Ok(coins as u64)
}

/// Diamonds credited for `coins` (2 coins = 1 diamond, remainder dropped)
pub fn coins_to_diamonds(coins: u64) -> u64 {
    coins / COINS_PER_DIAMOND
}

/// Coins needed to produce `diamonds`
pub fn diamonds_to_coins(diamonds: u64) -> Result<u64> {
    diamonds.checked_mul(COINS_PER_DIAMOND).ok_or_else(|| {
        EconomicsError::InvalidAmount(format!("{} diamonds is too large to convert", diamonds))
    })
}
