//! Creator earnings and withdrawal calculations

use crate::config::PricingConfig;
use crate::conversion::coins_to_currency;
use crate::currency::CurrencyCode;
use crate::error::{EconomicsError, Result};
use serde::{Deserialize, Serialize};

/// Creator's share of `coins` received as gifts, in the given currency
pub fn creator_earnings(config: &PricingConfig, coins: f64, currency: CurrencyCode) -> Result<f64> {
    let total_value = coins_to_currency(config, coins, currency)?;
    Ok(total_value * config.commission.creator_share())
}

/// Payout left after the withdrawal fee is taken from the creator's share.
///
/// `fee` is a fraction in [0, 1]. Values outside the standard tiers are
/// accepted.
pub fn withdrawal_net_amount(
    config: &PricingConfig,
    coins: f64,
    currency: CurrencyCode,
    fee: f64,
) -> Result<f64> {
    let fee = ensure_fee(fee)?;
    let earnings = creator_earnings(config, coins, currency)?;
    Ok(earnings * (1.0 - fee))
}

/// Whether `net_amount` reaches the payout threshold for the currency.
/// Currencies without a threshold of their own use the default (USD) one.
pub fn minimum_withdrawal_met(config: &PricingConfig, net_amount: f64, currency: CurrencyCode) -> bool {
    net_amount >= config.commission.minimum_withdrawal_for(currency)
}

/// Every figure shown by the withdrawal calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalBreakdown {
    pub coins: f64,
    pub currency: CurrencyCode,
    pub fee: f64,
    /// Value of the coins before any commission
    pub total_value: f64,
    /// Value after the platform commission
    pub creator_share: f64,
    pub fee_amount: f64,
    pub net_amount: f64,
    pub minimum: f64,
    pub meets_minimum: bool,
}

pub fn withdrawal_breakdown(
    config: &PricingConfig,
    coins: f64,
    currency: CurrencyCode,
    fee: f64,
) -> Result<WithdrawalBreakdown> {
    let fee = ensure_fee(fee)?;
    let total_value = coins_to_currency(config, coins, currency)?;
    let creator_share = creator_earnings(config, coins, currency)?;
    let net_amount = withdrawal_net_amount(config, coins, currency, fee)?;
    let minimum = config.commission.minimum_withdrawal_for(currency);

    Ok(WithdrawalBreakdown {
        coins,
        currency,
        fee,
        total_value,
        creator_share,
        fee_amount: creator_share * fee,
        net_amount,
        minimum,
        meets_minimum: minimum_withdrawal_met(config, net_amount, currency),
    })
}

fn ensure_fee(fee: f64) -> Result<f64> {
    if fee.is_finite() && (0.0..=1.0).contains(&fee) {
        Ok(fee)
    } else {
        Err(EconomicsError::InvalidAmount(format!(
            "withdrawal fee must be between 0 and 1, got {}",
            fee
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::WithdrawalFeeTier;

    #[test]
    fn test_creator_earnings() {
        let config = PricingConfig::default();
        assert_eq!(creator_earnings(&config, 1000.0, CurrencyCode::Usd).unwrap(), 7.5);
        assert_eq!(creator_earnings(&config, 0.0, CurrencyCode::Usd).unwrap(), 0.0);
        assert!(creator_earnings(&config, -10.0, CurrencyCode::Usd).is_err());
    }

    #[test]
    fn test_creator_earnings_never_exceed_value() {
        let mut config = PricingConfig::default();
        for share in [0.0, 0.25, 0.5, 0.9, 1.0] {
            config.commission.platform_share = share;
            for coins in [1.0, 99.0, 1000.0, 34_999.0] {
                let value = coins_to_currency(&config, coins, CurrencyCode::Inr).unwrap();
                let earnings = creator_earnings(&config, coins, CurrencyCode::Inr).unwrap();
                assert!(earnings <= value);
            }
        }
    }

    #[test]
    fn test_withdrawal_net_amount() {
        let config = PricingConfig::default();
        // 2000 coins = $30, creator keeps $15, 5% fee leaves $14.25
        let net = withdrawal_net_amount(&config, 2000.0, CurrencyCode::Usd, 0.05).unwrap();
        assert!((net - 14.25).abs() < 1e-9);

        let net = withdrawal_net_amount(&config, 2000.0, CurrencyCode::Usd, 0.0).unwrap();
        assert!((net - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_withdrawal_net_decreases_with_fee() {
        let config = PricingConfig::default();
        let mut previous = f64::INFINITY;
        for tier in WithdrawalFeeTier::ALL {
            let net =
                withdrawal_net_amount(&config, 5000.0, CurrencyCode::Eur, tier.rate()).unwrap();
            assert!(net < previous);
            previous = net;
        }
    }

    #[test]
    fn test_non_tier_fee_is_accepted() {
        let config = PricingConfig::default();
        assert!(withdrawal_net_amount(&config, 1000.0, CurrencyCode::Usd, 0.04).is_ok());
        assert!(matches!(
            withdrawal_net_amount(&config, 1000.0, CurrencyCode::Usd, 1.5),
            Err(EconomicsError::InvalidAmount(_))
        ));
        assert!(withdrawal_net_amount(&config, 1000.0, CurrencyCode::Usd, f64::NAN).is_err());
    }

    #[test]
    fn test_minimum_withdrawal() {
        let config = PricingConfig::default();
        assert!(minimum_withdrawal_met(&config, 20.0, CurrencyCode::Usd));
        assert!(!minimum_withdrawal_met(&config, 19.99, CurrencyCode::Usd));
        assert!(!minimum_withdrawal_met(&config, 1499.0, CurrencyCode::Inr));
        assert!(minimum_withdrawal_met(&config, 5000.0, CurrencyCode::Pkr));
        // No GBP threshold configured: falls back to 20
        assert!(minimum_withdrawal_met(&config, 20.0, CurrencyCode::Gbp));
        assert!(!minimum_withdrawal_met(&config, 19.0, CurrencyCode::Gbp));
    }

    #[test]
    fn test_withdrawal_breakdown() {
        let config = PricingConfig::default();
        let breakdown = withdrawal_breakdown(&config, 2000.0, CurrencyCode::Usd, 0.05).unwrap();

        assert!((breakdown.total_value - 30.0).abs() < 1e-9);
        assert!((breakdown.creator_share - 15.0).abs() < 1e-9);
        assert!((breakdown.fee_amount - 0.75).abs() < 1e-9);
        assert!((breakdown.net_amount - 14.25).abs() < 1e-9);
        assert_eq!(breakdown.minimum, 20.0);
        assert!(!breakdown.meets_minimum);

        let breakdown = withdrawal_breakdown(&config, 10_000.0, CurrencyCode::Usd, 0.05).unwrap();
        assert!(breakdown.meets_minimum);
    }
}
