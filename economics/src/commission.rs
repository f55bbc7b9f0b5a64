//! Platform commission and withdrawal fee configuration

use crate::constants::{
    DEFAULT_MINIMUM_WITHDRAWAL, DEFAULT_PLATFORM_SHARE, HIGH_WITHDRAWAL_FEE, LOW_WITHDRAWAL_FEE,
    PREMIUM_WITHDRAWAL_FEE, STANDARD_WITHDRAWAL_FEE,
};
use crate::currency::CurrencyCode;
use crate::error::{EconomicsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Withdrawal fee levels offered to creators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WithdrawalFeeTier {
    Low,
    Premium,
    #[default]
    Standard,
    High,
}

impl WithdrawalFeeTier {
    pub const ALL: [WithdrawalFeeTier; 4] = [
        WithdrawalFeeTier::Low,
        WithdrawalFeeTier::Premium,
        WithdrawalFeeTier::Standard,
        WithdrawalFeeTier::High,
    ];

    /// Built-in fee fraction for this tier
    pub fn rate(&self) -> f64 {
        match self {
            WithdrawalFeeTier::Low => LOW_WITHDRAWAL_FEE,
            WithdrawalFeeTier::Premium => PREMIUM_WITHDRAWAL_FEE,
            WithdrawalFeeTier::Standard => STANDARD_WITHDRAWAL_FEE,
            WithdrawalFeeTier::High => HIGH_WITHDRAWAL_FEE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalFeeTier::Low => "low",
            WithdrawalFeeTier::Premium => "premium",
            WithdrawalFeeTier::Standard => "standard",
            WithdrawalFeeTier::High => "high",
        }
    }
}

impl FromStr for WithdrawalFeeTier {
    type Err = EconomicsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                EconomicsError::InvalidConfig(format!("unknown withdrawal fee tier: {}", wanted))
            })
    }
}

impl TryFrom<String> for WithdrawalFeeTier {
    type Error = EconomicsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WithdrawalFeeTier> for String {
    fn from(tier: WithdrawalFeeTier) -> Self {
        tier.as_str().to_string()
    }
}

/// Commission settings shared by every earnings calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionConfig {
    /// Fraction of gift value kept by the platform, in [0, 1]
    pub platform_share: f64,
    pub withdrawal_fees: BTreeMap<WithdrawalFeeTier, f64>,
    pub minimum_withdrawal: BTreeMap<CurrencyCode, f64>,
    /// Applied to currencies missing from `minimum_withdrawal`
    pub default_minimum_withdrawal: f64,
}

impl Default for CommissionConfig {
    fn default() -> Self {
        let withdrawal_fees = WithdrawalFeeTier::ALL
            .into_iter()
            .map(|tier| (tier, tier.rate()))
            .collect();

        let minimum_withdrawal = BTreeMap::from([
            (CurrencyCode::Usd, DEFAULT_MINIMUM_WITHDRAWAL),
            (CurrencyCode::Inr, 1500.0),
            (CurrencyCode::Pkr, 5000.0),
        ]);

        Self {
            platform_share: DEFAULT_PLATFORM_SHARE,
            withdrawal_fees,
            minimum_withdrawal,
            default_minimum_withdrawal: DEFAULT_MINIMUM_WITHDRAWAL,
        }
    }
}

impl CommissionConfig {
    pub fn validate(&self) -> Result<()> {
        if !is_fraction(self.platform_share) {
            return Err(EconomicsError::InvalidConfig(format!(
                "platform share must be between 0 and 1, got {}",
                self.platform_share
            )));
        }

        for (tier, fee) in &self.withdrawal_fees {
            if !is_fraction(*fee) {
                return Err(EconomicsError::InvalidConfig(format!(
                    "withdrawal fee for {} tier must be between 0 and 1, got {}",
                    tier.as_str(),
                    fee
                )));
            }
        }

        let minimums = self
            .minimum_withdrawal
            .iter()
            .map(|(code, min)| (code.as_str(), *min))
            .chain(std::iter::once(("default", self.default_minimum_withdrawal)));
        for (label, min) in minimums {
            if !min.is_finite() || min < 0.0 {
                return Err(EconomicsError::InvalidConfig(format!(
                    "minimum withdrawal for {} must be a non-negative number, got {}",
                    label, min
                )));
            }
        }

        Ok(())
    }

    /// Share of gift value that reaches the creator
    pub fn creator_share(&self) -> f64 {
        1.0 - self.platform_share
    }

    /// Configured fee for a tier, falling back to the tier's built-in rate
    pub fn fee_for_tier(&self, tier: WithdrawalFeeTier) -> f64 {
        self.withdrawal_fees
            .get(&tier)
            .copied()
            .unwrap_or_else(|| tier.rate())
    }

    /// Tier whose configured fee equals `fee`, if any
    pub fn tier_for_fee(&self, fee: f64) -> Option<WithdrawalFeeTier> {
        WithdrawalFeeTier::ALL
            .into_iter()
            .find(|tier| (self.fee_for_tier(*tier) - fee).abs() < 1e-9)
    }

    /// Minimum payout for a currency, or the default threshold when unlisted
    pub fn minimum_withdrawal_for(&self, currency: CurrencyCode) -> f64 {
        self.minimum_withdrawal
            .get(&currency)
            .copied()
            .unwrap_or(self.default_minimum_withdrawal)
    }
}

fn is_fraction(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
