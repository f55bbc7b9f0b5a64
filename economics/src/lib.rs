//! TokRecharge Economics Module
//!
//! Implements the TikTok virtual-currency pricing model:
//! - Coin <-> local currency conversion
//! - Coin <-> diamond conversion
//! - Creator earnings and withdrawal calculations
//! - Recharge package best-value ranking and gift efficiency ranking
//! - Currency display formatting
//!
//! Every calculation takes the active [`PricingConfig`] explicitly. The
//! configuration is immutable once built; a reload builds a new one.

pub mod catalog;
pub mod commission;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod earnings;
pub mod error;
pub mod format;
pub mod ranking;
pub mod rates;
mod seed;

pub use catalog::{
    value_gift, value_gift_basket, GiftCatalog, GiftDefinition, GiftRarity, GiftValuation,
    PackageCatalog, RaritySummary, RechargePackage,
};
pub use commission::{CommissionConfig, WithdrawalFeeTier};
pub use config::PricingConfig;
pub use conversion::{coins_to_currency, coins_to_diamonds, currency_to_coins, diamonds_to_coins};
pub use currency::CurrencyCode;
pub use earnings::{
    creator_earnings, minimum_withdrawal_met, withdrawal_breakdown, withdrawal_net_amount,
    WithdrawalBreakdown,
};
pub use error::{EconomicsError, Result};
pub use format::{format_amount, format_currency};
pub use ranking::{
    best_value_package, rank_gifts_by_efficiency, rank_packages, RankedGift, RankedPackage,
};
pub use rates::{CountryPricing, CountryTable, CurrencyRate, RateTable};

/// Economic constants
pub mod constants {
    /// Coins spent per diamond credited (2 coins = 1 diamond)
    pub const COINS_PER_DIAMOND: u64 = 2;

    /// Platform share of gift value (50%)
    pub const DEFAULT_PLATFORM_SHARE: f64 = 0.5;

    /// Minimum withdrawal used for currencies without their own threshold (USD 20)
    pub const DEFAULT_MINIMUM_WITHDRAWAL: f64 = 20.0;

    /// Withdrawal fee tiers
    pub const LOW_WITHDRAWAL_FEE: f64 = 0.02;
    pub const PREMIUM_WITHDRAWAL_FEE: f64 = 0.03;
    pub const STANDARD_WITHDRAWAL_FEE: f64 = 0.05;
    pub const HIGH_WITHDRAWAL_FEE: f64 = 0.07;
}
