//! Pricing configuration
//!
//! A [`PricingConfig`] bundles every table the calculations read. It is built
//! once (from the built-in tables or a TOML file), validated as a whole, and
//! never modified afterwards. Reloading means building a new one and swapping
//! it in.
//!
//! Pricing file format (every section optional; missing sections keep the
//! built-in tables, and missing `rates` are derived from `countries`):
//!
//! ```toml
//! [[rates]]
//! currency = "USD"
//! units_per_coin = 0.015
//!
//! [[countries]]
//! id = 1
//! name = "United States"
//! code = "US"
//! currency = "USD"
//! coin_rate = 0.015
//! flag = "🇺🇸"
//! region = "North America"
//!
//! [commission]
//! platform_share = 0.5
//! default_minimum_withdrawal = 20.0
//! [commission.minimum_withdrawal]
//! USD = 20.0
//! INR = 1500.0
//! [commission.withdrawal_fees]
//! standard = 0.05
//!
//! [[gifts]]
//! id = 1
//! name = "Rose"
//! coin_cost = 1
//! diamond_value = 1
//! rarity = "Common"
//! category = "Basic"
//!
//! [[packages]]
//! id = 1
//! country_id = 1
//! coins = 70
//! price = 1.09
//! currency = "USD"
//! ```

use crate::catalog::{GiftCatalog, GiftDefinition, PackageCatalog, RechargePackage};
use crate::commission::CommissionConfig;
use crate::error::{EconomicsError, Result};
use crate::rates::{CountryPricing, CountryTable, CurrencyRate, RateTable};
use crate::seed;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Every table the pricing calculations read
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    pub rates: RateTable,
    pub countries: CountryTable,
    pub commission: CommissionConfig,
    pub gifts: GiftCatalog,
    pub packages: PackageCatalog,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PricingFile {
    rates: Option<Vec<CurrencyRate>>,
    countries: Option<Vec<CountryPricing>>,
    commission: Option<CommissionConfig>,
    gifts: Option<Vec<GiftDefinition>>,
    packages: Option<Vec<RechargePackage>>,
}

impl PricingConfig {
    /// Validate a full set of tables.
    ///
    /// Besides each table's own checks, every country's coin rate must match
    /// the rate table and every package must belong to a known country.
    pub fn new(
        rates: RateTable,
        countries: CountryTable,
        commission: CommissionConfig,
        gifts: GiftCatalog,
        packages: PackageCatalog,
    ) -> Result<Self> {
        commission.validate()?;

        for country in countries.iter() {
            let rate = rates.get(country.currency).ok_or_else(|| {
                EconomicsError::InvalidConfig(format!(
                    "country {} uses {} which has no coin rate",
                    country.code, country.currency
                ))
            })?;
            if rate.units_per_coin != country.coin_rate {
                return Err(EconomicsError::InvalidConfig(format!(
                    "country {} coin rate {} does not match {} rate {}",
                    country.code, country.coin_rate, country.currency, rate.units_per_coin
                )));
            }
        }

        for package in packages.iter() {
            if countries.by_id(package.country_id).is_err() {
                return Err(EconomicsError::InvalidConfig(format!(
                    "package {} refers to unknown country id {}",
                    package.id, package.country_id
                )));
            }
        }

        Ok(Self {
            rates,
            countries,
            commission,
            gifts,
            packages,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: PricingFile = toml::from_str(contents)?;

        let countries = file.countries.unwrap_or_else(seed::countries);
        let rates = match file.rates {
            Some(rates) => rates,
            None => rates_from_countries(&countries),
        };

        let config = Self::new(
            RateTable::new(rates)?,
            CountryTable::new(countries)?,
            file.commission.unwrap_or_default(),
            GiftCatalog::new(file.gifts.unwrap_or_else(seed::gifts))?,
            PackageCatalog::new(file.packages.unwrap_or_else(seed::packages))?,
        )?;

        tracing::debug!(
            rates = config.rates.len(),
            countries = config.countries.len(),
            gifts = config.gifts.len(),
            packages = config.packages.len(),
            "pricing tables loaded"
        );

        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }
}

impl Default for PricingConfig {
    /// The tables the site launched with
    fn default() -> Self {
        Self::from_toml_str("").expect("built-in pricing tables are valid")
    }
}

/// One rate per currency, taken from the first country using it. Countries
/// that disagree are rejected later by [`PricingConfig::new`].
fn rates_from_countries(countries: &[CountryPricing]) -> Vec<CurrencyRate> {
    let mut seen = HashSet::new();
    countries
        .iter()
        .filter(|c| seen.insert(c.currency))
        .map(|c| CurrencyRate::new(c.currency, c.coin_rate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;

    #[test]
    fn test_builtin_tables() {
        let config = PricingConfig::default();
        assert_eq!(config.countries.len(), 40);
        assert_eq!(config.gifts.len(), 27);
        assert_eq!(config.packages.len(), 9);
        assert_eq!(config.commission, CommissionConfig::default());

        // Every supported currency is priced
        for code in CurrencyCode::ALL {
            assert!(config.rates.contains(*code), "no rate for {}", code);
        }
        assert_eq!(config.rates.units_per_coin(CurrencyCode::Usd).unwrap(), 0.015);
        assert_eq!(config.rates.units_per_coin(CurrencyCode::Eur).unwrap(), 0.014);
    }

    #[test]
    fn test_builtin_gifts_store_one_diamond_per_coin() {
        let config = PricingConfig::default();
        assert!(config.gifts.iter().all(|g| g.diamond_value == g.coin_cost));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = PricingConfig::from_toml_str(
            r#"
            [commission]
            platform_share = 0.4
            "#,
        )
        .unwrap();

        assert_eq!(config.commission.platform_share, 0.4);
        // Unspecified commission fields keep their defaults
        assert_eq!(config.commission.default_minimum_withdrawal, 20.0);
        assert_eq!(config.countries.len(), 40);
    }

    #[test]
    fn test_rates_derived_from_countries() {
        let config = PricingConfig::from_toml_str(
            r#"
            packages = []

            [[countries]]
            id = 1
            name = "United States"
            code = "US"
            currency = "USD"
            coin_rate = 0.016
            flag = "🇺🇸"
            "#,
        )
        .unwrap();

        assert_eq!(config.rates.len(), 1);
        assert_eq!(config.rates.units_per_coin(CurrencyCode::Usd).unwrap(), 0.016);
        assert!(config.rates.units_per_coin(CurrencyCode::Inr).is_err());
    }

    #[test]
    fn test_explicit_rates_and_tier_map() {
        let config = PricingConfig::from_toml_str(
            r#"
            packages = []

            [[rates]]
            currency = "usd"
            units_per_coin = 0.0149

            [[countries]]
            id = 1
            name = "United States"
            code = "US"
            currency = "USD"
            coin_rate = 0.0149
            flag = "🇺🇸"

            [commission.withdrawal_fees]
            standard = 0.04

            [commission.minimum_withdrawal]
            GBP = 15.0
            "#,
        )
        .unwrap();

        assert_eq!(config.rates.units_per_coin(CurrencyCode::Usd).unwrap(), 0.0149);
        assert_eq!(
            config
                .commission
                .fee_for_tier(crate::commission::WithdrawalFeeTier::Standard),
            0.04
        );
        assert_eq!(config.commission.minimum_withdrawal_for(CurrencyCode::Gbp), 15.0);
    }

    #[test]
    fn test_invalid_files_are_rejected() {
        // Unknown currency code
        assert!(matches!(
            PricingConfig::from_toml_str("[[rates]]\ncurrency = \"XYZ\"\nunits_per_coin = 1.0\n"),
            Err(EconomicsError::Parse(_))
        ));
        // Non-positive rate
        assert!(matches!(
            PricingConfig::from_toml_str("[[rates]]\ncurrency = \"USD\"\nunits_per_coin = 0.0\n"),
            Err(EconomicsError::InvalidConfig(_))
        ));
        // Platform share out of range
        assert!(matches!(
            PricingConfig::from_toml_str("[commission]\nplatform_share = 2.0\n"),
            Err(EconomicsError::InvalidConfig(_))
        ));
        // Unknown section
        assert!(PricingConfig::from_toml_str("[ads]\nslot = 1\n").is_err());
    }

    #[test]
    fn test_country_rate_must_match_rate_table() {
        // Seeded US country still says 0.015
        let result = PricingConfig::from_toml_str(
            "[[rates]]\ncurrency = \"USD\"\nunits_per_coin = 0.02\n",
        );
        assert!(matches!(result, Err(EconomicsError::InvalidConfig(_))));

        let result = PricingConfig::from_toml_str(
            r#"
            packages = []

            [[rates]]
            currency = "USD"
            units_per_coin = 0.015

            [[countries]]
            id = 1
            name = "United States"
            code = "US"
            currency = "USD"
            coin_rate = 0.02
            flag = "🇺🇸"
            "#,
        );
        assert!(matches!(result, Err(EconomicsError::InvalidConfig(_))));
    }

    #[test]
    fn test_country_currency_must_be_priced() {
        let result = PricingConfig::from_toml_str(
            r#"
            packages = []

            [[rates]]
            currency = "USD"
            units_per_coin = 0.015

            [[countries]]
            id = 12
            name = "India"
            code = "IN"
            currency = "INR"
            coin_rate = 1.25
            flag = "🇮🇳"
            "#,
        );
        assert!(matches!(result, Err(EconomicsError::InvalidConfig(msg)) if msg.contains("IN")));
    }

    #[test]
    fn test_countries_sharing_a_currency_must_agree() {
        let result = PricingConfig::from_toml_str(
            r#"
            packages = []

            [[countries]]
            id = 5
            name = "Germany"
            code = "DE"
            currency = "EUR"
            coin_rate = 0.014
            flag = "🇩🇪"

            [[countries]]
            id = 6
            name = "France"
            code = "FR"
            currency = "EUR"
            coin_rate = 0.015
            flag = "🇫🇷"
            "#,
        );
        assert!(matches!(result, Err(EconomicsError::InvalidConfig(msg)) if msg.contains("FR")));
    }

    #[test]
    fn test_package_must_reference_known_country() {
        let result = PricingConfig::from_toml_str(
            r#"
            [[packages]]
            id = 1
            country_id = 99
            coins = 70
            price = 1.09
            currency = "USD"
            "#,
        );
        assert!(matches!(result, Err(EconomicsError::InvalidConfig(_))));
    }
}
