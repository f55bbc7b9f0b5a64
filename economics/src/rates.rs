//! Coin exchange rates per currency and per country

use crate::currency::CurrencyCode;
use crate::error::{EconomicsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Local currency units paid for one coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub currency: CurrencyCode,
    pub units_per_coin: f64,
}

impl CurrencyRate {
    pub fn new(currency: CurrencyCode, units_per_coin: f64) -> Self {
        Self {
            currency,
            units_per_coin,
        }
    }
}

/// Validated currency -> rate lookup
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: Vec<CurrencyRate>,
    index: HashMap<CurrencyCode, usize>,
}

impl RateTable {
    /// Build a table, rejecting non-positive rates and duplicate currencies.
    pub fn new(rates: Vec<CurrencyRate>) -> Result<Self> {
        let mut index = HashMap::with_capacity(rates.len());

        for (i, rate) in rates.iter().enumerate() {
            if !rate.units_per_coin.is_finite() || rate.units_per_coin <= 0.0 {
                return Err(EconomicsError::InvalidConfig(format!(
                    "rate for {} must be a positive number, got {}",
                    rate.currency, rate.units_per_coin
                )));
            }
            if index.insert(rate.currency, i).is_some() {
                return Err(EconomicsError::InvalidConfig(format!(
                    "duplicate rate for {}",
                    rate.currency
                )));
            }
        }

        Ok(Self { rates, index })
    }

    /// Local currency units per coin
    pub fn units_per_coin(&self, currency: CurrencyCode) -> Result<f64> {
        self.get(currency)
            .map(|rate| rate.units_per_coin)
            .ok_or_else(|| EconomicsError::UnknownCurrency(currency.to_string()))
    }

    /// Coins bought by one unit of local currency
    pub fn coins_per_unit(&self, currency: CurrencyCode) -> Result<f64> {
        Ok(1.0 / self.units_per_coin(currency)?)
    }

    pub fn get(&self, currency: CurrencyCode) -> Option<&CurrencyRate> {
        self.index.get(&currency).map(|&i| &self.rates[i])
    }

    pub fn contains(&self, currency: CurrencyCode) -> bool {
        self.index.contains_key(&currency)
    }

    /// Rates in load order
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyRate> {
        self.rates.iter()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Coin pricing for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPricing {
    pub id: u32,
    pub name: String,
    /// ISO 3166 alpha-2 code, e.g. "US"
    pub code: String,
    pub currency: CurrencyCode,
    /// Same quantity as [`CurrencyRate::units_per_coin`], denormalized per country
    pub coin_rate: f64,
    pub flag: String,
    #[serde(default)]
    pub region: String,
}

/// Validated country lookup, one record per country code
#[derive(Debug, Clone, PartialEq)]
pub struct CountryTable {
    countries: Vec<CountryPricing>,
    by_code: HashMap<String, usize>,
    by_id: HashMap<u32, usize>,
}

impl CountryTable {
    pub fn new(countries: Vec<CountryPricing>) -> Result<Self> {
        let mut by_code = HashMap::with_capacity(countries.len());
        let mut by_id = HashMap::with_capacity(countries.len());

        for (i, country) in countries.iter().enumerate() {
            if !country.coin_rate.is_finite() || country.coin_rate <= 0.0 {
                return Err(EconomicsError::InvalidConfig(format!(
                    "coin rate for {} must be a positive number, got {}",
                    country.code, country.coin_rate
                )));
            }
            if by_code
                .insert(country.code.to_ascii_uppercase(), i)
                .is_some()
            {
                return Err(EconomicsError::InvalidConfig(format!(
                    "duplicate country code {}",
                    country.code
                )));
            }
            if by_id.insert(country.id, i).is_some() {
                return Err(EconomicsError::InvalidConfig(format!(
                    "duplicate country id {}",
                    country.id
                )));
            }
        }

        Ok(Self {
            countries,
            by_code,
            by_id,
        })
    }

    /// Look up a country by its code, ignoring case
    pub fn by_code(&self, code: &str) -> Result<&CountryPricing> {
        self.by_code
            .get(&code.trim().to_ascii_uppercase())
            .map(|&i| &self.countries[i])
            .ok_or_else(|| EconomicsError::UnknownCountry(code.to_string()))
    }

    pub fn by_id(&self, id: u32) -> Result<&CountryPricing> {
        self.by_id
            .get(&id)
            .map(|&i| &self.countries[i])
            .ok_or_else(|| EconomicsError::UnknownCountry(id.to_string()))
    }

    pub fn by_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a CountryPricing> {
        self.countries
            .iter()
            .filter(move |c| c.region.eq_ignore_ascii_case(region))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryPricing> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
