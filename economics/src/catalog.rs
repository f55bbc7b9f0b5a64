//! Gift catalog, recharge packages and gift valuation

use crate::config::PricingConfig;
use crate::conversion::{coins_to_currency, coins_to_diamonds};
use crate::currency::CurrencyCode;
use crate::earnings::creator_earnings;
use crate::error::{EconomicsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GiftRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl GiftRarity {
    pub const ALL: [GiftRarity; 4] = [
        GiftRarity::Common,
        GiftRarity::Rare,
        GiftRarity::Epic,
        GiftRarity::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GiftRarity::Common => "Common",
            GiftRarity::Rare => "Rare",
            GiftRarity::Epic => "Epic",
            GiftRarity::Legendary => "Legendary",
        }
    }
}

impl FromStr for GiftRarity {
    type Err = EconomicsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|rarity| rarity.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EconomicsError::InvalidConfig(format!("unknown gift rarity: {}", wanted)))
    }
}

/// How many gifts share a rarity and the cheapest of them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaritySummary {
    pub rarity: GiftRarity,
    pub count: usize,
    pub min_coin_cost: u64,
}

/// A gift viewers can buy with coins and send to a creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftDefinition {
    pub id: u32,
    pub name: String,
    pub coin_cost: u64,
    /// Stored catalog value. Conversions use the 2:1 coin/diamond rule instead.
    pub diamond_value: u64,
    pub rarity: GiftRarity,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GiftCatalog {
    gifts: Vec<GiftDefinition>,
}

impl GiftCatalog {
    pub fn new(gifts: Vec<GiftDefinition>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(gifts.len());
        for gift in &gifts {
            if gift.coin_cost == 0 || gift.diamond_value == 0 {
                return Err(EconomicsError::InvalidConfig(format!(
                    "gift {} must cost and be worth at least 1",
                    gift.name
                )));
            }
            if !ids.insert(gift.id) {
                return Err(EconomicsError::InvalidConfig(format!(
                    "duplicate gift id {}",
                    gift.id
                )));
            }
        }
        Ok(Self { gifts })
    }

    pub fn iter(&self) -> impl Iterator<Item = &GiftDefinition> {
        self.gifts.iter()
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a GiftDefinition> {
        self.gifts
            .iter()
            .filter(move |g| g.category.eq_ignore_ascii_case(category))
    }

    pub fn by_name(&self, name: &str) -> Option<&GiftDefinition> {
        let name = name.trim();
        self.gifts.iter().find(|g| g.name.eq_ignore_ascii_case(name))
    }

    pub fn by_id(&self, id: u32) -> Option<&GiftDefinition> {
        self.gifts.iter().find(|g| g.id == id)
    }

    pub fn by_rarity(&self, rarity: GiftRarity) -> impl Iterator<Item = &GiftDefinition> {
        self.gifts.iter().filter(move |g| g.rarity == rarity)
    }

    /// Most expensive gift first; equal costs keep catalog order
    pub fn ranked_by_cost(&self) -> Vec<&GiftDefinition> {
        let mut ranked: Vec<&GiftDefinition> = self.gifts.iter().collect();
        ranked.sort_by(|a, b| b.coin_cost.cmp(&a.coin_cost));
        ranked
    }

    /// Per-rarity counts, skipping rarities with no gifts
    pub fn rarity_summary(&self) -> Vec<RaritySummary> {
        GiftRarity::ALL
            .into_iter()
            .filter_map(|rarity| {
                let costs: Vec<u64> = self.by_rarity(rarity).map(|g| g.coin_cost).collect();
                costs.iter().min().map(|&min_coin_cost| RaritySummary {
                    rarity,
                    count: costs.len(),
                    min_coin_cost,
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }
}

/// A purchasable coin bundle in one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RechargePackage {
    pub id: u32,
    pub country_id: u32,
    pub coins: u64,
    pub price: f64,
    pub currency: CurrencyCode,
}

impl RechargePackage {
    /// Price of one coin in this package. Rejects zero-coin and mispriced packages.
    pub fn cost_per_coin(&self) -> Result<f64> {
        if self.coins == 0 {
            return Err(EconomicsError::InvalidPackage(format!(
                "package {} has no coins",
                self.id
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(EconomicsError::InvalidPackage(format!(
                "package {} has invalid price {}",
                self.id, self.price
            )));
        }
        Ok(self.price / self.coins as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageCatalog {
    packages: Vec<RechargePackage>,
}

impl PackageCatalog {
    pub fn new(packages: Vec<RechargePackage>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(packages.len());
        for package in &packages {
            package
                .cost_per_coin()
                .map_err(|e| EconomicsError::InvalidConfig(e.to_string()))?;
            if !ids.insert(package.id) {
                return Err(EconomicsError::InvalidConfig(format!(
                    "duplicate package id {}",
                    package.id
                )));
            }
        }
        Ok(Self { packages })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RechargePackage> {
        self.packages.iter()
    }

    pub fn for_country(&self, country_id: u32) -> Vec<RechargePackage> {
        self.packages
            .iter()
            .filter(|p| p.country_id == country_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// What a number of gifts is worth, to the sender and to the creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftValuation {
    pub currency: CurrencyCode,
    pub total_coins: u64,
    pub total_value: f64,
    pub creator_earnings: f64,
    pub diamonds: u64,
}

/// Value `quantity` copies of one gift
pub fn value_gift(
    config: &PricingConfig,
    gift: &GiftDefinition,
    quantity: u64,
    currency: CurrencyCode,
) -> Result<GiftValuation> {
    value_gift_basket(config, &[(gift, quantity)], currency)
}

/// Value a mix of gifts, e.g. everything received during one live stream
pub fn value_gift_basket(
    config: &PricingConfig,
    items: &[(&GiftDefinition, u64)],
    currency: CurrencyCode,
) -> Result<GiftValuation> {
    let mut total_coins: u64 = 0;
    for (gift, quantity) in items {
        total_coins = gift
            .coin_cost
            .checked_mul(*quantity)
            .and_then(|coins| total_coins.checked_add(coins))
            .ok_or_else(|| {
                EconomicsError::InvalidAmount(format!("too many {} gifts to value", gift.name))
            })?;
    }

    Ok(GiftValuation {
        currency,
        total_coins,
        total_value: coins_to_currency(config, total_coins as f64, currency)?,
        creator_earnings: creator_earnings(config, total_coins as f64, currency)?,
        diamonds: coins_to_diamonds(total_coins),
    })
}
