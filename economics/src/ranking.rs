//! Best-value ranking of recharge packages and gifts

use crate::catalog::{GiftDefinition, RechargePackage};
use crate::config::PricingConfig;
use crate::conversion::coins_to_diamonds;
use crate::currency::CurrencyCode;
use crate::earnings::creator_earnings;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPackage {
    pub package: RechargePackage,
    pub cost_per_coin: f64,
}

/// Packages ordered best value first: lowest cost per coin, then larger bundle.
///
/// Fails with `InvalidPackage` if any package has no coins or a bad price.
pub fn rank_packages(packages: &[RechargePackage]) -> Result<Vec<RankedPackage>> {
    let mut ranked = packages
        .iter()
        .map(|package| {
            Ok(RankedPackage {
                cost_per_coin: package.cost_per_coin()?,
                package: package.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by(compare_value);
    Ok(ranked)
}

/// The best-value package, or `None` for an empty list
pub fn best_value_package(packages: &[RechargePackage]) -> Result<Option<RankedPackage>> {
    Ok(rank_packages(packages)?.into_iter().next())
}

fn compare_value(a: &RankedPackage, b: &RankedPackage) -> Ordering {
    a.cost_per_coin
        .total_cmp(&b.cost_per_coin)
        .then_with(|| b.package.coins.cmp(&a.package.coins))
}

/// A gift scored by how many diamonds each coin spent on it produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGift {
    pub gift: GiftDefinition,
    /// Diamonds the creator receives (2 coins = 1 diamond)
    pub diamonds: u64,
    /// Diamonds per coin spent
    pub efficiency: f64,
    /// Creator earnings from one gift in the requested currency
    pub creator_value: f64,
}

/// Gifts ordered by diamonds per coin, highest first; ties go to the cheaper gift.
///
/// Whole diamonds only, so odd-cost gifts score slightly below 0.5.
pub fn rank_gifts_by_efficiency<'a>(
    config: &PricingConfig,
    gifts: impl IntoIterator<Item = &'a GiftDefinition>,
    currency: CurrencyCode,
) -> Result<Vec<RankedGift>> {
    let mut ranked = gifts
        .into_iter()
        .map(|gift| {
            let diamonds = coins_to_diamonds(gift.coin_cost);
            Ok(RankedGift {
                diamonds,
                efficiency: diamonds as f64 / gift.coin_cost as f64,
                creator_value: creator_earnings(config, gift.coin_cost as f64, currency)?,
                gift: gift.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by(|a, b| {
        b.efficiency
            .total_cmp(&a.efficiency)
            .then_with(|| a.gift.coin_cost.cmp(&b.gift.coin_cost))
    });
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GiftRarity;
    use crate::error::EconomicsError;

    fn package(id: u32, coins: u64, price: f64) -> RechargePackage {
        RechargePackage {
            id,
            country_id: 1,
            coins,
            price,
            currency: CurrencyCode::Usd,
        }
    }

    #[test]
    fn test_us_bundles_ranked_by_cost_per_coin() {
        let packages = vec![package(3, 700, 10.99), package(2, 350, 5.49), package(1, 70, 1.09)];

        // 1.09 / 70 = 0.01557 < 5.49 / 350 = 0.01569 < 10.99 / 700 = 0.0157
        let ranked = rank_packages(&packages).unwrap();
        let order: Vec<u64> = ranked.iter().map(|r| r.package.coins).collect();
        assert_eq!(order, vec![70, 350, 700]);

        let best = best_value_package(&packages).unwrap().unwrap();
        assert_eq!(best.package.id, 1);
        assert!((best.cost_per_coin - 0.015571).abs() < 1e-6);
    }

    #[test]
    fn test_tie_prefers_bigger_bundle() {
        let packages = vec![package(1, 100, 1.0), package(2, 200, 2.0), package(3, 50, 0.5)];

        let ranked = rank_packages(&packages).unwrap();
        let order: Vec<u64> = ranked.iter().map(|r| r.package.coins).collect();
        assert_eq!(order, vec![200, 100, 50]);
    }

    #[test]
    fn test_empty_list_has_no_winner() {
        assert!(best_value_package(&[]).unwrap().is_none());
        assert!(rank_packages(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_zero_coin_package_is_rejected() {
        let packages = vec![package(1, 70, 1.09), package(2, 0, 0.0)];
        assert!(matches!(
            best_value_package(&packages),
            Err(EconomicsError::InvalidPackage(_))
        ));
    }

    #[test]
    fn test_cheaper_small_bundle_beats_expensive_large_one() {
        let packages = vec![package(1, 1000, 20.0), package(2, 70, 0.70)];
        let best = best_value_package(&packages).unwrap().unwrap();
        assert_eq!(best.package.id, 2);
    }

    fn gift(id: u32, name: &str, coin_cost: u64) -> GiftDefinition {
        GiftDefinition {
            id,
            name: name.to_string(),
            coin_cost,
            diamond_value: coin_cost,
            rarity: GiftRarity::Common,
            category: "Basic".to_string(),
        }
    }

    #[test]
    fn test_even_cost_gifts_rank_above_odd_ones() {
        let config = PricingConfig::default();
        let gifts = vec![gift(1, "Rose", 1), gift(2, "TikTok", 5), gift(3, "Lion", 500), gift(4, "Hat", 100)];

        let ranked = rank_gifts_by_efficiency(&config, &gifts, CurrencyCode::Usd).unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.gift.name.as_str()).collect();
        // Hat and Lion convert at exactly 0.5; TikTok 2/5; Rose makes no diamond
        assert_eq!(names, vec!["Hat", "Lion", "TikTok", "Rose"]);

        assert_eq!(ranked[1].diamonds, 250);
        assert_eq!(ranked[1].efficiency, 0.5);
        assert!((ranked[1].creator_value - 3.75).abs() < 1e-9);
        assert_eq!(ranked[3].diamonds, 0);
    }

    #[test]
    fn test_gift_ranking_needs_priced_currency() {
        let mut config = PricingConfig::default();
        config.rates = crate::rates::RateTable::new(vec![]).unwrap();
        let gifts = vec![gift(1, "Rose", 1)];

        assert!(matches!(
            rank_gifts_by_efficiency(&config, &gifts, CurrencyCode::Usd),
            Err(EconomicsError::UnknownCurrency(_))
        ));
        assert!(rank_gifts_by_efficiency(&config, &[], CurrencyCode::Usd).unwrap().is_empty());
    }
}
