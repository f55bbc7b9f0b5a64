use std::io::Write;
use tok_economics::*;

#[test]
fn test_calculator_walkthrough() {
    let config = PricingConfig::default();

    // 1000 coins at $0.015
    let value = coins_to_currency(&config, 1000.0, CurrencyCode::Usd).unwrap();
    assert_eq!(value, 15.0);
    assert_eq!(format_amount(value, CurrencyCode::Usd), "$15.00");

    // Creator keeps half after the platform commission
    let earnings = creator_earnings(&config, 1000.0, CurrencyCode::Usd).unwrap();
    assert_eq!(earnings, 7.5);

    // 2 coins = 1 diamond
    assert_eq!(coins_to_diamonds(1000), 500);
    assert_eq!(diamonds_to_coins(500).unwrap(), 1000);
}

#[test]
fn test_round_trip_across_every_builtin_currency() {
    let config = PricingConfig::default();

    for rate in config.rates.iter() {
        for coins in [0u64, 1, 2, 33, 70, 350, 999, 7_999, 100_000] {
            let amount = coins_to_currency(&config, coins as f64, rate.currency).unwrap();
            let back = currency_to_coins(&config, amount, rate.currency).unwrap();
            assert_eq!(back, coins, "{} coins in {}", coins, rate.currency);
        }
    }
}

#[test]
fn test_withdrawal_fee_tiers() {
    let config = PricingConfig::default();

    let nets: Vec<f64> = WithdrawalFeeTier::ALL
        .iter()
        .map(|tier| {
            let fee = config.commission.fee_for_tier(*tier);
            withdrawal_net_amount(&config, 20_000.0, CurrencyCode::Inr, fee).unwrap()
        })
        .collect();

    // Higher fee tiers pay out less
    assert!(nets.windows(2).all(|pair| pair[0] > pair[1]));

    // 20,000 coins = ₹25,000; creator ₹12,500; 5% fee -> ₹11,875
    let standard = withdrawal_breakdown(
        &config,
        20_000.0,
        CurrencyCode::Inr,
        config.commission.fee_for_tier(WithdrawalFeeTier::Standard),
    )
    .unwrap();
    assert!((standard.net_amount - 11_875.0).abs() < 1e-6);
    assert!(standard.meets_minimum);
    assert_eq!(format_amount(standard.net_amount, CurrencyCode::Inr), "₹11,875.00");
}

#[test]
fn test_best_value_per_country() {
    let config = PricingConfig::default();

    for code in ["US", "IN", "PK"] {
        let country = config.countries.by_code(code).unwrap();
        let packages = config.packages.for_country(country.id);
        assert_eq!(packages.len(), 3, "packages for {}", code);

        let best = best_value_package(&packages).unwrap().unwrap();
        let ranked = rank_packages(&packages).unwrap();
        assert_eq!(ranked[0], best);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].cost_per_coin <= pair[1].cost_per_coin));
    }

    // Japan has no packages configured
    let japan = config.countries.by_code("jp").unwrap();
    assert!(best_value_package(&config.packages.for_country(japan.id))
        .unwrap()
        .is_none());
}

#[test]
fn test_unknown_country() {
    let config = PricingConfig::default();
    assert!(matches!(
        config.countries.by_code("XX"),
        Err(EconomicsError::UnknownCountry(_))
    ));
}

#[test]
fn test_gift_catalog_valuation() {
    let config = PricingConfig::default();

    let universe = config.gifts.by_name("Universe").unwrap();
    assert_eq!(universe.rarity, GiftRarity::Legendary);

    let valuation = value_gift(&config, universe, 1, CurrencyCode::Usd).unwrap();
    assert_eq!(valuation.total_coins, 34_999);
    // Odd cost: 2:1 rule drops the remainder, unlike the stored 1:1 value
    assert_eq!(valuation.diamonds, 17_499);
    assert_ne!(valuation.diamonds, universe.diamond_value);

    assert_eq!(config.gifts.by_category("basic").count(), 10);
    assert_eq!(config.gifts.by_category("Premium").count(), 10);
    assert_eq!(config.gifts.by_category("Special").count(), 7);
}

#[test]
fn test_formatter_degrades_for_unknown_codes() {
    assert_eq!(format_currency(15.0, "USD"), "$15.00");
    assert_eq!(format_currency(1435.0, "KRW"), "₩1,435");
    assert_eq!(format_currency(15.0, "BTC"), "BTC 15.00");
}

#[test]
fn test_load_pricing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[commission]
platform_share = 0.6

packages = []

[[rates]]
currency = "USD"
units_per_coin = 0.02

[[countries]]
id = 1
name = "United States"
code = "US"
currency = "USD"
coin_rate = 0.02
flag = "🇺🇸"
region = "North America"
"#
    )
    .unwrap();

    let config = PricingConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(coins_to_currency(&config, 100.0, CurrencyCode::Usd).unwrap(), 2.0);
    let earnings = creator_earnings(&config, 100.0, CurrencyCode::Usd).unwrap();
    assert!((earnings - 0.8).abs() < 1e-9);

    // Countries report the same rate the calculators use
    assert_eq!(config.countries.by_code("US").unwrap().coin_rate, 0.02);

    // Only USD was priced in the file
    assert!(matches!(
        coins_to_currency(&config, 100.0, CurrencyCode::Eur),
        Err(EconomicsError::UnknownCurrency(_))
    ));
}

#[test]
fn test_missing_pricing_file() {
    assert!(matches!(
        PricingConfig::from_toml_file("/nonexistent/pricing.toml"),
        Err(EconomicsError::Io(_))
    ));
}
