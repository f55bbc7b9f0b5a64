//! Built-in pricing tables used when no pricing file is supplied

use crate::catalog::{GiftDefinition, GiftRarity, RechargePackage};
use crate::currency::CurrencyCode;
use crate::rates::CountryPricing;

pub(crate) fn countries() -> Vec<CountryPricing> {
    use CurrencyCode::*;

    const ROWS: &[(u32, &str, &str, CurrencyCode, f64, &str, &str)] = &[
        (1, "United States", "US", Usd, 0.015, "🇺🇸", "North America"),
        (2, "Canada", "CA", Cad, 0.020, "🇨🇦", "North America"),
        (3, "Mexico", "MX", Mxn, 0.27, "🇲🇽", "North America"),
        (4, "United Kingdom", "GB", Gbp, 0.012, "🇬🇧", "Europe"),
        (5, "Germany", "DE", Eur, 0.014, "🇩🇪", "Europe"),
        (6, "France", "FR", Eur, 0.014, "🇫🇷", "Europe"),
        (7, "Italy", "IT", Eur, 0.014, "🇮🇹", "Europe"),
        (8, "Spain", "ES", Eur, 0.014, "🇪🇸", "Europe"),
        (9, "Netherlands", "NL", Eur, 0.014, "🇳🇱", "Europe"),
        (10, "Poland", "PL", Pln, 0.065, "🇵🇱", "Europe"),
        (11, "Turkey", "TR", Try, 0.45, "🇹🇷", "Europe"),
        (12, "India", "IN", Inr, 1.25, "🇮🇳", "Asia Pacific"),
        (13, "Pakistan", "PK", Pkr, 4.2, "🇵🇰", "Asia Pacific"),
        (14, "Japan", "JP", Jpy, 2.2, "🇯🇵", "Asia Pacific"),
        (15, "South Korea", "KR", Krw, 20.5, "🇰🇷", "Asia Pacific"),
        (16, "China", "CN", Cny, 0.11, "🇨🇳", "Asia Pacific"),
        (17, "Australia", "AU", Aud, 0.023, "🇦🇺", "Asia Pacific"),
        (18, "Philippines", "PH", Php, 0.85, "🇵🇭", "Asia Pacific"),
        (19, "Thailand", "TH", Thb, 0.54, "🇹🇭", "Asia Pacific"),
        (20, "Vietnam", "VN", Vnd, 380.0, "🇻🇳", "Asia Pacific"),
        (21, "Malaysia", "MY", Myr, 0.07, "🇲🇾", "Asia Pacific"),
        (22, "Singapore", "SG", Sgd, 0.02, "🇸🇬", "Asia Pacific"),
        (23, "Indonesia", "ID", Idr, 230.0, "🇮🇩", "Asia Pacific"),
        (24, "Brazil", "BR", Brl, 0.075, "🇧🇷", "South America"),
        (25, "Argentina", "AR", Ars, 13.5, "🇦🇷", "South America"),
        (26, "Chile", "CL", Clp, 14.2, "🇨🇱", "South America"),
        (27, "Colombia", "CO", Cop, 62.5, "🇨🇴", "South America"),
        (28, "South Africa", "ZA", Zar, 0.28, "🇿🇦", "Africa"),
        (29, "Nigeria", "NG", Ngn, 12.3, "🇳🇬", "Africa"),
        (30, "Egypt", "EG", Egp, 0.465, "🇪🇬", "Africa"),
        (31, "Saudi Arabia", "SA", Sar, 0.056, "🇸🇦", "Middle East"),
        (32, "United Arab Emirates", "AE", Aed, 0.055, "🇦🇪", "Middle East"),
        (33, "Israel", "IL", Ils, 0.055, "🇮🇱", "Middle East"),
        (34, "Russia", "RU", Rub, 1.4, "🇷🇺", "Europe"),
        (35, "Bangladesh", "BD", Bdt, 1.65, "🇧🇩", "Asia Pacific"),
        (36, "Sri Lanka", "LK", Lkr, 4.85, "🇱🇰", "Asia Pacific"),
        (37, "Nepal", "NP", Npr, 2.0, "🇳🇵", "Asia Pacific"),
        (38, "Afghanistan", "AF", Afn, 1.32, "🇦🇫", "Asia Pacific"),
        (39, "Kazakhstan", "KZ", Kzt, 6.8, "🇰🇿", "Asia Pacific"),
        (40, "Ukraine", "UA", Uah, 0.55, "🇺🇦", "Europe"),
    ];

    ROWS.iter()
        .map(|&(id, name, code, currency, coin_rate, flag, region)| CountryPricing {
            id,
            name: name.to_string(),
            code: code.to_string(),
            currency,
            coin_rate,
            flag: flag.to_string(),
            region: region.to_string(),
        })
        .collect()
}

pub(crate) fn gifts() -> Vec<GiftDefinition> {
    use GiftRarity::*;

    const ROWS: &[(u32, &str, u64, &str, GiftRarity)] = &[
        (1, "Rose", 1, "Basic", Common),
        (2, "TikTok", 5, "Basic", Common),
        (3, "Sunglasses", 10, "Basic", Common),
        (4, "Heart Me", 15, "Basic", Common),
        (5, "Perfume", 20, "Basic", Common),
        (6, "Hand Hearts", 25, "Basic", Common),
        (7, "Confetti", 30, "Basic", Common),
        (8, "Finger Heart", 35, "Basic", Common),
        (9, "Doughnut", 50, "Basic", Common),
        (10, "Ice Cream", 60, "Basic", Common),
        (11, "Paper Crane", 99, "Premium", Rare),
        (12, "Hat", 100, "Premium", Rare),
        (13, "Cap", 120, "Premium", Rare),
        (14, "Wishing Bottle", 199, "Premium", Rare),
        (15, "Rainbow Puke", 299, "Premium", Rare),
        (16, "Hand Wave", 399, "Premium", Rare),
        (17, "Lion", 500, "Premium", Epic),
        (18, "Panda", 699, "Premium", Epic),
        (19, "Love Bang", 799, "Premium", Epic),
        (20, "Galaxy", 1000, "Premium", Epic),
        (21, "Rocket", 1500, "Special", Epic),
        (22, "Fireworks", 2000, "Special", Epic),
        (23, "Drama Queen", 5000, "Special", Legendary),
        (24, "I'm Very Rich", 7999, "Special", Legendary),
        (25, "Adam's Dream", 15000, "Special", Legendary),
        (26, "Falcon", 25000, "Special", Legendary),
        (27, "Universe", 34999, "Special", Legendary),
    ];

    ROWS.iter()
        .map(|&(id, name, coin_cost, category, rarity)| GiftDefinition {
            id,
            name: name.to_string(),
            coin_cost,
            diamond_value: coin_cost,
            rarity,
            category: category.to_string(),
        })
        .collect()
}

pub(crate) fn packages() -> Vec<RechargePackage> {
    use CurrencyCode::*;

    // Country ids refer to `countries()`: 1 = US, 12 = IN, 13 = PK
    const ROWS: &[(u32, u32, u64, f64, CurrencyCode)] = &[
        (1, 1, 70, 1.09, Usd),
        (2, 1, 350, 5.49, Usd),
        (3, 1, 700, 10.99, Usd),
        (4, 12, 70, 89.0, Inr),
        (5, 12, 350, 449.0, Inr),
        (6, 12, 700, 899.0, Inr),
        (7, 13, 70, 309.0, Pkr),
        (8, 13, 350, 1549.0, Pkr),
        (9, 13, 700, 3099.0, Pkr),
    ];

    ROWS.iter()
        .map(|&(id, country_id, coins, price, currency)| RechargePackage {
            id,
            country_id,
            coins,
            price,
            currency,
        })
        .collect()
}
