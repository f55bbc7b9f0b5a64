//! Calculator endpoints backing the site's coin, earnings and withdrawal tools

use crate::catalog_handlers::{GiftResponse, PackageResponse};
use crate::extract::ApiQuery;
use crate::{ApiError, ApiResult, ApiState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tok_economics::{
    best_value_package, coins_to_currency, coins_to_diamonds, creator_earnings, currency_to_coins,
    diamonds_to_coins, format_amount, rank_gifts_by_efficiency, rank_packages, value_gift,
    withdrawal_breakdown, CurrencyCode, RankedGift, RankedPackage, RaritySummary,
    WithdrawalFeeTier,
};

#[derive(Debug, Deserialize)]
pub struct CoinsQuery {
    pub coins: f64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct AmountQuery {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct DiamondQuery {
    pub coins: Option<u64>,
    pub diamonds: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawalQuery {
    pub coins: f64,
    pub currency: String,
    /// Explicit fee fraction, e.g. 0.05
    pub fee: Option<f64>,
    /// Named fee tier, used when `fee` is absent
    pub tier: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestValueQuery {
    pub country_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct GiftValueQuery {
    pub gift: String,
    #[serde(default = "default_quantity")]
    pub quantity: u64,
    pub currency: String,
}

fn default_quantity() -> u64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct GiftRankingQuery {
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyValueResponse {
    pub coins: f64,
    pub currency: CurrencyCode,
    pub amount: f64,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPurchaseResponse {
    pub amount: f64,
    pub currency: CurrencyCode,
    pub coins: u64,
}

#[derive(Debug, Serialize)]
pub struct CoinsToDiamondsResponse {
    pub coins: u64,
    pub diamonds: u64,
}

#[derive(Debug, Serialize)]
pub struct DiamondsToCoinsResponse {
    pub diamonds: u64,
    pub coins: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsResponse {
    pub coins: f64,
    pub currency: CurrencyCode,
    pub total_value: f64,
    pub platform_share: f64,
    pub creator_earnings: f64,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalResponse {
    pub coins: f64,
    pub currency: CurrencyCode,
    pub tier: Option<WithdrawalFeeTier>,
    pub fee: f64,
    pub total_value: f64,
    pub creator_share: f64,
    pub fee_amount: f64,
    pub net_amount: f64,
    pub minimum_withdrawal: f64,
    pub meets_minimum: bool,
    pub formatted_net_amount: String,
    pub formatted_minimum: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPackageResponse {
    #[serde(flatten)]
    pub package: PackageResponse,
    pub cost_per_coin: f64,
}

impl From<RankedPackage> for RankedPackageResponse {
    fn from(ranked: RankedPackage) -> Self {
        Self {
            package: PackageResponse::from(&ranked.package),
            cost_per_coin: ranked.cost_per_coin,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestValueResponse {
    pub country_id: u32,
    pub best: Option<RankedPackageResponse>,
    pub packages: Vec<RankedPackageResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftValueResponse {
    pub gift: String,
    pub quantity: u64,
    pub currency: CurrencyCode,
    pub total_coins: u64,
    pub total_value: f64,
    pub creator_earnings: f64,
    pub diamonds: u64,
    pub formatted_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedGiftResponse {
    #[serde(flatten)]
    pub gift: GiftResponse,
    pub diamonds: u64,
    pub efficiency: f64,
    pub creator_value: f64,
    pub formatted_creator_value: String,
}

impl RankedGiftResponse {
    fn new(ranked: RankedGift, currency: CurrencyCode) -> Self {
        Self {
            gift: GiftResponse::from(&ranked.gift),
            diamonds: ranked.diamonds,
            efficiency: ranked.efficiency,
            creator_value: ranked.creator_value,
            formatted_creator_value: format_amount(ranked.creator_value, currency),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaritySummaryResponse {
    pub rarity: &'static str,
    pub count: usize,
    pub min_coin_cost: u64,
}

impl From<RaritySummary> for RaritySummaryResponse {
    fn from(summary: RaritySummary) -> Self {
        Self {
            rarity: summary.rarity.as_str(),
            count: summary.count,
            min_coin_cost: summary.min_coin_cost,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRankingResponse {
    pub currency: CurrencyCode,
    pub gifts: Vec<RankedGiftResponse>,
    pub rarities: Vec<RaritySummaryResponse>,
}

pub async fn coins_to_currency_handler(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<CoinsQuery>,
) -> ApiResult<Json<CurrencyValueResponse>> {
    let pricing = state.pricing().await;
    let currency: CurrencyCode = query.currency.parse()?;
    let amount = coins_to_currency(&pricing, query.coins, currency)?;

    Ok(Json(CurrencyValueResponse {
        coins: query.coins,
        currency,
        amount,
        formatted: format_amount(amount, currency),
    }))
}

pub async fn currency_to_coins_handler(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<AmountQuery>,
) -> ApiResult<Json<CoinPurchaseResponse>> {
    let pricing = state.pricing().await;
    let currency: CurrencyCode = query.currency.parse()?;
    let coins = currency_to_coins(&pricing, query.amount, currency)?;

    Ok(Json(CoinPurchaseResponse {
        amount: query.amount,
        currency,
        coins,
    }))
}

pub async fn coins_to_diamonds_handler(
    ApiQuery(query): ApiQuery<DiamondQuery>,
) -> ApiResult<Json<CoinsToDiamondsResponse>> {
    let coins = query
        .coins
        .ok_or_else(|| ApiError::BadRequest("Missing coins parameter".to_string()))?;

    Ok(Json(CoinsToDiamondsResponse {
        coins,
        diamonds: coins_to_diamonds(coins),
    }))
}

pub async fn diamonds_to_coins_handler(
    ApiQuery(query): ApiQuery<DiamondQuery>,
) -> ApiResult<Json<DiamondsToCoinsResponse>> {
    let diamonds = query
        .diamonds
        .ok_or_else(|| ApiError::BadRequest("Missing diamonds parameter".to_string()))?;

    Ok(Json(DiamondsToCoinsResponse {
        diamonds,
        coins: diamonds_to_coins(diamonds)?,
    }))
}

pub async fn earnings_handler(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<CoinsQuery>,
) -> ApiResult<Json<EarningsResponse>> {
    let pricing = state.pricing().await;
    let currency: CurrencyCode = query.currency.parse()?;
    let total_value = coins_to_currency(&pricing, query.coins, currency)?;
    let earnings = creator_earnings(&pricing, query.coins, currency)?;

    Ok(Json(EarningsResponse {
        coins: query.coins,
        currency,
        total_value,
        platform_share: pricing.commission.platform_share,
        creator_earnings: earnings,
        formatted: format_amount(earnings, currency),
    }))
}

pub async fn withdrawal_handler(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<WithdrawalQuery>,
) -> ApiResult<Json<WithdrawalResponse>> {
    let pricing = state.pricing().await;
    let currency: CurrencyCode = query.currency.parse()?;

    let (fee, tier) = match (query.fee, query.tier.as_deref()) {
        (Some(fee), _) => (fee, pricing.commission.tier_for_fee(fee)),
        (None, Some(name)) => {
            let tier: WithdrawalFeeTier = name
                .parse()
                .map_err(|_| ApiError::BadRequest(format!("Unknown fee tier: {}", name)))?;
            (pricing.commission.fee_for_tier(tier), Some(tier))
        }
        (None, None) => {
            let tier = WithdrawalFeeTier::default();
            (pricing.commission.fee_for_tier(tier), Some(tier))
        }
    };

    let breakdown = withdrawal_breakdown(&pricing, query.coins, currency, fee)?;

    Ok(Json(WithdrawalResponse {
        coins: breakdown.coins,
        currency,
        tier,
        fee: breakdown.fee,
        total_value: breakdown.total_value,
        creator_share: breakdown.creator_share,
        fee_amount: breakdown.fee_amount,
        net_amount: breakdown.net_amount,
        minimum_withdrawal: breakdown.minimum,
        meets_minimum: breakdown.meets_minimum,
        formatted_net_amount: format_amount(breakdown.net_amount, currency),
        formatted_minimum: format_amount(breakdown.minimum, currency),
    }))
}

pub async fn best_value_handler(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<BestValueQuery>,
) -> ApiResult<Json<BestValueResponse>> {
    let pricing = state.pricing().await;
    let country = pricing.countries.by_id(query.country_id)?;
    let packages = pricing.packages.for_country(country.id);

    Ok(Json(BestValueResponse {
        country_id: country.id,
        best: best_value_package(&packages)?.map(RankedPackageResponse::from),
        packages: rank_packages(&packages)?
            .into_iter()
            .map(RankedPackageResponse::from)
            .collect(),
    }))
}

pub async fn gift_value_handler(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<GiftValueQuery>,
) -> ApiResult<Json<GiftValueResponse>> {
    let pricing = state.pricing().await;
    let currency: CurrencyCode = query.currency.parse()?;
    let gift = pricing
        .gifts
        .by_name(&query.gift)
        .ok_or_else(|| ApiError::NotFound(format!("Gift {} not found", query.gift)))?;

    let valuation = value_gift(&pricing, gift, query.quantity, currency)?;

    Ok(Json(GiftValueResponse {
        gift: gift.name.clone(),
        quantity: query.quantity,
        currency,
        total_coins: valuation.total_coins,
        total_value: valuation.total_value,
        creator_earnings: valuation.creator_earnings,
        diamonds: valuation.diamonds,
        formatted_value: format_amount(valuation.total_value, currency),
    }))
}

/// Gifts ranked by diamonds per coin, with per-rarity counts
pub async fn gift_ranking_handler(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<GiftRankingQuery>,
) -> ApiResult<Json<GiftRankingResponse>> {
    let pricing = state.pricing().await;
    let currency: CurrencyCode = query.currency.parse()?;
    let ranked = rank_gifts_by_efficiency(&pricing, pricing.gifts.iter(), currency)?;

    Ok(Json(GiftRankingResponse {
        currency,
        gifts: ranked
            .into_iter()
            .map(|gift| RankedGiftResponse::new(gift, currency))
            .collect(),
        rarities: pricing
            .gifts
            .rarity_summary()
            .into_iter()
            .map(RaritySummaryResponse::from)
            .collect(),
    }))
}
