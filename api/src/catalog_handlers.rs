//! Read-only catalog endpoints: countries, gifts, recharge packages, rates

use crate::extract::ApiQuery;
use crate::{ApiError, ApiResult, ApiState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tok_economics::{
    CommissionConfig, CountryPricing, CurrencyCode, CurrencyRate, GiftDefinition, GiftRarity,
    RechargePackage,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub currency: CurrencyCode,
    pub coin_rate: f64,
    pub flag: String,
    pub region: String,
    pub is_active: bool,
}

impl From<&CountryPricing> for CountryResponse {
    fn from(country: &CountryPricing) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
            code: country.code.clone(),
            currency: country.currency,
            coin_rate: country.coin_rate,
            flag: country.flag.clone(),
            region: country.region.clone(),
            is_active: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftResponse {
    pub id: u32,
    pub name: String,
    pub coin_cost: u64,
    pub diamond_value: u64,
    pub category: String,
    pub rarity: GiftRarity,
    pub is_active: bool,
}

impl From<&GiftDefinition> for GiftResponse {
    fn from(gift: &GiftDefinition) -> Self {
        Self {
            id: gift.id,
            name: gift.name.clone(),
            coin_cost: gift.coin_cost,
            diamond_value: gift.diamond_value,
            category: gift.category.clone(),
            rarity: gift.rarity,
            is_active: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub id: u32,
    pub country_id: u32,
    pub coins: u64,
    pub price: f64,
    pub currency: CurrencyCode,
    pub is_active: bool,
}

impl From<&RechargePackage> for PackageResponse {
    fn from(package: &RechargePackage) -> Self {
        Self {
            id: package.id,
            country_id: package.country_id,
            coins: package.coins,
            price: package.price,
            currency: package.currency,
            is_active: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRateResponse {
    pub currency: CurrencyCode,
    pub name: &'static str,
    pub symbol: &'static str,
    pub rate: f64,
    /// Coins bought by one unit of the currency
    pub coins_per_unit: f64,
    pub is_active: bool,
}

impl From<&CurrencyRate> for CoinRateResponse {
    fn from(rate: &CurrencyRate) -> Self {
        Self {
            currency: rate.currency,
            name: rate.currency.name(),
            symbol: rate.currency.symbol(),
            rate: rate.units_per_coin,
            coins_per_unit: 1.0 / rate.units_per_coin,
            is_active: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionResponse {
    pub platform_share: f64,
    pub creator_share: f64,
    pub withdrawal_fees: Vec<FeeTierResponse>,
    pub minimum_withdrawal: Vec<MinimumWithdrawalResponse>,
    pub default_minimum_withdrawal: f64,
}

#[derive(Debug, Serialize)]
pub struct FeeTierResponse {
    pub tier: &'static str,
    pub fee: f64,
}

#[derive(Debug, Serialize)]
pub struct MinimumWithdrawalResponse {
    pub currency: CurrencyCode,
    pub amount: f64,
}

impl From<&CommissionConfig> for CommissionResponse {
    fn from(commission: &CommissionConfig) -> Self {
        Self {
            platform_share: commission.platform_share,
            creator_share: commission.creator_share(),
            withdrawal_fees: commission
                .withdrawal_fees
                .iter()
                .map(|(tier, fee)| FeeTierResponse {
                    tier: tier.as_str(),
                    fee: *fee,
                })
                .collect(),
            minimum_withdrawal: commission
                .minimum_withdrawal
                .iter()
                .map(|(currency, amount)| MinimumWithdrawalResponse {
                    currency: *currency,
                    amount: *amount,
                })
                .collect(),
            default_minimum_withdrawal: commission.default_minimum_withdrawal,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GiftQuery {
    pub category: Option<String>,
    pub rarity: Option<String>,
    /// `cost` lists the most expensive gift first; catalog order otherwise
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageQuery {
    pub country_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CoinRateQuery {
    pub currency: Option<String>,
}

pub async fn list_countries(State(state): State<ApiState>) -> ApiResult<Json<Vec<CountryResponse>>> {
    let pricing = state.pricing().await;
    Ok(Json(pricing.countries.iter().map(CountryResponse::from).collect()))
}

pub async fn get_country(
    State(state): State<ApiState>,
    Path(code): Path<String>,
) -> ApiResult<Json<CountryResponse>> {
    let pricing = state.pricing().await;
    let country = pricing.countries.by_code(&code)?;
    Ok(Json(country.into()))
}

pub async fn list_gifts(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<GiftQuery>,
) -> ApiResult<Json<Vec<GiftResponse>>> {
    let pricing = state.pricing().await;

    let rarity = query
        .rarity
        .as_deref()
        .map(|r| {
            r.parse::<GiftRarity>()
                .map_err(|_| ApiError::BadRequest(format!("Unknown gift rarity: {}", r)))
        })
        .transpose()?;

    let mut gifts: Vec<&GiftDefinition> = match query.sort.as_deref() {
        Some(s) if s.eq_ignore_ascii_case("cost") => pricing.gifts.ranked_by_cost(),
        Some(other) => {
            return Err(ApiError::BadRequest(format!("Unknown sort order: {}", other)));
        }
        None => pricing.gifts.iter().collect(),
    };

    if let Some(category) = query.category.as_deref() {
        gifts.retain(|g| g.category.eq_ignore_ascii_case(category));
    }
    if let Some(rarity) = rarity {
        gifts.retain(|g| g.rarity == rarity);
    }

    Ok(Json(gifts.into_iter().map(GiftResponse::from).collect()))
}

pub async fn list_recharge_packages(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<PackageQuery>,
) -> ApiResult<Json<Vec<PackageResponse>>> {
    let pricing = state.pricing().await;
    let packages = pricing
        .packages
        .iter()
        .filter(|p| query.country_id.map_or(true, |id| p.country_id == id))
        .map(PackageResponse::from)
        .collect();
    Ok(Json(packages))
}

/// All coin rates, or the single rate named by `?currency=`
pub async fn get_coin_rates(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<CoinRateQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let pricing = state.pricing().await;

    let body = match query.currency.as_deref() {
        Some(code) => {
            let currency: CurrencyCode = code.parse()?;
            let rate = pricing
                .rates
                .get(currency)
                .ok_or_else(|| ApiError::NotFound(format!("No coin rate for {}", currency)))?;
            serde_json::to_value(CoinRateResponse::from(rate))
        }
        None => serde_json::to_value(
            pricing
                .rates
                .iter()
                .map(CoinRateResponse::from)
                .collect::<Vec<_>>(),
        ),
    }
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(body))
}

pub async fn get_commission(State(state): State<ApiState>) -> ApiResult<Json<CommissionResponse>> {
    let pricing = state.pricing().await;
    Ok(Json(CommissionResponse::from(&pricing.commission)))
}
