//! Terminal coin quote: what a number of coins is worth and pays out

use owo_colors::OwoColorize;
use tok_economics::{
    coins_to_currency, coins_to_diamonds, creator_earnings, format_amount, withdrawal_breakdown,
    CurrencyCode, PricingConfig, WithdrawalFeeTier,
};

pub struct QuoteRow {
    pub label: String,
    pub fee: f64,
    pub net_amount: f64,
    pub meets_minimum: bool,
}

pub struct Quote {
    pub coins: u64,
    pub currency: CurrencyCode,
    pub total_value: f64,
    pub diamonds: u64,
    pub creator_earnings: f64,
    pub minimum: f64,
    pub withdrawals: Vec<QuoteRow>,
}

/// Build a quote for every fee tier, or for one explicit fee
pub fn build_quote(
    pricing: &PricingConfig,
    coins: u64,
    currency: CurrencyCode,
    fee: Option<f64>,
) -> tok_economics::Result<Quote> {
    let fees: Vec<(String, f64)> = match fee {
        Some(fee) => vec![(format!("{:.1}% fee", fee * 100.0), fee)],
        None => WithdrawalFeeTier::ALL
            .iter()
            .map(|tier| (tier.as_str().to_string(), pricing.commission.fee_for_tier(*tier)))
            .collect(),
    };

    let mut withdrawals = Vec::with_capacity(fees.len());
    for (label, fee) in fees {
        let breakdown = withdrawal_breakdown(pricing, coins as f64, currency, fee)?;
        withdrawals.push(QuoteRow {
            label,
            fee,
            net_amount: breakdown.net_amount,
            meets_minimum: breakdown.meets_minimum,
        });
    }

    Ok(Quote {
        coins,
        currency,
        total_value: coins_to_currency(pricing, coins as f64, currency)?,
        diamonds: coins_to_diamonds(coins),
        creator_earnings: creator_earnings(pricing, coins as f64, currency)?,
        minimum: pricing.commission.minimum_withdrawal_for(currency),
        withdrawals,
    })
}

pub fn print_quote(quote: &Quote) {
    let currency = quote.currency;

    println!("\n{}", "╔═══════════════════════════════════════════════════╗".cyan());
    println!("{}", "║               TIKTOK COIN QUOTE                   ║".cyan().bold());
    println!("{}", "╚═══════════════════════════════════════════════════╝".cyan());

    println!(
        "\n{}: {} ({})",
        "Currency".yellow().bold(),
        currency.name(),
        currency
    );
    println!("{}: {}", "Coins".yellow().bold(), quote.coins);
    println!(
        "{}: {}",
        "Value".yellow().bold(),
        format_amount(quote.total_value, currency).green()
    );
    println!("{}: {}", "Diamonds".yellow().bold(), quote.diamonds);
    println!(
        "{}: {}",
        "Creator earnings".yellow().bold(),
        format_amount(quote.creator_earnings, currency).green()
    );

    println!(
        "\n{} (minimum {})",
        "Withdrawal".yellow().bold(),
        format_amount(quote.minimum, currency)
    );
    for row in &quote.withdrawals {
        let net = format_amount(row.net_amount, currency);
        let status = if row.meets_minimum {
            "✓".green().to_string()
        } else {
            "below minimum".red().to_string()
        };
        println!(
            "  {:<10} {:>5.1}%  {}  {}",
            row.label,
            row.fee * 100.0,
            net.bright_white(),
            status
        );
    }

    println!(
        "\n{}",
        format!("Quoted {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).bright_black()
    );
}
