//! Supported currencies
//!
//! Currency codes are a closed set. Anything outside it is rejected with
//! [`EconomicsError::UnknownCurrency`] at parse time, so a lookup can only
//! fail because the active configuration has no rate for a known code.

use crate::error::EconomicsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! currencies {
    ($($variant:ident => ($code:literal, $symbol:literal, $minor:literal, $name:literal)),+ $(,)?) => {
        /// ISO 4217 code of a currency the pricing tables can reference
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum CurrencyCode {
            $($variant),+
        }

        impl CurrencyCode {
            /// Every supported currency
            pub const ALL: &'static [CurrencyCode] = &[$(CurrencyCode::$variant),+];

            /// Upper-case ISO code, e.g. `"USD"`
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$variant => $code),+
                }
            }

            /// Display symbol placed before the amount
            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$variant => $symbol),+
                }
            }

            /// Number of decimal places shown for this currency
            pub fn minor_units(&self) -> u32 {
                match self {
                    $(CurrencyCode::$variant => $minor),+
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$variant => $name),+
                }
            }
        }
    };
}

currencies! {
    Usd => ("USD", "$", 2, "US Dollar"),
    Cad => ("CAD", "CA$", 2, "Canadian Dollar"),
    Mxn => ("MXN", "MX$", 2, "Mexican Peso"),
    Gbp => ("GBP", "£", 2, "British Pound"),
    Eur => ("EUR", "€", 2, "Euro"),
    Pln => ("PLN", "zł", 2, "Polish Zloty"),
    Try => ("TRY", "₺", 2, "Turkish Lira"),
    Inr => ("INR", "₹", 2, "Indian Rupee"),
    Pkr => ("PKR", "Rs", 2, "Pakistani Rupee"),
    Jpy => ("JPY", "¥", 0, "Japanese Yen"),
    Krw => ("KRW", "₩", 0, "South Korean Won"),
    Cny => ("CNY", "CN¥", 2, "Chinese Yuan"),
    Aud => ("AUD", "A$", 2, "Australian Dollar"),
    Php => ("PHP", "₱", 2, "Philippine Peso"),
    Thb => ("THB", "฿", 2, "Thai Baht"),
    Vnd => ("VND", "₫", 0, "Vietnamese Dong"),
    Myr => ("MYR", "RM", 2, "Malaysian Ringgit"),
    Sgd => ("SGD", "S$", 2, "Singapore Dollar"),
    Idr => ("IDR", "Rp", 2, "Indonesian Rupiah"),
    Brl => ("BRL", "R$", 2, "Brazilian Real"),
    Ars => ("ARS", "AR$", 2, "Argentine Peso"),
    Clp => ("CLP", "CLP$", 0, "Chilean Peso"),
    Cop => ("COP", "COL$", 2, "Colombian Peso"),
    Zar => ("ZAR", "R", 2, "South African Rand"),
    Ngn => ("NGN", "₦", 2, "Nigerian Naira"),
    Egp => ("EGP", "E£", 2, "Egyptian Pound"),
    Sar => ("SAR", "SR", 2, "Saudi Riyal"),
    Aed => ("AED", "AED ", 2, "UAE Dirham"),
    Ils => ("ILS", "₪", 2, "Israeli New Shekel"),
    Rub => ("RUB", "₽", 2, "Russian Ruble"),
    Bdt => ("BDT", "৳", 2, "Bangladeshi Taka"),
    Lkr => ("LKR", "Rs", 2, "Sri Lankan Rupee"),
    Npr => ("NPR", "Rs", 2, "Nepalese Rupee"),
    Afn => ("AFN", "؋", 2, "Afghan Afghani"),
    Kzt => ("KZT", "₸", 2, "Kazakhstani Tenge"),
    Uah => ("UAH", "₴", 2, "Ukrainian Hryvnia"),
}

impl FromStr for CurrencyCode {
    type Err = EconomicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CurrencyCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EconomicsError::UnknownCurrency(wanted.to_string()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = EconomicsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::Usd);
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::Usd);
        assert_eq!(" inr ".parse::<CurrencyCode>().unwrap(), CurrencyCode::Inr);
    }

    #[test]
    fn test_parse_unknown_code() {
        match "XYZ".parse::<CurrencyCode>() {
            Err(EconomicsError::UnknownCurrency(code)) => assert_eq!(code, "XYZ"),
            other => panic!("expected UnknownCurrency, got {:?}", other),
        }
        assert!("".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        for code in CurrencyCode::ALL {
            assert_eq!(code.as_str().len(), 3);
            assert_eq!(code.as_str().parse::<CurrencyCode>().unwrap(), *code);
            let count = CurrencyCode::ALL
                .iter()
                .filter(|other| other.as_str() == code.as_str())
                .count();
            assert_eq!(count, 1, "duplicate code {}", code);
        }
    }

    #[test]
    fn test_zero_decimal_currencies() {
        assert_eq!(CurrencyCode::Jpy.minor_units(), 0);
        assert_eq!(CurrencyCode::Krw.minor_units(), 0);
        assert_eq!(CurrencyCode::Vnd.minor_units(), 0);
        assert_eq!(CurrencyCode::Usd.minor_units(), 2);
        assert_eq!(CurrencyCode::Eur.minor_units(), 2);
    }

    #[test]
    fn test_serializes_as_code_string() {
        let json = serde_json::to_string(&CurrencyCode::Gbp).unwrap();
        assert_eq!(json, "\"GBP\"");

        let parsed: CurrencyCode = serde_json::from_str("\"cad\"").unwrap();
        assert_eq!(parsed, CurrencyCode::Cad);

        assert!(serde_json::from_str::<CurrencyCode>("\"XYZ\"").is_err());
    }

    #[test]
    fn test_works_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(CurrencyCode::Usd, 20.0);
        map.insert(CurrencyCode::Inr, 1500.0);

        let json = serde_json::to_string(&map).unwrap();
        let back: std::collections::BTreeMap<CurrencyCode, f64> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
