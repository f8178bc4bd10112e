//! Card records: raw input shape and the normalized `Bank`.

use std::{fmt, path::Path};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    error::{CoreError, Result},
    slug::slugify,
};

/// Value used for descriptive fields missing from the source data.
pub const UNKNOWN: &str = "TBD";

/// Explicit "does not apply" marker used by the source data.
pub const NOT_APPLICABLE: &str = "N/A";

/// Custody value that wins comparisons.
pub const NON_CUSTODIAL: &str = "Non-Custodial";

/// Custody value for platform-held funds.
pub const CUSTODIAL: &str = "Custodial";

/// Annual fee value meaning "free".
pub const ZERO_FEE: &str = "$0";

/// Chain assumed when a record does not name one.
pub const DEFAULT_CHAIN: &str = "Multi-chain";

/// Region tag meaning worldwide availability.
pub const GLOBAL_REGION: &str = "global";

/// A card record as found in the source data. Every field except `name` may be absent.
///
/// Optional fields accept any JSON value: scalars are kept in their string form
/// and anything else reads as absent, so one odd value never rejects the snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub network: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub chain: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub custody: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cashback: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cashback_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub annual_fee: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub fx_fee: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub archetype: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub regions: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub perks: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub coming_soon: Option<bool>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tier: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub token: Option<String>,
}

/// String form of a scalar JSON value.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// A list of scalars; a lone scalar counts as a one-item list.
fn lenient_list<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        other => scalar_text(other).map(|item| vec![item]),
    })
}

/// JavaScript truthiness; `null` stays absent.
fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    })
}

/// Product category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    CryptoNative,
    /// Generic bucket for missing or unrecognized input.
    #[default]
    Onchain,
    Exchange,
    Fintech,
    Neobank,
}

impl Category {
    /// Parse a category label, falling back to [`Category::Onchain`].
    ///
    /// Accepts `cryptoNative`, `crypto-native`, `crypto_native` and so on, in any case.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let key: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "cryptonative" => Self::CryptoNative,
            "onchain" => Self::Onchain,
            "exchange" => Self::Exchange,
            "fintech" => Self::Fintech,
            "neobank" => Self::Neobank,
            _ => {
                debug!(category = value, "unrecognized category, using onchain");
                Self::Onchain
            }
        }
    }

    /// Key used in the JSON API.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CryptoNative => "cryptoNative",
            Self::Onchain => "onchain",
            Self::Exchange => "exchange",
            Self::Fintech => "fintech",
            Self::Neobank => "neobank",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::CryptoNative => "Crypto-Native",
            Self::Onchain => "Onchain",
            Self::Exchange => "Exchange",
            Self::Fintech => "Fintech",
            Self::Neobank => "Neobank",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display label for a region tag; unknown tags are returned unchanged.
#[must_use]
pub fn region_label(region: &str) -> &str {
    match region {
        "global" => "🌍 Global",
        "americas" => "🇺🇸 Americas",
        "europe" => "🇪🇺 Europe",
        "apac" => "🌏 Asia-Pacific",
        "latam" => "🌎 Latin America",
        "india" => "🇮🇳 India",
        "argentina" => "🇦🇷 Argentina",
        other => other,
    }
}

/// Display label for a custody model; unknown values are returned unchanged.
#[must_use]
pub fn custody_label(custody: &str) -> String {
    match custody {
        NON_CUSTODIAL => format!("🔐 {NON_CUSTODIAL}"),
        CUSTODIAL => format!("🏦 {CUSTODIAL}"),
        "Hybrid" => "🔄 Hybrid".to_string(),
        UNKNOWN => format!("❓ {UNKNOWN}"),
        other => other.to_string(),
    }
}

/// A normalized card product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    pub name: String,
    pub slug: String,
    pub network: String,
    pub chain: String,
    pub custody: String,
    pub cashback: String,
    pub cashback_token: String,
    pub annual_fee: String,
    pub fx_fee: String,
    pub category: Category,
    pub archetype: String,
    pub regions: Vec<String>,
    pub website: String,
    pub logo: String,
    pub features: Vec<String>,
    pub perks: Vec<String>,
    pub spendbase_url: String,
    pub coming_soon: bool,
    pub tier: Option<String>,
    pub token: Option<String>,
}

/// Present, non-blank value or nothing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn or_default(value: Option<String>, default: &str) -> String {
    present(value).unwrap_or_else(|| default.to_string())
}

fn non_empty_list(value: Option<Vec<String>>) -> Option<Vec<String>> {
    value.filter(|v| !v.is_empty())
}

impl Bank {
    /// Normalize a raw record. `review_base` is the review site root
    /// (e.g. `https://spendbase.cards`) used to derive `spendbase_url`.
    #[must_use]
    pub fn from_raw(raw: RawCard, review_base: &str) -> Self {
        let slug = slugify(&raw.name);
        let spendbase_url = format!("{}/card/{slug}/", review_base.trim_end_matches('/'));

        Self {
            network: or_default(raw.network, UNKNOWN),
            chain: or_default(raw.chain, DEFAULT_CHAIN),
            custody: or_default(raw.custody, UNKNOWN),
            cashback: or_default(raw.cashback, UNKNOWN),
            cashback_token: or_default(raw.cashback_token, UNKNOWN),
            annual_fee: or_default(raw.annual_fee, UNKNOWN),
            fx_fee: or_default(raw.fx_fee, UNKNOWN),
            category: present(raw.category)
                .map(|c| Category::parse(&c))
                .unwrap_or_default(),
            archetype: or_default(raw.archetype, "wallet"),
            regions: non_empty_list(raw.regions)
                .unwrap_or_else(|| vec![GLOBAL_REGION.to_string()]),
            website: or_default(raw.website, "#"),
            logo: present(raw.logo).unwrap_or_default(),
            features: raw.features.unwrap_or_default(),
            perks: raw.perks.unwrap_or_default(),
            coming_soon: raw.coming_soon.unwrap_or(false),
            tier: present(raw.tier),
            token: present(raw.token),
            spendbase_url,
            slug,
            name: raw.name,
        }
    }

    /// Whether the holder keeps their own keys.
    #[must_use]
    pub fn is_non_custodial(&self) -> bool {
        self.custody == NON_CUSTODIAL
    }

    /// Whether the card has no annual fee.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.annual_fee == ZERO_FEE
    }

    /// Whether the cashback token is a real value worth mentioning.
    #[must_use]
    pub fn has_cashback_token(&self) -> bool {
        self.cashback_token != UNKNOWN && self.cashback_token != NOT_APPLICABLE
    }

    /// Whether the card is available worldwide.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.regions.iter().any(|r| r == GLOBAL_REGION)
    }

    /// Region labels joined for display.
    #[must_use]
    pub fn region_labels(&self) -> String {
        self.regions
            .iter()
            .map(|r| region_label(r))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Normalize every raw record, preserving order.
#[must_use]
pub fn normalize_all(raw: Vec<RawCard>, review_base: &str) -> Vec<Bank> {
    raw.into_iter()
        .map(|card| Bank::from_raw(card, review_base))
        .collect()
}

/// Read raw card records from a JSON array file.
pub fn load_cards(path: &Path) -> Result<Vec<RawCard>> {
    let content = std::fs::read_to_string(path)?;
    let cards: Vec<RawCard> =
        serde_json::from_str(&content).map_err(|e| CoreError::data(path, e.to_string()))?;
    debug!(path = %path.display(), count = cards.len(), "loaded card data");
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEW: &str = "https://spendbase.cards";

    fn raw(name: &str) -> RawCard {
        RawCard {
            name: name.to_string(),
            ..RawCard::default()
        }
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let bank = Bank::from_raw(raw("Ether.fi Cash"), REVIEW);

        assert_eq!(bank.slug, "etherfi-cash");
        assert_eq!(bank.network, UNKNOWN);
        assert_eq!(bank.chain, DEFAULT_CHAIN);
        assert_eq!(bank.custody, UNKNOWN);
        assert_eq!(bank.cashback, UNKNOWN);
        assert_eq!(bank.cashback_token, UNKNOWN);
        assert_eq!(bank.annual_fee, UNKNOWN);
        assert_eq!(bank.fx_fee, UNKNOWN);
        assert_eq!(bank.category, Category::Onchain);
        assert_eq!(bank.archetype, "wallet");
        assert_eq!(bank.regions, vec!["global"]);
        assert_eq!(bank.website, "#");
        assert_eq!(bank.logo, "");
        assert!(bank.features.is_empty());
        assert!(bank.perks.is_empty());
        assert!(!bank.coming_soon);
        assert!(bank.tier.is_none());
        assert!(bank.token.is_none());
        assert_eq!(
            bank.spendbase_url,
            "https://spendbase.cards/card/etherfi-cash/"
        );
    }

    #[test]
    fn test_empty_values_are_defaulted() {
        let card = RawCard {
            network: Some(String::new()),
            cashback: Some("   ".to_string()),
            regions: Some(vec![]),
            tier: Some(String::new()),
            ..raw("Fold")
        };
        let bank = Bank::from_raw(card, REVIEW);

        assert_eq!(bank.network, UNKNOWN);
        assert_eq!(bank.cashback, UNKNOWN);
        assert_eq!(bank.regions, vec!["global"]);
        assert!(bank.tier.is_none());
    }

    #[test]
    fn test_values_pass_through() {
        let card = RawCard {
            cashback: Some("up to lots".to_string()),
            chain: Some("Solana".to_string()),
            category: Some("crypto-native".to_string()),
            regions: Some(vec!["europe".to_string(), "mars".to_string()]),
            coming_soon: Some(true),
            ..raw("Phantom Card")
        };
        let bank = Bank::from_raw(card, "https://reviews.example.com/");

        assert_eq!(bank.cashback, "up to lots");
        assert_eq!(bank.chain, "Solana");
        assert_eq!(bank.category, Category::CryptoNative);
        assert_eq!(bank.region_labels(), "🇪🇺 Europe, mars");
        assert!(!bank.is_global());
        assert!(bank.coming_soon);
        assert_eq!(
            bank.spendbase_url,
            "https://reviews.example.com/card/phantom-card/"
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("cryptoNative"), Category::CryptoNative);
        assert_eq!(Category::parse("Crypto_Native"), Category::CryptoNative);
        assert_eq!(Category::parse("EXCHANGE"), Category::Exchange);
        assert_eq!(Category::parse("neobank"), Category::Neobank);
        assert_eq!(Category::parse("fintech"), Category::Fintech);
        assert_eq!(Category::parse("defi-lender"), Category::Onchain);
        assert_eq!(Category::CryptoNative.to_string(), "Crypto-Native");
    }

    #[test]
    fn test_cashback_token_clause_flags() {
        let mut bank = Bank::from_raw(raw("Nexo"), REVIEW);
        assert!(!bank.has_cashback_token());
        bank.cashback_token = NOT_APPLICABLE.to_string();
        assert!(!bank.has_cashback_token());
        bank.cashback_token = "NEXO".to_string();
        assert!(bank.has_cashback_token());
    }

    #[test]
    fn test_custody_label() {
        assert_eq!(custody_label("Non-Custodial"), "🔐 Non-Custodial");
        assert_eq!(custody_label("Hybrid"), "🔄 Hybrid");
        assert_eq!(custody_label("Semi"), "Semi");
    }

    #[test]
    fn test_raw_card_json_shape() {
        let json = r#"[
            {"name": "Gnosis Pay", "cashbackToken": "GNO", "annualFee": "$0",
             "fxFee": null, "comingSoon": false, "unknownKey": 1},
            {"name": "Ready"}
        ]"#;
        let cards: Vec<RawCard> = serde_json::from_str(json).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].cashback_token.as_deref(), Some("GNO"));
        assert_eq!(cards[0].annual_fee.as_deref(), Some("$0"));
        assert!(cards[0].fx_fee.is_none());
        assert!(cards[1].chain.is_none());
    }

    #[test]
    fn test_non_string_values_are_kept() {
        let json = r#"[
            {"name": "Alpha", "cashback": 5, "annualFee": 0, "comingSoon": "yes",
             "regions": ["europe", 7, null], "features": "Apple Pay", "tier": {"level": 1}},
            {"name": "Beta", "cashback": 2.5, "comingSoon": 0, "perks": true},
            {"name": "Gamma", "custody": true, "comingSoon": null}
        ]"#;
        let cards: Vec<RawCard> = serde_json::from_str(json).unwrap();
        assert_eq!(cards.len(), 3);

        let banks = normalize_all(cards, REVIEW);
        assert_eq!(banks[0].cashback, "5");
        assert_eq!(banks[0].annual_fee, "0");
        assert!(banks[0].coming_soon);
        assert_eq!(banks[0].regions, vec!["europe", "7"]);
        assert_eq!(banks[0].features, vec!["Apple Pay"]);
        assert!(banks[0].tier.is_none());

        assert_eq!(banks[1].cashback, "2.5");
        assert!(!banks[1].coming_soon);
        assert_eq!(banks[1].perks, vec!["true"]);

        assert_eq!(banks[2].custody, "true");
        assert_eq!(banks[2].cashback, UNKNOWN);
        assert!(!banks[2].coming_soon);
    }

    #[test]
    fn test_load_cards() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("cards.json");
        std::fs::write(&path, r#"[{"name": "Fold", "chain": "Bitcoin"}]"#).unwrap();

        let cards = load_cards(&path).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].chain.as_deref(), Some("Bitcoin"));

        std::fs::write(&path, r#"{"name": "Fold"}"#).unwrap();
        let err = load_cards(&path).unwrap_err();
        assert!(err.to_string().contains("Data error"));
    }
}
