//! Hand-picked lists: featured banks and head-to-head comparisons.

use serde::{Deserialize, Serialize};

/// Ordered pair of bank slugs rendered as one comparison page.
///
/// Serialized as a two-element array, e.g. `["etherfi-cash", "gnosis-pay"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPair(String, String);

impl ComparisonPair {
    /// Create a pair from two slugs.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self(first.into(), second.into())
    }

    /// Slug of the left-hand bank.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.0
    }

    /// Slug of the right-hand bank.
    #[must_use]
    pub fn second(&self) -> &str {
        &self.1
    }

    /// Directory name of the comparison page: `<first>-vs-<second>`.
    #[must_use]
    pub fn page_slug(&self) -> String {
        format!("{}-vs-{}", self.0, self.1)
    }
}

const FEATURED: &[&str] = &[
    "etherfi-cash",
    "gnosis-pay",
    "phantom-card",
    "solayer-emerald",
    "kast-k-card",
    "ready",
    "metamask-card",
    "coinbase",
    "nexo",
    "plutus",
    "binance-card",
    "fold",
];

const COMPARISONS: &[(&str, &str)] = &[
    ("etherfi-cash", "gnosis-pay"),
    ("phantom-card", "solayer-emerald"),
    ("kast-k-card", "ready"),
    ("nexo", "cryptocom"),
    ("bybit", "binance-card"),
    ("metamask-card", "phantom-card"),
    ("plutus", "gnosis-pay"),
    ("fold", "coinbase"),
    ("bleap", "holyheld"),
    ("redotpay", "binance-card"),
    ("etherfi-cash", "phantom-card"),
    ("solayer-emerald", "kast-k-card"),
    ("metamask-card", "gnosis-pay"),
    ("cryptocom", "binance-card"),
    ("nexo", "plutus"),
    ("coinbase", "cryptocom"),
    ("fold", "xapo"),
    ("ready", "bleap"),
    ("bybit", "cryptocom"),
    ("phantom-card", "avici"),
    ("etherfi-cash", "nexo"),
    ("kast-k-card", "phantom-card"),
    ("solayer-emerald", "ready"),
    ("gnosis-pay", "holyheld"),
    ("metamask-card", "coinbase"),
    ("binance-card", "okx-card"),
    ("plutus", "etherfi-cash"),
    ("fold", "bitpay"),
    ("redotpay", "kast-k-card"),
    ("bybit", "nexo"),
    ("bleap", "metamask-card"),
    ("solflare", "phantom-card"),
    ("cryptocom", "plutus"),
    ("avici", "kast-k-card"),
    ("etherfi-cash", "coinbase"),
    ("gnosis-pay", "fiat24"),
    ("solayer-emerald", "phantom-card"),
    ("binance-card", "bybit"),
    ("nexo", "coinbase"),
    ("ready", "metamask-card"),
    ("fold", "cryptocom"),
    ("holyheld", "bleap"),
    ("kast-k-card", "solayer-emerald"),
    ("plutus", "bybit"),
    ("redotpay", "revolut"),
    ("etherfi-cash", "solayer-emerald"),
    ("phantom-card", "fold"),
    ("wirex", "cryptocom"),
    ("gnosis-pay", "ready"),
    ("metamask-card", "etherfi-cash"),
];

/// Built-in featured slugs.
#[must_use]
pub fn default_featured() -> Vec<String> {
    FEATURED.iter().map(|s| (*s).to_string()).collect()
}

/// Built-in comparison matchups.
#[must_use]
pub fn default_comparisons() -> Vec<ComparisonPair> {
    COMPARISONS
        .iter()
        .map(|(a, b)| ComparisonPair::new(*a, *b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::slugify;

    #[test]
    fn test_page_slug() {
        let pair = ComparisonPair::new("etherfi-cash", "gnosis-pay");
        assert_eq!(pair.page_slug(), "etherfi-cash-vs-gnosis-pay");
    }

    #[test]
    fn test_pair_deserializes_from_array() {
        let pair: ComparisonPair = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(pair.first(), "a");
        assert_eq!(pair.second(), "b");
    }

    #[test]
    fn test_curated_slugs_are_canonical() {
        for slug in default_featured() {
            assert_eq!(slugify(&slug), slug);
        }
        for pair in default_comparisons() {
            assert_eq!(slugify(pair.first()), pair.first());
            assert_eq!(slugify(pair.second()), pair.second());
            assert_ne!(pair.first(), pair.second());
        }
    }
}
