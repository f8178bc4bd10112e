//! Static registry of blockchains that get their own listing page.

/// A blockchain with a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    /// URL key, e.g. `bnb-chain`.
    pub key: &'static str,

    /// Display name.
    pub name: &'static str,

    /// `Bank.chain` values that count as membership (compared case-insensitively).
    pub aliases: &'static [&'static str],

    /// Prose shown at the top of the listing page.
    pub description: &'static str,
}

impl ChainInfo {
    /// Whether a bank's chain string belongs to this chain.
    #[must_use]
    pub fn matches(&self, chain: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(chain))
    }
}

/// All registered chains, in directory order.
pub const CHAINS: &[ChainInfo] = &[
    ChainInfo {
        key: "solana",
        name: "Solana",
        aliases: &["Solana"],
        description: "Solana is the fastest-growing blockchain for crypto cards, known for sub-second finality and near-zero fees. Multiple wallet providers and DeFi protocols on Solana now offer Visa and Mastercard debit cards.",
    },
    ChainInfo {
        key: "ethereum",
        name: "Ethereum",
        aliases: &["Ethereum"],
        description: "Ethereum remains the foundational blockchain for DeFi and onchain banking. Several cards allow direct spending from Ethereum wallets, with some leveraging L2 solutions for lower fees.",
    },
    ChainInfo {
        key: "base",
        name: "Base",
        aliases: &["Base"],
        description: "Base is Coinbase's Ethereum L2, gaining traction with DeFi-native card products. Low fees and Coinbase backing make it attractive for onchain spending solutions.",
    },
    ChainInfo {
        key: "bitcoin",
        name: "Bitcoin",
        aliases: &["Bitcoin"],
        description: "Bitcoin cards let you earn sats-back rewards or spend BTC via Lightning Network. These products appeal to Bitcoin maximalists who want to stack sats on every purchase.",
    },
    ChainInfo {
        key: "scroll",
        name: "Scroll",
        aliases: &["Scroll"],
        description: "Scroll is an Ethereum L2 using zkEVM technology. Ether.fi Cash, the top-ranked crypto card, operates on Scroll with its DeFi credit model.",
    },
    ChainInfo {
        key: "starknet",
        name: "Starknet",
        aliases: &["Starknet"],
        description: "Starknet uses zero-knowledge proofs for scalability. Ready card leverages Starknet's account abstraction for a true self-custody spending experience.",
    },
    ChainInfo {
        key: "gnosis",
        name: "Gnosis",
        aliases: &["Gnosis"],
        description: "Gnosis Chain powers Gnosis Pay, one of the first self-custody Visa cards in Europe. The chain's Safe wallet infrastructure enables multi-sig card spending.",
    },
    ChainInfo {
        key: "multi-chain",
        name: "Multi-Chain",
        aliases: &["Multi-chain", "14 chains"],
        description: "Multi-chain cards support spending from wallets across multiple blockchains. These products abstract away chain complexity, letting users spend from any supported network.",
    },
    ChainInfo {
        key: "bnb-chain",
        name: "BNB Chain",
        aliases: &["BNB Chain"],
        description: "BNB Chain powers Binance's card ecosystem, one of the largest in crypto. BNB stakers can earn up to 8% cashback on the Binance Card.",
    },
    ChainInfo {
        key: "cronos",
        name: "Cronos",
        aliases: &["Cronos"],
        description: "Cronos is Crypto.com's blockchain, powering one of the most popular crypto card programs with over 100M users and up to 8% CRO cashback.",
    },
    ChainInfo {
        key: "linea",
        name: "Linea",
        aliases: &["Linea"],
        description: "Linea is ConsenSys's zkEVM L2 powering the MetaMask Card. It enables direct wallet spending with sub-second transactions and minimal fees.",
    },
    ChainInfo {
        key: "arbitrum",
        name: "Arbitrum",
        aliases: &["Arbitrum"],
        description: "Arbitrum is a leading Ethereum L2 with a growing DeFi ecosystem. Fiat24 operates on Arbitrum with its NFT-based banking model.",
    },
    ChainInfo {
        key: "avalanche",
        name: "Avalanche",
        aliases: &["Avalanche"],
        description: "Avalanche offers fast finality and low fees for crypto card products. The Avalanche Card leverages the chain's native AVAX token for rewards.",
    },
    ChainInfo {
        key: "cardano",
        name: "Cardano",
        aliases: &["Cardano"],
        description: "Cardano's card ecosystem is powered by EMURGO and Wirex, offering ADA spending and up to 8% crypto cashback.",
    },
    ChainInfo {
        key: "multiversx",
        name: "MultiversX",
        aliases: &["MultiversX"],
        description: "MultiversX (formerly Elrond) powers xPortal, a crypto super app with up to 5% EGLD cashback and integrated card spending.",
    },
];

/// Look up a chain by its URL key.
#[must_use]
pub fn chain_by_key(key: &str) -> Option<&'static ChainInfo> {
    CHAINS.iter().find(|c| c.key == key)
}

/// Find the registered chain a bank's chain string belongs to, if any.
#[must_use]
pub fn chain_for(chain: &str) -> Option<&'static ChainInfo> {
    CHAINS.iter().find(|c| c.matches(chain))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::slug::slugify;

    #[test]
    fn test_keys_unique_and_slug_shaped() {
        let mut seen = HashSet::new();
        for chain in CHAINS {
            assert!(seen.insert(chain.key), "duplicate key {}", chain.key);
            assert_eq!(slugify(chain.key), chain.key);
            assert!(!chain.aliases.is_empty());
        }
        assert_eq!(CHAINS.len(), 15);
    }

    #[test]
    fn test_matches_case_insensitive() {
        let solana = chain_by_key("solana").unwrap();
        assert!(solana.matches("Solana"));
        assert!(solana.matches("SOLANA"));
        assert!(!solana.matches("Solana Mainnet"));
    }

    #[test]
    fn test_multi_chain_aliases() {
        let multi = chain_by_key("multi-chain").unwrap();
        assert!(multi.matches("Multi-chain"));
        assert!(multi.matches("multi-CHAIN"));
        assert!(multi.matches("14 chains"));
        assert_eq!(chain_for("14 Chains").map(|c| c.key), Some("multi-chain"));
    }

    #[test]
    fn test_unknown_chain() {
        assert!(chain_for("Tron").is_none());
        assert!(chain_by_key("tron").is_none());
    }
}
