//! Cross-cutting views over the normalized bank list.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use onchainbanks_core::{Bank, CHAINS, ChainInfo, bank::NON_CUSTODIAL, chain::chain_for};
use tracing::debug;

/// Banks listed under one registered chain.
#[derive(Debug, Clone)]
pub struct ChainGroup<'a> {
    pub chain: &'static ChainInfo,
    pub banks: Vec<&'a Bank>,
}

/// Counts, groupings and lookups shared by every renderer.
#[derive(Debug)]
pub struct SiteIndex<'a> {
    banks: &'a [Bank],
    by_slug: HashMap<&'a str, &'a Bank>,
    chains: Vec<ChainGroup<'a>>,
    collisions: Vec<&'a str>,
    non_custodial: usize,
    unique_chains: usize,
}

impl<'a> SiteIndex<'a> {
    /// Build the index. Banks keep their input order everywhere.
    #[must_use]
    pub fn new(banks: &'a [Bank]) -> Self {
        let mut by_slug = HashMap::with_capacity(banks.len());
        let mut collisions = Vec::new();

        for bank in banks {
            match by_slug.entry(bank.slug.as_str()) {
                Entry::Vacant(entry) => {
                    entry.insert(bank);
                }
                Entry::Occupied(_) => collisions.push(bank.slug.as_str()),
            }
        }

        let chains = CHAINS
            .iter()
            .map(|chain| ChainGroup {
                chain,
                banks: banks.iter().filter(|b| chain.matches(&b.chain)).collect(),
            })
            .collect();

        let non_custodial = banks.iter().filter(|b| b.custody == NON_CUSTODIAL).count();
        let unique_chains = banks
            .iter()
            .map(|b| b.chain.as_str())
            .collect::<HashSet<_>>()
            .len();

        debug!(
            banks = banks.len(),
            unique_chains,
            non_custodial,
            collisions = collisions.len(),
            "indexed banks"
        );

        Self {
            banks,
            by_slug,
            chains,
            collisions,
            non_custodial,
            unique_chains,
        }
    }

    /// All banks in input order.
    #[must_use]
    pub fn banks(&self) -> &'a [Bank] {
        self.banks
    }

    /// Total number of banks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.banks.len()
    }

    /// Banks whose custody is exactly `Non-Custodial`.
    #[must_use]
    pub fn non_custodial(&self) -> usize {
        self.non_custodial
    }

    /// Every other bank.
    #[must_use]
    pub fn custodial(&self) -> usize {
        self.total() - self.non_custodial
    }

    /// Non-custodial share as a whole percentage, rounded half up. Zero for an empty list.
    #[must_use]
    pub fn non_custodial_percent(&self) -> usize {
        rounded_percent(self.non_custodial, self.total())
    }

    /// Number of distinct `chain` strings (case-sensitive).
    #[must_use]
    pub fn unique_chains(&self) -> usize {
        self.unique_chains
    }

    /// Resolve a slug. The first bank with that slug wins.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&'a Bank> {
        self.by_slug.get(slug).copied()
    }

    /// Every registered chain, including those without members.
    #[must_use]
    pub fn chain_groups(&self) -> &[ChainGroup<'a>] {
        &self.chains
    }

    /// Registered chains with at least one member, in registry order.
    pub fn nonempty_chains(&self) -> impl Iterator<Item = &ChainGroup<'a>> {
        self.chains.iter().filter(|group| !group.banks.is_empty())
    }

    /// Slugs shared by more than one bank, one entry per extra occurrence.
    #[must_use]
    pub fn collisions(&self) -> &[&'a str] {
        &self.collisions
    }

    /// Banks whose chain matches no registered chain.
    pub fn unregistered_chain_banks(&self) -> impl Iterator<Item = &'a Bank> + '_ {
        self.banks
            .iter()
            .filter(|b| chain_for(&b.chain).is_none())
    }
}

/// `part / total` as a percentage rounded half up.
#[must_use]
pub fn rounded_percent(part: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (part * 200 + total) / (total * 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::bank;

    fn sample() -> Vec<Bank> {
        vec![
            bank("Phantom Card", "Solana", "Non-Custodial", "2%", "$0"),
            bank("Solflare", "solana", "Non-Custodial", "1%", "$0"),
            bank("Gnosis Pay", "Gnosis", "Non-Custodial", "5%", "$0"),
            bank("Coinbase", "Base", "Custodial", "4%", "$0"),
            bank("Bybit", "14 chains", "Custodial", "10%", "$0"),
            bank("Nexo", "Multi-chain", "Hybrid", "2%", "$0"),
            bank("Tron Card", "Tron", "Custodial", "1%", "$0"),
        ]
    }

    #[test]
    fn test_counts() {
        let banks = sample();
        let index = SiteIndex::new(&banks);

        assert_eq!(index.total(), 7);
        assert_eq!(index.non_custodial(), 3);
        assert_eq!(index.custodial(), 4);
        // 3/7 = 42.86%
        assert_eq!(index.non_custodial_percent(), 43);
        // "Solana" and "solana" are distinct strings
        assert_eq!(index.unique_chains(), 7);
    }

    #[test]
    fn test_rounded_percent_half_up() {
        assert_eq!(rounded_percent(1, 8), 13); // 12.5
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(1, 200), 1); // 0.5
        assert_eq!(rounded_percent(0, 5), 0);
        assert_eq!(rounded_percent(5, 5), 100);
        assert_eq!(rounded_percent(0, 0), 0);
    }

    #[test]
    fn test_chain_grouping() {
        let banks = sample();
        let index = SiteIndex::new(&banks);

        let solana = &index.chain_groups()[0];
        assert_eq!(solana.chain.key, "solana");
        let names: Vec<_> = solana.banks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Phantom Card", "Solflare"]);

        let multi = index
            .chain_groups()
            .iter()
            .find(|g| g.chain.key == "multi-chain")
            .unwrap();
        let names: Vec<_> = multi.banks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Bybit", "Nexo"]);

        let keys: Vec<_> = index.nonempty_chains().map(|g| g.chain.key).collect();
        assert_eq!(keys, vec!["solana", "base", "gnosis", "multi-chain"]);
        assert_eq!(index.chain_groups().len(), CHAINS.len());
    }

    #[test]
    fn test_unregistered_chain() {
        let banks = sample();
        let index = SiteIndex::new(&banks);

        let orphans: Vec<_> = index.unregistered_chain_banks().map(|b| b.slug.as_str()).collect();
        assert_eq!(orphans, vec!["tron-card"]);
        assert!(index.get("tron-card").is_some());
    }

    #[test]
    fn test_lookup_and_collisions() {
        let mut banks = sample();
        banks.push(bank("Gnosis-Pay", "Gnosis", "Custodial", "0%", "$9"));
        let index = SiteIndex::new(&banks);

        assert_eq!(index.get("gnosis-pay").unwrap().name, "Gnosis Pay");
        assert!(index.get("missing").is_none());
        assert_eq!(index.collisions(), &["gnosis-pay"]);
    }

    #[test]
    fn test_empty() {
        let index = SiteIndex::new(&[]);

        assert_eq!(index.total(), 0);
        assert_eq!(index.non_custodial_percent(), 0);
        assert_eq!(index.nonempty_chains().count(), 0);
    }
}
