//! Per-chain listing pages.

use crate::{
    html::{PageMeta, PageRenderer, Result, bank_cards_html, card_count},
    index::ChainGroup,
};

/// Listing path for a chain key.
#[must_use]
pub fn chain_path(key: &str) -> String {
    format!("/chain/{key}/")
}

impl PageRenderer {
    /// Render the listing page for one chain. Callers skip empty groups.
    pub fn render_chain(&self, group: &ChainGroup<'_>) -> Result<String> {
        let chain = group.chain;
        let count = group.banks.len();

        let meta = PageMeta {
            title: format!(
                "{} Onchain Banks & Crypto Cards | {}",
                chain.name, self.config.site.title
            ),
            description: format!(
                "{count} onchain banks and crypto cards on {}. Compare cashback, fees, and custody options.",
                chain.name
            ),
            path: chain_path(chain.key),
            head_extra: None,
        };

        let ctx = self
            .site_context()
            .with_var("chain_name", chain.name)
            .with_var("chain_description", chain.description)
            .with_var("member_summary", format!("{} on {}", card_count(count), chain.name))
            .with_var("bank_cards", bank_cards_html(group.banks.iter().copied()));

        self.render_document(&meta, "chain", &ctx)
    }
}
