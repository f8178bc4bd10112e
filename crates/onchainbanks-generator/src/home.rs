//! Home page.

use onchainbanks_core::Bank;
use serde_json::json;
use tracing::debug;

use crate::{
    html::{PageMeta, PageRenderer, Result, bank_cards_html, card_count, json_ld},
    index::SiteIndex,
    listing::chain_path,
};

/// Resolve featured slugs in order, dropping any that match no bank.
#[must_use]
pub fn featured_banks<'a>(index: &SiteIndex<'a>, slugs: &[String]) -> Vec<&'a Bank> {
    slugs
        .iter()
        .filter_map(|slug| {
            let bank = index.get(slug);
            if bank.is_none() {
                debug!(slug, "featured slug does not resolve, skipping");
            }
            bank
        })
        .collect()
}

fn chain_links_html(index: &SiteIndex<'_>) -> String {
    index
        .nonempty_chains()
        .map(|group| {
            format!(
                r#"<a href="{}" class="bg-gray-900 border border-gray-800 rounded-lg px-4 py-3 hover:border-cyan-500/50 transition text-center">
      <p class="text-white font-semibold">{}</p>
      <p class="text-cyan-400 text-sm">{}</p>
    </a>"#,
                chain_path(group.chain.key),
                group.chain.name,
                card_count(group.banks.len())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl PageRenderer {
    /// Render the home page.
    pub fn render_home(&self, index: &SiteIndex<'_>) -> Result<String> {
        let site = &self.config.site;
        let total = index.total();

        let website = json_ld(&json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": site.title,
            "url": self.config.base_url(),
            "description": site.description
        }))?;

        let meta = PageMeta {
            title: format!("{} — The Authority on Onchain Banking", site.title),
            description: format!(
                "Tracking {total}+ onchain banks, crypto cards, and DeFi spending products. Compare cards by chain, custody, cashback, and more."
            ),
            path: "/".to_string(),
            head_extra: Some(website),
        };

        let featured = featured_banks(index, &self.config.curation.featured);

        let ctx = self
            .site_context()
            .with_var("bank_count", total.to_string())
            .with_var("chain_count", index.unique_chains().to_string())
            .with_var("nc_percent", index.non_custodial_percent().to_string())
            .with_var("featured_cards", bank_cards_html(featured))
            .with_var("all_cards", bank_cards_html(index.banks()))
            .with_var("chain_links", chain_links_html(index));

        self.render_document(&meta, "home", &ctx)
    }
}

#[cfg(test)]
mod tests {
    use onchainbanks_core::Config;

    use super::*;
    use crate::html::test_support::{bank, date};

    fn sample() -> Vec<Bank> {
        vec![
            bank("Gnosis Pay", "Gnosis", "Non-Custodial", "5%", "$0"),
            bank("Phantom Card", "Solana", "Non-Custodial", "2%", "$0"),
            bank("Solflare", "Solana", "Custodial", "1%", "$0"),
        ]
    }

    #[test]
    fn test_featured_banks_keeps_order_and_drops_unknown() {
        let banks = sample();
        let index = SiteIndex::new(&banks);
        let slugs = vec![
            "phantom-card".to_string(),
            "missing".to_string(),
            "gnosis-pay".to_string(),
        ];

        let featured = featured_banks(&index, &slugs);
        let names: Vec<_> = featured.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Phantom Card", "Gnosis Pay"]);
    }

    #[test]
    fn test_render_home() {
        let mut config = Config::default();
        config.curation.featured = vec!["solflare".to_string()];
        let renderer = PageRenderer::new(config, date());
        let banks = sample();
        let index = SiteIndex::new(&banks);

        let html = renderer.render_home(&index).unwrap();

        assert!(html.contains("<title>OnchainBanks.io — The Authority on Onchain Banking</title>"));
        assert!(html.contains(r#"data-stat="banks">3</p>"#));
        assert!(html.contains(r#"data-stat="chains">2</p>"#));
        assert!(html.contains(r#"data-stat="non-custodial">67%</p>"#));
        assert!(html.contains(r#""@type":"WebSite""#));
        assert!(html.contains(r#""url":"https://onchainbanks.io""#));
        assert!(html.contains(r#"href="/chain/solana/""#));
        assert!(html.contains("2 cards"));
        assert!(html.contains("1 card</p>"));
        assert!(!html.contains(r#"href="/chain/base/""#));
        assert_eq!(html.matches(r#"href="/bank/solflare/""#).count(), 2);
    }
}
