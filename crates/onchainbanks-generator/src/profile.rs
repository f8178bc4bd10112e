//! Bank profile pages.

use onchainbanks_core::{
    Bank, Category,
    bank::{CUSTODIAL, NON_CUSTODIAL, custody_label},
};
use serde_json::json;

use crate::html::{
    Faq, PageMeta, PageRenderer, Result, bank_cards_html, bank_path, faq_html, faq_schema,
    json_ld,
};

/// Most related banks shown on a profile.
pub const MAX_RELATED: usize = 6;

/// Other banks sharing the chain or category, in list order.
#[must_use]
pub fn related_banks<'a>(bank: &Bank, banks: &'a [Bank]) -> Vec<&'a Bank> {
    banks
        .iter()
        .filter(|b| b.slug != bank.slug && (b.chain == bank.chain || b.category == bank.category))
        .take(MAX_RELATED)
        .collect()
}

fn custody_article(custody: &str) -> &'static str {
    match custody {
        NON_CUSTODIAL => "a non-custodial",
        CUSTODIAL => "a custodial",
        _ => "an",
    }
}

fn cashback_token_clause(bank: &Bank) -> String {
    if bank.has_cashback_token() {
        format!(" paid in {}", bank.cashback_token)
    } else {
        String::new()
    }
}

/// The three overview paragraphs.
#[must_use]
pub fn overview(bank: &Bank) -> [String; 3] {
    let custody = format!(
        "{} is {} onchain banking product operating on {}. It offers a {} card with {} cashback{}.",
        bank.name,
        custody_article(&bank.custody),
        bank.chain,
        bank.network,
        bank.cashback,
        cashback_token_clause(bank)
    );

    let fee = if bank.is_free() {
        "The card has no annual fee, making it accessible to all users.".to_string()
    } else {
        format!("The annual fee is {}.", bank.annual_fee)
    };
    let fees = if bank.features.is_empty() {
        fee
    } else {
        format!("Key features include {}. {fee}", bank.features.join(", "))
    };

    let availability = if bank.is_global() {
        format!("{} is available globally", bank.name)
    } else {
        format!("{} is available in {}", bank.name, bank.region_labels())
    };
    let regions = format!(
        "{availability}, supporting {} payments at millions of merchants worldwide.",
        bank.network
    );

    [custody, fees, regions]
}

/// Self-custody, cashback, blockchain and annual fee questions.
#[must_use]
pub fn faqs(bank: &Bank) -> Vec<Faq> {
    let name = &bank.name;

    let custody = if bank.is_non_custodial() {
        format!(
            "Yes, {name} is non-custodial — you maintain control of your private keys and funds at all times."
        )
    } else {
        format!(
            "{name} uses a {} model, meaning the platform manages your funds on your behalf.",
            bank.custody.to_lowercase()
        )
    };

    let fee = if bank.is_free() {
        format!("No, {name} has no annual fee.")
    } else {
        format!("The annual fee for {name} is {}.", bank.annual_fee)
    };

    vec![
        Faq::new(format!("Is {name} self-custody?"), custody),
        Faq::new(
            format!("What cashback does {name} offer?"),
            format!(
                "{name} offers {} cashback{}.",
                bank.cashback,
                cashback_token_clause(bank)
            ),
        ),
        Faq::new(
            format!("What blockchain does {name} use?"),
            format!("{name} operates on {}.", bank.chain),
        ),
        Faq::new(format!("Is there an annual fee for {name}?"), fee),
    ]
}

fn category_class(category: Category) -> &'static str {
    match category {
        Category::Onchain => "bg-purple-400/10 text-purple-400",
        Category::CryptoNative => "bg-lime-400/10 text-lime-400",
        _ => "bg-gray-400/10 text-gray-400",
    }
}

impl PageRenderer {
    /// Render the profile page for `bank`. `banks` is the full list, used for
    /// the related section and the page description.
    pub fn render_profile(&self, bank: &Bank, banks: &[Bank]) -> Result<String> {
        let path = bank_path(&bank.slug);
        let [overview_custody, overview_fees, overview_regions] = overview(bank);
        let faqs = faqs(bank);

        let product = json_ld(&json!({
            "@context": "https://schema.org",
            "@type": "FinancialProduct",
            "name": bank.name,
            "description": overview_custody,
            "url": self.config.url_for(&path),
            "provider": { "@type": "Organization", "name": bank.name, "url": bank.website }
        }))?;

        let meta = PageMeta {
            title: format!(
                "{} — Onchain Bank Profile | {}",
                bank.name, self.config.site.title
            ),
            description: format!(
                "{} onchain bank profile: {} card on {}, {} cashback, {}. Compare with {}+ crypto cards.",
                bank.name,
                bank.network,
                bank.chain,
                bank.cashback,
                bank.custody,
                banks.len()
            ),
            head_extra: Some(format!("{}\n{product}", faq_schema(&faqs)?)),
            path,
        };

        let mut ctx = self
            .site_context()
            .with_var("slug", &bank.slug)
            .with_var("name", &bank.name)
            .with_var("category_class", category_class(bank.category))
            .with_var("category_label", bank.category.label())
            .with_var("chain", &bank.chain)
            .with_var("network", &bank.network)
            .with_var(
                "custody_class",
                if bank.is_non_custodial() {
                    "text-lime-400"
                } else {
                    "text-white"
                },
            )
            .with_var("custody_label", custody_label(&bank.custody))
            .with_var("cashback", &bank.cashback)
            .with_var("cashback_token", &bank.cashback_token)
            .with_var(
                "fee_class",
                if bank.is_free() {
                    "text-green-400"
                } else {
                    "text-white"
                },
            )
            .with_var("annual_fee", &bank.annual_fee)
            .with_var("fx_fee", &bank.fx_fee)
            .with_var("regions", bank.region_labels())
            .with_var("overview_custody", overview_custody)
            .with_var("overview_fees", overview_fees)
            .with_var("overview_regions", overview_regions)
            .with_var("faq_html", faq_html(&faqs))
            .with_var("spendbase_url", &bank.spendbase_url);

        if !bank.logo.is_empty() {
            ctx.insert(
                "logo_html",
                format!(
                    r#"<img src="{}" alt="{}" class="w-12 h-12 rounded-xl object-contain" loading="lazy">"#,
                    bank.logo, bank.name
                ),
            );
        }

        if !bank.features.is_empty() {
            let items = bank
                .features
                .iter()
                .map(|f| {
                    format!(
                        r#"      <div class="bg-gray-900 border border-gray-800 rounded-lg px-4 py-3 text-sm">✦ {f}</div>"#
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            ctx.insert(
                "features_html",
                format!(
                    r#"  <div class="mb-8" id="features">
    <h2 class="text-xl font-bold text-white mb-4">Key Features</h2>
    <div class="grid grid-cols-2 gap-3">
{items}
    </div>
  </div>
"#
                ),
            );
        }

        let related = related_banks(bank, banks);
        if !related.is_empty() {
            ctx.insert(
                "related_html",
                format!(
                    r#"  <div id="related">
    <h2 class="text-xl font-bold text-white mb-4">Related Banks</h2>
    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
      {}
    </div>
  </div>
"#,
                    bank_cards_html(related)
                ),
            );
        }

        self.render_document(&meta, "bank", &ctx)
    }
}

#[cfg(test)]
mod tests {
    use onchainbanks_core::{Config, RawCard};

    use super::*;
    use crate::html::test_support::{bank, date};

    #[test]
    fn test_overview_non_custodial_global() {
        let mut b = bank("Gnosis Pay", "Gnosis", "Non-Custodial", "5%", "$0");
        b.cashback_token = "GNO".to_string();
        let [first, second, third] = overview(&b);

        assert_eq!(
            first,
            "Gnosis Pay is a non-custodial onchain banking product operating on Gnosis. It offers a Visa card with 5% cashback paid in GNO."
        );
        assert_eq!(
            second,
            "The card has no annual fee, making it accessible to all users."
        );
        assert_eq!(
            third,
            "Gnosis Pay is available globally, supporting Visa payments at millions of merchants worldwide."
        );
    }

    #[test]
    fn test_overview_articles_and_regions() {
        let mut b = bank("Nexo", "Multi-chain", "Hybrid", "2%", "$99");
        b.cashback_token = "N/A".to_string();
        b.features = vec!["Credit line".to_string(), "Earn".to_string()];
        b.regions = vec!["europe".to_string(), "latam".to_string()];
        let [first, second, third] = overview(&b);

        assert!(first.starts_with("Nexo is an onchain banking product"));
        assert!(first.ends_with("with 2% cashback."));
        assert_eq!(
            second,
            "Key features include Credit line, Earn. The annual fee is $99."
        );
        assert!(third.starts_with("Nexo is available in 🇪🇺 Europe, 🌎 Latin America, supporting"));

        let c = bank("Coinbase", "Base", "Custodial", "4%", "$0");
        assert!(overview(&c)[0].starts_with("Coinbase is a custodial onchain"));
    }

    #[test]
    fn test_faqs() {
        let b = bank("Coinbase", "Base", "Custodial", "4%", "$0");
        let faqs = faqs(&b);

        assert_eq!(faqs.len(), 4);
        assert_eq!(faqs[0].question, "Is Coinbase self-custody?");
        assert_eq!(
            faqs[0].answer,
            "Coinbase uses a custodial model, meaning the platform manages your funds on your behalf."
        );
        assert_eq!(faqs[1].answer, "Coinbase offers 4% cashback.");
        assert_eq!(faqs[2].answer, "Coinbase operates on Base.");
        assert_eq!(faqs[3].answer, "No, Coinbase has no annual fee.");
    }

    #[test]
    fn test_related_banks() {
        let mut banks = vec![bank("Target", "Solana", "Custodial", "1%", "$0")];
        for i in 0..8 {
            banks.push(bank(&format!("Sol {i}"), "Solana", "Custodial", "1%", "$0"));
        }
        let mut other = bank("Other", "Base", "Custodial", "1%", "$0");
        other.category = Category::Exchange;
        banks.push(other);

        let related = related_banks(&banks[0], &banks);
        assert_eq!(related.len(), MAX_RELATED);
        assert_eq!(related[0].name, "Sol 0");
        assert!(related.iter().all(|b| b.slug != "target"));

        // shares only the category
        let mut lone = bank("Lone", "Cardano", "Custodial", "1%", "$0");
        lone.category = Category::Exchange;
        let related = related_banks(&lone, &banks);
        let names: Vec<_> = related.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Other"]);
    }

    #[test]
    fn test_render_profile() {
        let renderer = PageRenderer::new(Config::default(), date());
        let banks = vec![
            Bank::from_raw(
                RawCard {
                    name: "Ether.fi Cash".to_string(),
                    chain: Some("Scroll".to_string()),
                    custody: Some("Non-Custodial".to_string()),
                    cashback: Some("Up to 3%".to_string()),
                    features: Some(vec!["Borrow against ETH".to_string()]),
                    logo: Some("https://img.example.com/etherfi.png".to_string()),
                    ..RawCard::default()
                },
                "https://spendbase.cards",
            ),
            bank("Scroll Pay", "Scroll", "Custodial", "1%", "$0"),
        ];

        let html = renderer.render_profile(&banks[0], &banks).unwrap();

        assert!(html.contains("<title>Ether.fi Cash — Onchain Bank Profile | OnchainBanks.io</title>"));
        assert!(html.contains(r#"data-field="cashback">Up to 3%</td>"#));
        assert!(html.contains("🔐 Non-Custodial"));
        assert!(html.contains(r#"<img src="https://img.example.com/etherfi.png""#));
        assert!(html.contains("✦ Borrow against ETH"));
        assert!(html.contains("Related Banks"));
        assert!(html.contains(r#"href="/bank/scroll-pay/""#));
        assert!(html.contains(r#""@type":"FinancialProduct""#));
        assert!(html.contains(r#""url":"https://onchainbanks.io/bank/etherfi-cash/""#));
        assert!(html.contains(r#""@type":"FAQPage""#));
        assert!(html.contains(r#"href="https://spendbase.cards/card/etherfi-cash/""#));
    }

    #[test]
    fn test_render_profile_without_optional_sections() {
        let renderer = PageRenderer::new(Config::default(), date());
        let mut only = bank("Solo", "Cardano", "TBD", "TBD", "TBD");
        only.category = Category::Neobank;
        let banks = vec![only];

        let html = renderer.render_profile(&banks[0], &banks).unwrap();

        assert!(!html.contains("Key Features"));
        assert!(!html.contains("Related Banks"));
        assert!(!html.contains("<img src="));
        assert!(html.contains("❓ TBD"));
        assert!(html.contains("bg-gray-400/10 text-gray-400"));
        assert!(html.contains("Solo is available globally"));
    }
}
