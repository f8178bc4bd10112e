//! Shared HTML rendering: the page renderer, layout wrapping and reusable fragments.
//!
//! The per-page-kind renderers live in [`crate::home`], [`crate::profile`],
//! [`crate::compare`] and [`crate::listing`] as further `impl PageRenderer` blocks.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use onchainbanks_core::{Bank, Category, Config};
use serde_json::{Value, json};
use thiserror::Error;

use crate::template::{Template, TemplateContext, TemplateError, TemplateRegistry};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Structured-data encoding error.
    #[error("JSON-LD error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Document-level metadata for one page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    /// `<title>` text.
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Site-relative URL path, e.g. `/bank/fold/`.
    pub path: String,

    /// Raw markup appended to `<head>` (JSON-LD blocks).
    pub head_extra: Option<String>,
}

/// A question/answer pair rendered in a FAQ section and as FAQPage JSON-LD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Renders every page kind for one build.
#[derive(Debug)]
pub struct PageRenderer {
    pub(crate) templates: TemplateRegistry,
    pub(crate) config: Config,
    pub(crate) build_date: NaiveDate,
}

impl PageRenderer {
    /// Create a renderer with the built-in templates.
    #[must_use]
    pub fn new(config: Config, build_date: NaiveDate) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
            build_date,
        }
    }

    /// Register a custom template, replacing a built-in one of the same name.
    pub fn register_template(&mut self, template: Template) {
        self.templates.register(template);
    }

    /// Render `body_template` with `ctx` and wrap it in the base layout.
    pub(crate) fn render_document(
        &self,
        meta: &PageMeta,
        body_template: &str,
        ctx: &TemplateContext,
    ) -> Result<String> {
        let inner_html = self.templates.render(body_template, ctx)?;
        let base_ctx = self.base_context(meta, &inner_html);
        Ok(self.templates.render("base", &base_ctx)?)
    }

    /// Context variables shared by every page and its body template.
    pub(crate) fn site_context(&self) -> TemplateContext {
        let site = &self.config.site;
        TemplateContext::new()
            .with_var("site_title", &site.title)
            .with_var("review_url", &site.review_url)
            .with_var("review_name", &site.review_name)
    }

    fn base_context(&self, meta: &PageMeta, inner_html: &str) -> TemplateContext {
        self.site_context()
            .with_var("title", &meta.title)
            .with_var("description", &meta.description)
            .with_var("canonical_url", self.config.url_for(&meta.path))
            .with_var("review_host", self.config.review_host())
            .with_var("content", inner_html)
            .with_var("year", self.build_date.year().to_string())
            .with_var("build_date", self.build_date.to_string())
            .with_optional("head_extra", meta.head_extra.as_deref())
    }
}

/// Path of the `index.html` file for a site-relative URL path.
#[must_use]
pub fn output_path(output_dir: &Path, url_path: &str) -> PathBuf {
    let relative = url_path.trim_matches('/');

    if relative.is_empty() {
        output_dir.join("index.html")
    } else {
        output_dir.join(relative).join("index.html")
    }
}

/// Profile URL path for a bank.
#[must_use]
pub fn bank_path(slug: &str) -> String {
    format!("/bank/{slug}/")
}

/// Wrap a JSON value in an `application/ld+json` script tag.
pub fn json_ld(value: &Value) -> Result<String> {
    Ok(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        serde_json::to_string(value)?
    ))
}

/// FAQPage structured data for a list of questions.
pub fn faq_schema(faqs: &[Faq]) -> Result<String> {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|f| {
            json!({
                "@type": "Question",
                "name": f.question,
                "acceptedAnswer": { "@type": "Answer", "text": f.answer }
            })
        })
        .collect();

    json_ld(&json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities
    }))
}

/// FAQ section markup.
#[must_use]
pub fn faq_html(faqs: &[Faq]) -> String {
    faqs.iter()
        .map(|f| {
            format!(
                r#"<div class="mb-4 bg-gray-900 border border-gray-800 rounded-lg p-4">
      <h3 class="text-white font-semibold mb-2">{}</h3>
      <p class="text-gray-400 text-sm">{}</p>
    </div>"#,
                f.question, f.answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Badge colours for a category on bank cards.
fn card_category_class(category: Category) -> &'static str {
    match category {
        Category::CryptoNative => "text-lime-400 bg-lime-400/10",
        Category::Onchain => "text-purple-400 bg-purple-400/10",
        Category::Exchange => "text-blue-400 bg-blue-400/10",
        Category::Fintech | Category::Neobank => "text-gray-400 bg-gray-400/10",
    }
}

/// Summary card linking to a bank profile, used in every grid.
#[must_use]
pub fn bank_card_html(bank: &Bank) -> String {
    let logo = if bank.logo.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img src="{}" alt="{}" class="w-8 h-8 rounded-lg object-contain" loading="lazy" onerror="this.style.display='none'">"#,
            bank.logo, bank.name
        )
    };

    format!(
        r#"<a href="{path}" class="block bg-gray-900 border border-gray-800 rounded-xl p-4 hover:border-gray-600 transition group">
  <div class="flex items-center gap-3 mb-3">
    {logo}
    <div>
      <h3 class="text-white font-semibold group-hover:text-lime-400 transition">{name}</h3>
      <span class="text-xs {class} px-1.5 py-0.5 rounded">{category}</span>
    </div>
  </div>
  <div class="grid grid-cols-2 gap-2 text-xs">
    <div><span class="text-gray-500">Network</span><p class="text-white">{network}</p></div>
    <div><span class="text-gray-500">Chain</span><p class="text-cyan-400">{chain}</p></div>
    <div><span class="text-gray-500">Cashback</span><p class="text-lime-400 font-semibold">{cashback}</p></div>
    <div><span class="text-gray-500">Fee</span><p class="text-white">{fee}</p></div>
  </div>
</a>"#,
        path = bank_path(&bank.slug),
        name = bank.name,
        class = card_category_class(bank.category),
        category = bank.category.label(),
        network = bank.network,
        chain = bank.chain,
        cashback = bank.cashback,
        fee = bank.annual_fee,
    )
}

/// Cards for a list of banks, newline separated.
#[must_use]
pub fn bank_cards_html<'a>(banks: impl IntoIterator<Item = &'a Bank>) -> String {
    banks
        .into_iter()
        .map(bank_card_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `"1 card"` / `"3 cards"`.
#[must_use]
pub fn card_count(count: usize) -> String {
    if count == 1 {
        "1 card".to_string()
    } else {
        format!("{count} cards")
    }
}
