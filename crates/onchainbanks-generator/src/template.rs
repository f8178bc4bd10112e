//! Page templates.
//!
//! Each page is rendered twice: first the body template named after the page
//! kind (`home`, `bank`, `compare`, `chain`), then the `base` layout with that
//! body passed in as `content`. Placeholders are `{{ name }}`. A trailing `?`
//! (`{{ related_html? }}`) marks a section that may be missing for some banks
//! and renders as nothing when the variable is unset.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    #[error("template not found: {0}")]
    NotFound(String),

    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;

/// Variables for one render pass.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` only when `value` is present, leaving `{{ key? }}` blank otherwise.
    #[must_use]
    pub fn with_optional(
        mut self,
        key: impl Into<String>,
        value: Option<impl Into<String>>,
    ) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A named page template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Fill every placeholder from `context`.
    ///
    /// Output is built left to right and inserted values are never scanned
    /// again, so card data containing `{{` comes out literally.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let placeholder = after[..close].trim();

            match placeholder.strip_suffix('?') {
                Some(name) => out.push_str(context.get(name.trim()).unwrap_or_default()),
                None => out.push_str(
                    context
                        .get(placeholder)
                        .ok_or_else(|| TemplateError::MissingVariable(placeholder.to_string()))?,
                ),
            }

            rest = &after[close + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Templates keyed by page kind, plus the shared `base` layout.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Registry holding the built-in layout and page templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        for (name, source) in [
            ("base", BASE_TEMPLATE),
            ("home", HOME_TEMPLATE),
            ("bank", BANK_TEMPLATE),
            ("compare", COMPARE_TEMPLATE),
            ("chain", CHAIN_TEMPLATE),
        ] {
            registry.register(Template::new(name, source));
        }
        registry
    }

    /// Add `template`, replacing a built-in of the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        self.get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?
            .render(context)
    }
}

/// Shared page layout: head, navigation, footer.
pub const BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{ title }}</title>
<meta name="description" content="{{ description }}">
<link rel="canonical" href="{{ canonical_url }}">
<meta property="og:title" content="{{ title }}">
<meta property="og:description" content="{{ description }}">
<meta property="og:url" content="{{ canonical_url }}">
<meta property="og:type" content="website">
<meta property="og:site_name" content="{{ site_title }}">
<meta name="twitter:card" content="summary">
<meta name="twitter:title" content="{{ title }}">
<meta name="twitter:description" content="{{ description }}">
<link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🏦</text></svg>">
<script src="https://cdn.tailwindcss.com"></script>
{{ head_extra? }}
</head>
<body class="bg-gray-950 text-gray-300 min-h-screen">
<nav class="border-b border-gray-800 bg-gray-950/80 backdrop-blur-sm sticky top-0 z-50">
<div class="max-w-7xl mx-auto px-4 py-3 flex items-center justify-between">
  <a href="/" class="flex items-center gap-2 text-white font-bold text-lg">🏦 {{ site_title }}</a>
  <div class="flex items-center gap-4 text-sm">
    <a href="/api/banks.json" class="text-gray-400 hover:text-white transition">API</a>
    <a href="{{ review_url }}" target="_blank" class="text-lime-400 hover:text-lime-300 transition font-medium">{{ review_name }} →</a>
  </div>
</div>
</nav>
{{ content }}
<footer class="border-t border-gray-800 mt-16 py-12 text-center">
<div class="max-w-7xl mx-auto px-4">
  <p class="text-gray-500 text-sm mb-2">Powered by <a href="{{ review_url }}" class="text-lime-400 hover:text-lime-300">{{ review_name }}</a> · Full reviews at <a href="{{ review_url }}" class="text-lime-400 hover:text-lime-300">{{ review_host }}</a></p>
  <p class="text-gray-600 text-xs">© {{ year }} {{ site_title }} · Data updated {{ build_date }}</p>
  <div class="flex justify-center gap-4 mt-4 text-xs text-gray-600">
    <a href="/sitemap.xml" class="hover:text-gray-400">Sitemap</a>
    <a href="/llms.txt" class="hover:text-gray-400">llms.txt</a>
    <a href="/api/banks.json" class="hover:text-gray-400">API</a>
  </div>
</div>
</footer>
</body>
</html>
"#;

/// Home page body.
pub const HOME_TEMPLATE: &str = r#"<section class="py-16 md:py-24 text-center px-4">
  <h1 class="text-4xl md:text-6xl font-bold text-white mb-4">The Authority on<br><span class="text-transparent bg-clip-text bg-gradient-to-r from-lime-400 to-cyan-400">Onchain Banking</span></h1>
  <p class="text-lg md:text-xl text-gray-400 mb-8 max-w-2xl mx-auto">Tracking {{ bank_count }}+ onchain banks, crypto cards, and DeFi spending products</p>
  <div class="flex flex-wrap justify-center gap-6 mb-8">
    <div class="bg-gray-900 border border-gray-800 rounded-xl px-6 py-4 text-center">
      <p class="text-3xl font-bold text-white" data-stat="banks">{{ bank_count }}</p>
      <p class="text-gray-500 text-sm">Cards Tracked</p>
    </div>
    <div class="bg-gray-900 border border-gray-800 rounded-xl px-6 py-4 text-center">
      <p class="text-3xl font-bold text-white" data-stat="chains">{{ chain_count }}</p>
      <p class="text-gray-500 text-sm">Chains Supported</p>
    </div>
    <div class="bg-gray-900 border border-gray-800 rounded-xl px-6 py-4 text-center">
      <p class="text-3xl font-bold text-white" data-stat="non-custodial">{{ nc_percent }}%</p>
      <p class="text-gray-500 text-sm">Non-Custodial</p>
    </div>
  </div>
</section>

<section class="max-w-7xl mx-auto px-4 mb-16" id="featured">
  <h2 class="text-2xl font-bold text-white mb-6">Featured Onchain Banks</h2>
  <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
    {{ featured_cards }}
  </div>
</section>

<section class="max-w-7xl mx-auto px-4 mb-16" id="all-banks">
  <h2 class="text-2xl font-bold text-white mb-6">All {{ bank_count }} Onchain Banks</h2>
  <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
    {{ all_cards }}
  </div>
</section>

<section class="max-w-7xl mx-auto px-4 mb-16" id="chains">
  <h2 class="text-2xl font-bold text-white mb-6">Browse by Chain</h2>
  <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-3">
    {{ chain_links }}
  </div>
</section>

<section class="max-w-4xl mx-auto px-4 mb-16 text-center">
  <div class="bg-gradient-to-r from-lime-400/10 to-cyan-400/10 border border-lime-400/20 rounded-2xl p-8">
    <h2 class="text-2xl font-bold text-white mb-3">Looking for Full Reviews?</h2>
    <p class="text-gray-400 mb-6">{{ review_name }} provides detailed reviews, ratings, and interactive comparisons for every card.</p>
    <a href="{{ review_url }}" target="_blank" class="inline-block bg-lime-400 text-gray-900 font-bold px-8 py-3 rounded-xl hover:bg-lime-300 transition">Visit {{ review_name }} →</a>
  </div>
</section>"#;

/// Bank profile body.
pub const BANK_TEMPLATE: &str = r#"<div class="max-w-4xl mx-auto px-4 py-8">
  <nav class="text-sm text-gray-500 mb-6"><a href="/" class="hover:text-white">Home</a> → <a href="/bank/{{ slug }}/" class="text-white">{{ name }}</a></nav>

  <div class="flex items-center gap-4 mb-6">
    {{ logo_html? }}
    <div>
      <h1 class="text-3xl font-bold text-white">{{ name }} — Onchain Bank Profile</h1>
      <div class="flex gap-2 mt-1">
        <span class="text-xs px-2 py-0.5 rounded {{ category_class }}">{{ category_label }}</span>
        <span class="text-xs px-2 py-0.5 rounded bg-cyan-400/10 text-cyan-400">{{ chain }}</span>
      </div>
    </div>
  </div>

  <div class="bg-gray-900 border border-gray-800 rounded-xl overflow-hidden mb-8">
    <table class="w-full text-sm">
      <tbody>
        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500 w-40">Network</td><td class="px-4 py-3 text-white font-medium" data-field="network">{{ network }}</td></tr>
        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500">Chain</td><td class="px-4 py-3 text-cyan-400" data-field="chain">{{ chain }}</td></tr>
        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500">Custody</td><td class="px-4 py-3 {{ custody_class }}" data-field="custody">{{ custody_label }}</td></tr>
        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500">Cashback</td><td class="px-4 py-3 text-lime-400 font-semibold" data-field="cashback">{{ cashback }}</td></tr>
        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500">Cashback Token</td><td class="px-4 py-3 text-white" data-field="cashback-token">{{ cashback_token }}</td></tr>
        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500">Annual Fee</td><td class="px-4 py-3 {{ fee_class }}" data-field="annual-fee">{{ annual_fee }}</td></tr>
        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500">FX Fee</td><td class="px-4 py-3 text-white" data-field="fx-fee">{{ fx_fee }}</td></tr>
        <tr><td class="px-4 py-3 text-gray-500">Regions</td><td class="px-4 py-3 text-white" data-field="regions">{{ regions }}</td></tr>
      </tbody>
    </table>
  </div>

  <div class="prose prose-invert max-w-none mb-8">
    <h2 class="text-xl font-bold text-white">Overview</h2>
    <p>{{ overview_custody }}</p>
    <p>{{ overview_fees }}</p>
    <p>{{ overview_regions }}</p>
  </div>
{{ features_html? }}
  <div class="mb-8">
    <h2 class="text-xl font-bold text-white mb-4">Frequently Asked Questions</h2>
    {{ faq_html }}
  </div>

  <div class="bg-gradient-to-r from-lime-400/10 to-cyan-400/10 border border-lime-400/20 rounded-xl p-6 text-center mb-8">
    <h2 class="text-xl font-bold text-white mb-2">Read the Full Review</h2>
    <p class="text-gray-400 mb-4">Get detailed analysis, user ratings, and comparisons on {{ review_name }}.</p>
    <a href="{{ spendbase_url }}" target="_blank" class="inline-block bg-lime-400 text-gray-900 font-bold px-6 py-2.5 rounded-xl hover:bg-lime-300 transition">Read full review on {{ review_name }} →</a>
  </div>
{{ related_html? }}
</div>"#;

/// Head-to-head comparison body.
pub const COMPARE_TEMPLATE: &str = r#"<div class="max-w-4xl mx-auto px-4 py-8">
  <nav class="text-sm text-gray-500 mb-6"><a href="/" class="hover:text-white">Home</a> → <span class="text-white">{{ first_name }} vs {{ second_name }}</span></nav>

  <h1 class="text-3xl font-bold text-white mb-8">{{ first_name }} vs {{ second_name }} — Which Onchain Bank is Better?</h1>

  <div class="bg-gray-900 border border-gray-800 rounded-xl overflow-hidden mb-8">
    <table class="w-full text-sm">
      <thead>
        <tr class="border-b border-gray-700">
          <th class="px-4 py-3 text-gray-500 text-left w-32">Spec</th>
          <th class="px-4 py-3 text-white text-left">{{ first_name }}</th>
          <th class="px-4 py-3 text-white text-left">{{ second_name }}</th>
        </tr>
      </thead>
      <tbody>
{{ rows }}
      </tbody>
    </table>
  </div>

  <div class="bg-gradient-to-r from-lime-400/10 to-cyan-400/10 border border-lime-400/20 rounded-xl p-6 mb-8">
    <h2 class="text-xl font-bold text-white mb-2">🏆 Verdict: {{ verdict_title }}</h2>
    <p class="text-gray-400">{{ verdict_text }}</p>
  </div>

  <div class="mb-8">
    <h2 class="text-xl font-bold text-white mb-4">FAQ</h2>
    {{ faq_html }}
  </div>

  <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 mb-8">
    <a href="{{ first_review_url }}" target="_blank" class="block bg-gray-900 border border-gray-800 rounded-xl p-4 text-center hover:border-lime-400/50 transition">
      <p class="text-white font-semibold mb-1">{{ first_name }} Full Review</p>
      <p class="text-lime-400 text-sm">Read on {{ review_name }} →</p>
    </a>
    <a href="{{ second_review_url }}" target="_blank" class="block bg-gray-900 border border-gray-800 rounded-xl p-4 text-center hover:border-lime-400/50 transition">
      <p class="text-white font-semibold mb-1">{{ second_name }} Full Review</p>
      <p class="text-lime-400 text-sm">Read on {{ review_name }} →</p>
    </a>
  </div>

  <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
    <a href="/bank/{{ first_slug }}/" class="bg-gray-900 border border-gray-800 rounded-xl p-4 hover:border-gray-600 transition">
      <p class="text-white font-semibold">{{ first_name }} Profile →</p>
    </a>
    <a href="/bank/{{ second_slug }}/" class="bg-gray-900 border border-gray-800 rounded-xl p-4 hover:border-gray-600 transition">
      <p class="text-white font-semibold">{{ second_name }} Profile →</p>
    </a>
  </div>
</div>"#;

/// Chain listing body.
pub const CHAIN_TEMPLATE: &str = r#"<div class="max-w-7xl mx-auto px-4 py-8">
  <nav class="text-sm text-gray-500 mb-6"><a href="/" class="hover:text-white">Home</a> → <span class="text-white">{{ chain_name }} Cards</span></nav>

  <h1 class="text-3xl font-bold text-white mb-4">{{ chain_name }} Onchain Banks &amp; Crypto Cards</h1>
  <p class="text-gray-400 mb-8 max-w-3xl">{{ chain_description }}</p>

  <p class="text-gray-500 mb-6" data-stat="members">{{ member_summary }}</p>

  <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
    {{ bank_cards }}
  </div>
</div>"#;
