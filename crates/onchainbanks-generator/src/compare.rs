//! Head-to-head comparison pages.

use onchainbanks_core::{
    Bank,
    bank::{NON_CUSTODIAL, ZERO_FEE},
};

use crate::html::{Faq, PageMeta, PageRenderer, Result, faq_html, faq_schema};

/// Outcome of comparing one field of two banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
    Tie,
}

impl Winner {
    fn from_flags(first: bool, second: bool) -> Self {
        match (first, second) {
            (true, false) => Self::First,
            (false, true) => Self::Second,
            _ => Self::Tie,
        }
    }

    /// The same outcome seen from the other side.
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
            Self::Tie => Self::Tie,
        }
    }

    /// Table cell classes for the given side.
    fn cell_class(self, side: Self) -> &'static str {
        if self == side {
            "text-lime-400 font-bold"
        } else if self == Self::Tie {
            "text-white"
        } else {
            "text-gray-500"
        }
    }
}

/// Leading number of a cashback string, e.g. `"up to 5%"` → 0, `" 2.5% BTC"` → 2.5.
///
/// Mirrors JavaScript `parseFloat`: leading whitespace, optional sign, digits,
/// optional fraction and exponent. Anything unparseable is 0.
#[must_use]
pub fn cashback_value(cashback: &str) -> f64 {
    let s = cashback.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Higher leading cashback number wins.
#[must_use]
pub fn cashback_winner(first: &Bank, second: &Bank) -> Winner {
    let a = cashback_value(&first.cashback);
    let b = cashback_value(&second.cashback);
    Winner::from_flags(a > b, b > a)
}

/// A `$0` annual fee wins over any other value.
#[must_use]
pub fn fee_winner(first: &Bank, second: &Bank) -> Winner {
    Winner::from_flags(first.annual_fee == ZERO_FEE, second.annual_fee == ZERO_FEE)
}

/// Non-custodial wins over any other custody model.
#[must_use]
pub fn custody_winner(first: &Bank, second: &Bank) -> Winner {
    Winner::from_flags(first.custody == NON_CUSTODIAL, second.custody == NON_CUSTODIAL)
}

/// A resolved pair with its per-field outcomes.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    pub first: &'a Bank,
    pub second: &'a Bank,
    pub cashback: Winner,
    pub fee: Winner,
    pub custody: Winner,
}

impl<'a> Comparison<'a> {
    #[must_use]
    pub fn new(first: &'a Bank, second: &'a Bank) -> Self {
        Self {
            first,
            second,
            cashback: cashback_winner(first, second),
            fee: fee_winner(first, second),
            custody: custody_winner(first, second),
        }
    }

    /// Page path: `/compare/<first>-vs-<second>/`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/compare/{}-vs-{}/", self.first.slug, self.second.slug)
    }

    /// Field wins for (first, second).
    #[must_use]
    pub fn wins(&self) -> (usize, usize) {
        let fields = [self.cashback, self.fee, self.custody];
        let count = |side| fields.iter().filter(|w| **w == side).count();
        (count(Winner::First), count(Winner::Second))
    }

    /// Strict majority of field wins, otherwise a tie.
    #[must_use]
    pub fn overall(&self) -> Winner {
        let (a, b) = self.wins();
        Winner::from_flags(a > b, b > a)
    }

    /// Verdict heading.
    #[must_use]
    pub fn verdict_title(&self) -> String {
        match self.overall() {
            Winner::First => self.first.name.clone(),
            Winner::Second => self.second.name.clone(),
            Winner::Tie => "Both are strong choices".to_string(),
        }
    }

    /// Verdict sentence.
    #[must_use]
    pub fn verdict_text(&self) -> String {
        match self.overall() {
            Winner::First => format!("{} edges ahead with better specs overall.", self.first.name),
            Winner::Second => {
                format!("{} edges ahead with better specs overall.", self.second.name)
            }
            Winner::Tie => {
                "Both cards are competitive — your choice depends on your priorities.".to_string()
            }
        }
    }

    /// Cashback, custody and fee questions.
    #[must_use]
    pub fn faqs(&self) -> Vec<Faq> {
        let (a, b) = (self.first, self.second);

        let cashback = match self.cashback {
            Winner::First => format!("{} offers {} vs {}'s {}.", a.name, a.cashback, b.name, b.cashback),
            Winner::Second => format!("{} offers {} vs {}'s {}.", b.name, b.cashback, a.name, a.cashback),
            Winner::Tie => "Both offer comparable cashback rates.".to_string(),
        };

        vec![
            Faq::new(
                format!("Which has better cashback: {} or {}?", a.name, b.name),
                cashback,
            ),
            Faq::new(
                format!("Is {} or {} self-custody?", a.name, b.name),
                format!("{} is {}, while {} is {}.", a.name, a.custody, b.name, b.custody),
            ),
            Faq::new(
                "Which card has lower fees?",
                format!(
                    "{} charges {} annually, while {} charges {}.",
                    a.name, a.annual_fee, b.name, b.annual_fee
                ),
            ),
        ]
    }

    fn rows_html(&self) -> String {
        let (a, b) = (self.first, self.second);

        let plain = |label: &str, value_class: &str, first: &str, second: &str| {
            format!(
                r#"        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500">{label}</td><td class="px-4 py-3 {value_class}">{first}</td><td class="px-4 py-3 {value_class}">{second}</td></tr>"#
            )
        };
        let scored = |label: &str, field: &str, winner: Winner, first: &str, second: &str| {
            format!(
                r#"        <tr class="border-b border-gray-800"><td class="px-4 py-3 text-gray-500">{label}</td><td class="px-4 py-3 {}" data-field="{field}">{first}</td><td class="px-4 py-3 {}" data-field="{field}">{second}</td></tr>"#,
                winner.cell_class(Winner::First),
                winner.cell_class(Winner::Second),
            )
        };

        [
            plain("Network", "text-white", &a.network, &b.network),
            plain("Chain", "text-cyan-400", &a.chain, &b.chain),
            scored("Custody", "custody", self.custody, &a.custody, &b.custody),
            scored("Cashback", "cashback", self.cashback, &a.cashback, &b.cashback),
            scored("Annual Fee", "annual-fee", self.fee, &a.annual_fee, &b.annual_fee),
            plain("FX Fee", "text-white", &a.fx_fee, &b.fx_fee),
            format!(
                r#"        <tr><td class="px-4 py-3 text-gray-500">Regions</td><td class="px-4 py-3 text-white">{}</td><td class="px-4 py-3 text-white">{}</td></tr>"#,
                a.region_labels(),
                b.region_labels()
            ),
        ]
        .join("\n")
    }
}

impl PageRenderer {
    /// Render a head-to-head comparison page.
    pub fn render_comparison(&self, comparison: &Comparison<'_>) -> Result<String> {
        let (a, b) = (comparison.first, comparison.second);
        let faqs = comparison.faqs();

        let meta = PageMeta {
            title: format!(
                "{} vs {} — Which Onchain Bank is Better? | {}",
                a.name, b.name, self.config.site.title
            ),
            description: format!(
                "Compare {} and {}: cashback, fees, custody, chain. Side-by-side comparison of two top onchain banks.",
                a.name, b.name
            ),
            path: comparison.path(),
            head_extra: Some(faq_schema(&faqs)?),
        };

        let ctx = self
            .site_context()
            .with_var("first_name", &a.name)
            .with_var("second_name", &b.name)
            .with_var("first_slug", &a.slug)
            .with_var("second_slug", &b.slug)
            .with_var("first_review_url", &a.spendbase_url)
            .with_var("second_review_url", &b.spendbase_url)
            .with_var("rows", comparison.rows_html())
            .with_var("verdict_title", comparison.verdict_title())
            .with_var("verdict_text", comparison.verdict_text())
            .with_var("faq_html", faq_html(&faqs));

        self.render_document(&meta, "compare", &ctx)
    }
}
