//! Sitemap generation.
//!
//! Generates the XML sitemap listing every page of the build.

use std::io::Write;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapUrl {
    /// Absolute URL.
    pub loc: String,

    /// Last modification date.
    pub lastmod: NaiveDate,
}

/// Sitemap generator. URLs are emitted in insertion order, duplicates included.
#[derive(Debug)]
pub struct SitemapGenerator {
    base_url: String,
    lastmod: NaiveDate,
    urls: Vec<SitemapUrl>,
}

impl SitemapGenerator {
    /// Create an empty sitemap for `base_url`, stamping every entry with `lastmod`.
    #[must_use]
    pub fn new(base_url: &str, lastmod: NaiveDate) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            lastmod,
            urls: Vec::new(),
        }
    }

    /// Add a site-relative path such as `/bank/fold/`.
    pub fn add_path(&mut self, path: &str) {
        let loc = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        self.urls.push(SitemapUrl {
            loc,
            lastmod: self.lastmod,
        });
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether no entries have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Generate sitemap XML.
    #[must_use]
    pub fn generate(&self) -> String {
        debug!(count = self.urls.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for url in &self.urls {
            xml.push_str(&url_to_xml(url));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.generate().as_bytes())?;
        Ok(())
    }
}

fn url_to_xml(url: &SitemapUrl) -> String {
    format!(
        "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>\n",
        escape_xml(&url.loc),
        url.lastmod.format("%Y-%m-%d")
    )
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
