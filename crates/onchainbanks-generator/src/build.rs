//! Build orchestration.
//!
//! Coordinates the full site build: index the banks, render every page kind,
//! then emit the machine-readable files.

use std::{
    fs::{self, File},
    path::PathBuf,
    time::Instant,
};

use chrono::{NaiveDate, Utc};
use onchainbanks_core::{Bank, Config};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    api::ApiSnapshot,
    compare::Comparison,
    html::{PageRenderer, RenderError, bank_path, output_path},
    index::SiteIndex,
    listing::chain_path,
    llms::llms_txt,
    robots::{RobotsError, RobotsGenerator},
    sitemap::{SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Page rendering error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// API snapshot encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Robots.txt generation error.
    #[error("robots error: {0}")]
    Robots(#[from] RobotsError),

    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    /// Two or more banks share a slug and the build is strict.
    #[error("duplicate bank slugs: {}", .0.join(", "))]
    SlugCollision(Vec<String>),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of bank profile pages generated.
    pub bank_pages: usize,

    /// Number of comparison pages generated.
    pub comparison_pages: usize,

    /// Curated comparisons skipped because a slug did not resolve.
    pub skipped_comparisons: usize,

    /// Number of chain listing pages generated.
    pub chain_pages: usize,

    /// Number of sitemap entries.
    pub sitemap_urls: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    output_dir: PathBuf,
    build_date: NaiveDate,
    strict: bool,
}

impl Builder {
    /// Create a new builder dated today (UTC).
    #[must_use]
    pub fn new(config: Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
            build_date: Utc::now().date_naive(),
            strict: false,
        }
    }

    /// Set the date stamped into the footer, API snapshot and sitemap.
    #[must_use]
    pub fn with_build_date(mut self, date: NaiveDate) -> Self {
        self.build_date = date;
        self
    }

    /// Fail on slug collisions instead of warning.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Execute the full build process.
    pub fn build(&self, banks: &[Bank]) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            banks = banks.len(),
            output = %self.output_dir.display(),
            date = %self.build_date,
            "starting build"
        );

        let index = SiteIndex::new(banks);
        self.check_collisions(&index)?;

        self.clean_output()?;

        let renderer = PageRenderer::new(self.config.clone(), self.build_date);
        let mut sitemap = SitemapGenerator::new(self.config.base_url(), self.build_date);

        // Home
        self.write_page("/", &renderer.render_home(&index)?)?;
        sitemap.add_path("/");

        // Profiles
        for bank in banks {
            let path = bank_path(&bank.slug);
            self.write_page(&path, &renderer.render_profile(bank, banks)?)?;
            sitemap.add_path(&path);
            stats.bank_pages += 1;
        }
        info!(count = stats.bank_pages, "generated bank profiles");

        // Comparisons
        for pair in &self.config.curation.comparisons {
            let (Some(first), Some(second)) = (index.get(pair.first()), index.get(pair.second()))
            else {
                debug!(pair = %pair.page_slug(), "comparison slug does not resolve, skipping");
                stats.skipped_comparisons += 1;
                continue;
            };

            let comparison = Comparison::new(first, second);
            let path = comparison.path();
            self.write_page(&path, &renderer.render_comparison(&comparison)?)?;
            sitemap.add_path(&path);
            stats.comparison_pages += 1;
        }
        info!(
            count = stats.comparison_pages,
            skipped = stats.skipped_comparisons,
            "generated comparison pages"
        );

        // Chains
        for group in index.nonempty_chains() {
            let path = chain_path(group.chain.key);
            self.write_page(&path, &renderer.render_chain(group)?)?;
            sitemap.add_path(&path);
            stats.chain_pages += 1;
        }
        info!(count = stats.chain_pages, "generated chain pages");

        self.generate_api(banks)?;
        self.generate_llms(&index)?;
        RobotsGenerator::new(self.config.base_url()).generate(&self.output_dir)?;
        self.generate_sitemap(&sitemap)?;
        self.generate_cname()?;
        stats.sitemap_urls = sitemap.len();

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            bank_pages = stats.bank_pages,
            comparison_pages = stats.comparison_pages,
            chain_pages = stats.chain_pages,
            sitemap_urls = stats.sitemap_urls,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Warn about shared slugs, or refuse to build when strict.
    fn check_collisions(&self, index: &SiteIndex<'_>) -> Result<()> {
        let collisions = index.collisions();
        if collisions.is_empty() {
            return Ok(());
        }

        if self.strict {
            return Err(BuildError::SlugCollision(
                collisions.iter().map(|s| (*s).to_string()).collect(),
            ));
        }

        for slug in collisions {
            warn!(slug, "duplicate slug, later profile page overwrites the earlier one");
        }
        Ok(())
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Write an HTML page to `<output>/<path>/index.html`.
    fn write_page(&self, url_path: &str, html: &str) -> Result<()> {
        let path = output_path(&self.output_dir, url_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;

        debug!(path = %path.display(), "wrote page");
        Ok(())
    }

    fn generate_api(&self, banks: &[Bank]) -> Result<()> {
        let dir = self.output_dir.join("api");
        fs::create_dir_all(&dir)?;

        let json = ApiSnapshot::new(banks, self.build_date).to_json()?;
        let path = dir.join("banks.json");
        fs::write(&path, json)?;

        info!(path = %path.display(), "generated API snapshot");
        Ok(())
    }

    fn generate_llms(&self, index: &SiteIndex<'_>) -> Result<()> {
        let path = self.output_dir.join("llms.txt");
        fs::write(&path, llms_txt(&self.config, index))?;

        info!(path = %path.display(), "generated llms.txt");
        Ok(())
    }

    fn generate_sitemap(&self, sitemap: &SitemapGenerator) -> Result<()> {
        let path = self.output_dir.join("sitemap.xml");
        let mut file = File::create(&path)?;
        sitemap.write_to(&mut file)?;

        info!(path = %path.display(), urls = sitemap.len(), "generated sitemap");
        Ok(())
    }

    fn generate_cname(&self) -> Result<()> {
        let Some(host) = self.config.site.host.as_deref().filter(|h| !h.is_empty()) else {
            return Ok(());
        };

        fs::write(self.output_dir.join("CNAME"), format!("{host}\n"))?;
        Ok(())
    }
}
