//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    curated::{self, ComparisonPair},
    error::{CoreError, Result},
};

/// Main configuration structure for OnchainBanks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Curated featured list and comparison matchups.
    #[serde(default)]
    pub curation: CurationConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://onchainbanks.io").
    pub base_url: String,

    /// Host name written to the `CNAME` file for custom-domain hosting.
    #[serde(default)]
    pub host: Option<String>,

    /// Site description for meta tags.
    #[serde(default = "default_description")]
    pub description: String,

    /// Review site linked from every generated page.
    #[serde(default = "default_review_url")]
    pub review_url: String,

    /// Display name of the review site.
    #[serde(default = "default_review_name")]
    pub review_name: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// JSON file holding the raw card records.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

/// Curated lists that drive the home page and comparison pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationConfig {
    /// Slugs shown in the "featured" section, in display order.
    #[serde(default = "curated::default_featured")]
    pub featured: Vec<String>,

    /// Head-to-head matchups, each rendered as one comparison page.
    #[serde(default = "curated::default_comparisons")]
    pub comparisons: Vec<ComparisonPair>,
}

fn default_description() -> String {
    "The comprehensive database of onchain banks and crypto debit cards.".to_string()
}

fn default_review_url() -> String {
    "https://spendbase.cards".to_string()
}

fn default_review_name() -> String {
    "Spendbase".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_data_file() -> String {
    "data/cards.json".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "OnchainBanks.io".to_string(),
            base_url: "https://onchainbanks.io".to_string(),
            host: Some("onchainbanks.io".to_string()),
            description: default_description(),
            review_url: default_review_url(),
            review_name: default_review_name(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            data_file: default_data_file(),
        }
    }
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self {
            featured: curated::default_featured(),
            comparisons: curated::default_comparisons(),
        }
    }
}

impl Config {
    /// Load configuration using the config crate, layering `ONCHAINBANKS__*`
    /// environment variables over the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("ONCHAINBANKS").separator("__"))
            .build()
            .and_then(|settings| settings.try_deserialize::<Config>())
            .map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to parse config file: {}", path.display()),
                    e,
                )
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url())
    }

    /// Review site host, e.g. `spendbase.cards`.
    #[must_use]
    pub fn review_host(&self) -> &str {
        self.site
            .review_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
    }
}
