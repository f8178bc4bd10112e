//! Subcommand implementations.

pub mod build;
pub mod check;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use onchainbanks_core::{Bank, Config, load_cards, normalize_all};

/// Load the configuration file with `ONCHAINBANKS__*` environment overrides.
pub fn load_config(config_path: &Path) -> Result<Config> {
    Config::load_with_env(config_path).wrap_err("Failed to load configuration")
}

/// Data file to read: the explicit path, else `build.data_file`.
#[must_use]
pub fn data_path(config: &Config, data: Option<&Path>) -> PathBuf {
    data.map_or_else(|| PathBuf::from(&config.build.data_file), Path::to_path_buf)
}

/// Read and normalize the card snapshot.
pub fn load_banks(config: &Config, path: &Path) -> Result<Vec<Bank>> {
    let raw = load_cards(path)
        .wrap_err_with(|| format!("Failed to load card data from {}", path.display()))?;
    Ok(normalize_all(raw, &config.site.review_url))
}
