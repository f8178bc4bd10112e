//! Check command - validate configuration, card data and curated lists

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use onchainbanks_core::Config;
use onchainbanks_generator::SiteIndex;

use super::{data_path, load_banks, load_config};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration, the card snapshot and the curated lists.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and card data");

    let mut result = ValidationResult::default();

    // Validate configuration
    println!("Checking configuration...");
    let config = match load_config(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e:#}"));
            println!("  ✗ Configuration invalid: {e:#}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);

        println!("\nChecking card data...");
        let path = data_path(cfg, None);
        match load_banks(cfg, &path) {
            Ok(banks) => {
                println!("  ✓ {} cards loaded from {}", banks.len(), path.display());
                let index = SiteIndex::new(&banks);

                println!("\nChecking slugs and chains...");
                check_banks(&index, &mut result);

                println!("\nChecking curated lists...");
                for warning in quick_validate(cfg, &index) {
                    result.add_warning(warning);
                }
            }
            Err(e) => {
                result.add_error(format!("Card data error: {e:#}"));
                println!("  ✗ Card data invalid: {e:#}");
            }
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Quick validation for the build command.
///
/// Returns warnings for featured and comparison slugs that match no bank.
pub fn quick_validate(config: &Config, index: &SiteIndex<'_>) -> Vec<String> {
    let mut warnings = Vec::new();

    for slug in &config.curation.featured {
        if index.get(slug).is_none() {
            warnings.push(format!("Featured slug '{slug}' matches no bank"));
        }
    }

    for pair in &config.curation.comparisons {
        let missing: Vec<&str> = [pair.first(), pair.second()]
            .into_iter()
            .filter(|slug| index.get(slug).is_none())
            .collect();
        if !missing.is_empty() {
            warnings.push(format!(
                "Comparison '{}' skipped: no bank for {}",
                pair.page_slug(),
                missing.join(", ")
            ));
        }
    }

    warnings
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    if config.site.host.as_deref().is_some_and(str::is_empty) {
        result.add_warning("site.host is empty; no CNAME file will be written");
    }

    // Check output directory
    let output = Path::new(&config.build.output_dir);
    if output.exists() && !output.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            config.build.output_dir
        ));
    }

    println!("  ✓ Configuration values checked");
}

/// Report slug collisions, empty registered chains and unregistered chains.
fn check_banks(index: &SiteIndex<'_>, result: &mut ValidationResult) {
    for slug in index.collisions() {
        result.add_warning(format!(
            "Duplicate slug '{slug}': only the last profile page survives"
        ));
    }

    for group in index.chain_groups() {
        if group.banks.is_empty() {
            result.add_warning(format!(
                "Chain '{}' has no cards and gets no listing page",
                group.chain.key
            ));
        }
    }

    for bank in index.unregistered_chain_banks() {
        result.add_warning(format!(
            "'{}' is on chain '{}', which has no listing page",
            bank.name, bank.chain
        ));
    }

    println!("  ✓ {} banks indexed", index.total());
}
