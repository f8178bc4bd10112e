//! Build command - generates the static site

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr};
use onchainbanks_generator::{Builder, SiteIndex};

use super::{check::quick_validate, data_path, load_banks, load_config};

/// Command-line overrides for a build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions<'a> {
    /// Output directory; `build.output_dir` when absent.
    pub output: Option<&'a Path>,

    /// Card data file; `build.data_file` when absent.
    pub data: Option<&'a Path>,

    /// Build date; today (UTC) when absent.
    pub date: Option<NaiveDate>,

    /// Site base URL override.
    pub base_url: Option<&'a str>,

    /// Fail on duplicate slugs.
    pub strict: bool,
}

/// Run the build command.
///
/// Loads configuration and card data, then writes the full site.
pub fn run(config_path: &Path, options: &BuildOptions<'_>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?options, "Starting build");

    let mut config = load_config(config_path)?;

    // Override base_url if specified via CLI
    if let Some(url) = options.base_url {
        tracing::info!(base_url = url, "Overriding site base_url from CLI");
        config.site.base_url = url.to_string();
    }

    let output = options
        .output
        .map_or_else(|| PathBuf::from(&config.build.output_dir), Path::to_path_buf);
    let data = data_path(&config, options.data);

    tracing::debug!(?config, "Loaded configuration");

    let banks = load_banks(&config, &data)?;

    // Quick validation - print warnings for curated slugs that do not resolve
    let warnings = quick_validate(&config, &SiteIndex::new(&banks));
    if !warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    let mut builder = Builder::new(config, output.clone()).strict(options.strict);
    if let Some(date) = options.date {
        builder = builder.with_build_date(date);
    }

    let stats = builder.build(&banks).wrap_err("Build failed")?;

    let duration = start.elapsed();

    // Print build statistics
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Banks:       {}", stats.bank_pages);
    println!(
        "  Comparisons: {} ({} skipped)",
        stats.comparison_pages, stats.skipped_comparisons
    );
    println!("  Chains:      {}", stats.chain_pages);
    println!("  Sitemap:     {} URLs", stats.sitemap_urls);
    println!();
    println!("  Duration:    {:.2}s", duration.as_secs_f64());
    println!("  Output:      {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_site(dir: &Path) -> PathBuf {
        let config_path = dir.join("config.toml");
        let data_path = dir.join("cards.json");
        fs::write(
            &config_path,
            format!(
                r#"
[site]
title = "Test Banks"
base_url = "https://banks.example.com"

[build]
output_dir = "{}"
data_file = "{}"

[curation]
featured = ["fold"]
comparisons = [["fold", "gnosis-pay"]]
"#,
                dir.join("public").display(),
                data_path.display()
            ),
        )
        .unwrap();
        fs::write(
            &data_path,
            r#"[
                {"name": "Fold", "chain": "Bitcoin", "custody": "Custodial", "cashback": "3.5%"},
                {"name": "Gnosis Pay", "chain": "Gnosis", "custody": "Non-Custodial", "cashback": "5%"}
            ]"#,
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_run_uses_config_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_site(dir.path());

        let options = BuildOptions {
            date: NaiveDate::from_ymd_opt(2026, 3, 14),
            ..BuildOptions::default()
        };
        run(&config_path, &options).unwrap();

        let public = dir.path().join("public");
        assert!(public.join("compare/fold-vs-gnosis-pay/index.html").exists());
        assert!(!public.join("CNAME").exists());
        let sitemap = fs::read_to_string(public.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://banks.example.com/bank/fold/</loc>"));
        assert!(sitemap.contains("<lastmod>2026-03-14</lastmod>"));
    }

    #[test]
    fn test_run_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_site(dir.path());
        let output = dir.path().join("dist");

        let options = BuildOptions {
            output: Some(&output),
            base_url: Some("https://staging.example.com"),
            ..BuildOptions::default()
        };
        run(&config_path, &options).unwrap();

        let robots = fs::read_to_string(output.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://staging.example.com/sitemap.xml"));
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_run_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_site(dir.path());
        let missing = dir.path().join("missing.json");

        let options = BuildOptions {
            data: Some(&missing),
            ..BuildOptions::default()
        };
        let err = run(&config_path, &options).unwrap_err();
        assert!(err.to_string().contains("Failed to load card data"));
    }
}
