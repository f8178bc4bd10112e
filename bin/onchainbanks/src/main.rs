//! OnchainBanks CLI
//!
//! Builds the OnchainBanks static site from a card data snapshot.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use chrono::NaiveDate;
use clap::Parser;
use color_eyre::eyre::Result;
use onchainbanks::cmd::build::BuildOptions;

/// Command-line interface for OnchainBanks.
#[derive(Parser)]
#[command(
    name = "onchainbanks",
    version,
    about = "Static site builder for the OnchainBanks crypto card directory"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Card data file (defaults to build.data_file)
        #[arg(short, long)]
        data: Option<std::path::PathBuf>,
        /// Build date stamped into pages, API and sitemap (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Override site base URL (e.g., https://staging.onchainbanks.io)
        #[arg(long)]
        base_url: Option<String>,
        /// Fail when two banks share a slug
        #[arg(long)]
        strict: bool,
    },
    /// Validate configuration, card data and curated lists
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    onchainbanks::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            output,
            data,
            date,
            base_url,
            strict,
        } => {
            let options = BuildOptions {
                output: output.as_deref(),
                data: data.as_deref(),
                date,
                base_url: base_url.as_deref(),
                strict,
            };
            onchainbanks::cmd::build::run(&cli.config, &options)?;
        }
        Commands::Check { strict } => {
            onchainbanks::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let args = ["onchainbanks", "build", "--output", "dist"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build {
                output,
                data,
                date,
                base_url,
                strict,
            } => {
                assert_eq!(output, Some(std::path::PathBuf::from("dist")));
                assert!(data.is_none());
                assert!(date.is_none());
                assert!(base_url.is_none());
                assert!(!strict);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_with_date_and_data() {
        let args = [
            "onchainbanks",
            "build",
            "--data",
            "snapshot.json",
            "--date",
            "2026-03-14",
            "--strict",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build {
                data, date, strict, ..
            } => {
                assert_eq!(data, Some(std::path::PathBuf::from("snapshot.json")));
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 14));
                assert!(strict);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_rejects_bad_date() {
        let args = ["onchainbanks", "build", "--date", "14/03/2026"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_build_with_base_url() {
        let args = [
            "onchainbanks",
            "build",
            "--base-url",
            "https://staging.example.com",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Build { base_url, .. } => {
                assert_eq!(base_url.as_deref(), Some("https://staging.example.com"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["onchainbanks", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["onchainbanks", "-vvv", "build"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["onchainbanks", "--config", "site.toml", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
