//! OnchainBanks CLI Library
//!
//! Command implementations for the `onchainbanks` binary, exposed as a
//! library so they can be driven from tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use onchainbanks::cmd::{self, build::BuildOptions};
//!
//! cmd::build::run(Path::new("config.toml"), &BuildOptions::default()).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use onchainbanks_core::{Bank, Config};
pub use onchainbanks_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
