//! OnchainBanks Core Library
//!
//! Core types, configuration, and error handling for the OnchainBanks site builder.

pub mod bank;
pub mod chain;
pub mod config;
pub mod curated;
pub mod error;
pub mod slug;

pub use bank::{Bank, Category, RawCard, load_cards, normalize_all};
pub use chain::{CHAINS, ChainInfo};
pub use config::Config;
pub use curated::ComparisonPair;
pub use error::{CoreError, Result};
pub use slug::slugify;
