//! OnchainBanks Generator Library
//!
//! Static site generation engine for OnchainBanks.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`html`] - Page renderer, layout wrapping and shared fragments
//! - [`index`] - Counts, chain groupings and slug lookup
//! - [`home`] - Home page
//! - [`profile`] - Bank profile pages
//! - [`compare`] - Head-to-head comparison pages and winner rules
//! - [`listing`] - Per-chain listing pages
//! - [`api`] - JSON API snapshot
//! - [`llms`] - `llms.txt` descriptor
//! - [`robots`] - `robots.txt` generation
//! - [`sitemap`] - XML sitemap generation
//! - [`build`] - Build orchestration

pub mod api;
pub mod build;
pub mod compare;
pub mod home;
pub mod html;
pub mod index;
pub mod listing;
pub mod llms;
pub mod profile;
pub mod robots;
pub mod sitemap;
pub mod template;

pub use api::ApiSnapshot;
pub use build::{BuildError, BuildStats, Builder};
pub use compare::{Comparison, Winner};
pub use html::PageRenderer;
pub use index::{ChainGroup, SiteIndex};
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
pub use template::{Template, TemplateContext, TemplateRegistry};
