//! Robots.txt generation.

use std::{fs::File, io::Write, path::Path};

use thiserror::Error;
use tracing::info;

/// Robots generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Robots.txt generator. Everything is crawlable; the sitemap is advertised.
#[derive(Debug)]
pub struct RobotsGenerator {
    sitemap_url: String,
}

impl RobotsGenerator {
    /// Create a generator pointing crawlers at `<base_url>/sitemap.xml`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            sitemap_url: format!("{}/sitemap.xml", base_url.trim_end_matches('/')),
        }
    }

    /// Write the rules to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "User-agent: *")?;
        writeln!(writer, "Allow: /")?;
        writeln!(writer)?;
        writeln!(writer, "Sitemap: {}", self.sitemap_url)?;
        Ok(())
    }

    /// Write `robots.txt` into `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<()> {
        info!("generating robots.txt");

        let mut file = File::create(output_dir.join("robots.txt"))?;
        self.write_to(&mut file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to() {
        let generator = RobotsGenerator::new("https://onchainbanks.io/");
        let mut out = Vec::new();
        generator.write_to(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "User-agent: *\nAllow: /\n\nSitemap: https://onchainbanks.io/sitemap.xml\n"
        );
    }

    #[test]
    fn test_generate() {
        let dir = tempfile::tempdir().unwrap();
        RobotsGenerator::new("https://example.com")
            .generate(dir.path())
            .unwrap();

        let content = std::fs::read_to_string(dir.path().join("robots.txt")).unwrap();
        assert!(content.ends_with("Sitemap: https://example.com/sitemap.xml\n"));
    }
}
