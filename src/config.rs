use std::env;

use anyhow::Result;

/// Which keyword extraction backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorBackend {
    /// Whitespace split over normalized text (default) — every distinct token
    Whitespace,
    /// TF-IDF salience ranking — only the most distinctive terms
    Ranked,
}

/// The missing-keyword cap must stay in this range.
pub const MISSING_CAP_MIN: usize = 1;
pub const MISSING_CAP_MAX: usize = 15;
const MISSING_CAP_DEFAULT: usize = 10;

/// Central configuration loaded from environment variables.
///
/// Everything has a default — the tool works with no .env file at all.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Which keyword extractor feeds the gap analysis (VITAE_EXTRACTOR)
    pub extractor_backend: ExtractorBackend,
    /// Max missing keywords to report, clamped to 1-15 (VITAE_MISSING_CAP)
    pub missing_cap: usize,
    /// Keep digits and underscores during normalization (VITAE_PERMISSIVE)
    pub permissive: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let extractor_backend = match env::var("VITAE_EXTRACTOR").as_deref() {
            Ok("ranked") => ExtractorBackend::Ranked,
            // "whitespace" or unset both default to the whitespace split
            _ => ExtractorBackend::Whitespace,
        };

        let missing_cap = env::var("VITAE_MISSING_CAP")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(MISSING_CAP_DEFAULT)
            .clamp(MISSING_CAP_MIN, MISSING_CAP_MAX);

        let permissive = matches!(
            env::var("VITAE_PERMISSIVE").as_deref(),
            Ok("1") | Ok("true")
        );

        Ok(Self {
            extractor_backend,
            missing_cap,
            permissive,
        })
    }
}
