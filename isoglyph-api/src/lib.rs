//! Public API for isoglyph isomorph detection
//!
//! This crate provides a clean, stable interface for finding isomorphs —
//! passages of a text sharing the same internal repeat-distance shape —
//! while hiding the engine and algorithm internals.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dto::Metadata;
use error::Result;
use isoglyph_core::Pattern;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, IsomorphDto, Output};
pub use error::ApiError;
pub use isoglyph_engine::{ExecutionMode, SubPatternPolicy};

/// Main entry point for isomorph scanning
///
/// Wraps the engine's multi-length search behind a stable surface that
/// speaks in DTOs rather than engine types.
pub struct IsomorphScanner {
    inner: isoglyph_engine::IsomorphSearch,
    config: Config,
}

impl IsomorphScanner {
    /// Create a scanner with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a scanner with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = isoglyph_engine::IsomorphSearch::with_config(config.inner.clone());
        Ok(Self { inner, config })
    }

    /// Scan the input and return every surviving isomorph
    pub fn scan(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let total_symbols = text.len();
        let lengths_scanned = self
            .inner
            .length_range(total_symbols)
            .map(|(min, max)| max - min + 1)
            .unwrap_or(0);

        let map = self
            .inner
            .run(text.as_str())
            .map_err(|e| ApiError::Engine(e.to_string()))?;

        let elapsed = start.elapsed();

        let isomorphs: Vec<IsomorphDto> = map
            .into_iter()
            .map(|(pattern, positions)| to_dto(&pattern, positions))
            .collect();

        let metadata = Metadata {
            total_symbols,
            lengths_scanned,
            patterns_found: isomorphs.len(),
            processing_time_ms: elapsed.as_millis() as u64,
            mode_used: format!("{:?}", self.config.execution_mode()),
        };

        Ok(Output {
            isomorphs,
            metadata,
        })
    }

    /// Scan a text string directly (convenience method)
    pub fn scan_text(&self, text: &str) -> Result<Output> {
        self.scan(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for IsomorphScanner {
    fn default() -> Self {
        Self::new().expect("default scanner creation should not fail")
    }
}

fn to_dto(pattern: &Pattern, positions: Vec<usize>) -> IsomorphDto {
    IsomorphDto {
        canonical: pattern.to_string(),
        length: pattern.len(),
        significance: pattern.significance(),
        positions,
    }
}

// Convenience functions

/// Scan text with the default configuration
pub fn scan_text(text: &str) -> Result<Output> {
    let scanner = IsomorphScanner::new()?;
    scanner.scan(Input::from_text(text))
}

/// Scan a file with the default configuration
pub fn scan_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    let scanner = IsomorphScanner::new()?;
    scanner.scan(Input::from_file(path.as_ref().to_path_buf()))
}
