//! High-level configuration API

use crate::error::{ApiError, Result};
use isoglyph_engine::{ExecutionMode, SearchConfig, SubPatternPolicy};

/// High-level scan configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) inner: SearchConfig,
}

impl Config {
    /// Scan every length from 2 up with a single repeat sufficing
    pub fn exhaustive() -> Self {
        Self {
            inner: SearchConfig::exhaustive(),
        }
    }

    /// Only strongly structured windows
    pub fn strict() -> Self {
        Self {
            inner: SearchConfig::strict(),
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The smallest window length scanned
    pub fn min_length(&self) -> usize {
        self.inner.min_length
    }

    /// The largest window length scanned, if bounded
    pub fn max_length(&self) -> Option<usize> {
        self.inner.max_length
    }

    /// The significance floor
    pub fn min_significance(&self) -> u32 {
        self.inner.min_significance
    }

    /// The execution mode
    pub fn execution_mode(&self) -> ExecutionMode {
        self.inner.execution_mode
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the smallest window length (0 derives it from the significance
    /// floor)
    pub fn min_length(mut self, len: usize) -> Self {
        self.config.inner.min_length = len;
        self
    }

    /// Bound the largest window length
    pub fn max_length(mut self, len: usize) -> Self {
        self.config.inner.max_length = Some(len);
        self
    }

    /// Set the significance floor
    pub fn min_significance(mut self, significance: u32) -> Self {
        self.config.inner.min_significance = significance;
        self
    }

    /// Set the tie handling for nested sub-patterns
    pub fn sub_pattern_policy(mut self, policy: SubPatternPolicy) -> Self {
        self.config.inner.sub_pattern_policy = policy;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.inner.execution_mode = mode;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if let Some(max) = self.config.inner.max_length {
            if self.config.inner.min_length > 0 && max < self.config.inner.min_length {
                return Err(ApiError::Config(format!(
                    "max_length {max} below min_length {}",
                    self.config.inner.min_length
                )));
            }
        }
        Ok(self.config)
    }
}
