//! config.rs
//! Processor configuration: effort level, growth headroom and the per-call output budget.

use serde::{Deserialize, Serialize};

use crate::constants::{levels, DEFAULT_MIN_WRITABLE, MAX_MIN_WRITABLE};
use crate::processor::ProcessorError;

/// Compression effort. Ignored by decompressing processors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    None,
    Fastest,
    #[default]
    Default,
    Best,
    Custom(u32),
}

impl Level {
    /// Map a zlib integer level (`-1` means library default).
    pub fn from_zlib(level: i32) -> Result<Self, ProcessorError> {
        match level {
            levels::ZLIB_DEFAULT_SENTINEL => Ok(Level::Default),
            0..=9 => Ok(Level::Custom(level as u32)),
            other => Err(ProcessorError::InvalidConfig(format!(
                "compression level {} outside -1..=9",
                other
            ))),
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            Level::None       => levels::NO_COMPRESSION,
            Level::Fastest    => levels::BEST_SPEED,
            Level::Default    => levels::DEFAULT,
            Level::Best       => levels::BEST_COMPRESSION,
            Level::Custom(n)  => *n,
        }
    }

    pub fn validate(&self) -> Result<(), ProcessorError> {
        if self.as_u32() > levels::BEST_COMPRESSION {
            return Err(ProcessorError::InvalidConfig(format!(
                "compression level {} above {}",
                self.as_u32(),
                levels::BEST_COMPRESSION
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Effort level for compressing processors.
    pub level: Level,

    /// Free output capacity guaranteed before every engine step.
    pub min_writable: usize,

    /// Upper bound on bytes produced by a single `process` call.
    /// - `None` → unbounded.
    pub max_output: Option<usize>,

    /// `true` → zlib wrapper (header + adler32 trailer), `false` → raw DEFLATE.
    pub zlib_header: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            level: Level::Default,
            min_writable: DEFAULT_MIN_WRITABLE,
            max_output: None,
            zlib_header: true,
        }
    }
}

impl ProcessorConfig {
    pub fn new(level: Option<Level>, min_writable: Option<usize>, max_output: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            level: level.unwrap_or(defaults.level),
            min_writable: min_writable.unwrap_or(defaults.min_writable),
            max_output,
            zlib_header: defaults.zlib_header,
        }
    }

    pub fn with_level(level: Level) -> Self {
        Self { level, ..Self::default() }
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ProcessorError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| ProcessorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ProcessorError> {
        self.level.validate()?;
        if self.min_writable == 0 || self.min_writable > MAX_MIN_WRITABLE {
            return Err(ProcessorError::InvalidConfig(format!(
                "min_writable {} outside 1..={}",
                self.min_writable, MAX_MIN_WRITABLE
            )));
        }
        if self.max_output == Some(0) {
            return Err(ProcessorError::InvalidConfig("max_output must be > 0".into()));
        }
        Ok(())
    }
}
