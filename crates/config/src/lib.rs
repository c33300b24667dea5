//! Sampling plans for batch orientation runs.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Largest epoch grid a plan may describe.
pub const MAX_EPOCHS: usize = 1_000_000;

/// Which convention sampled orientations are reported in.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    /// WGCCRE `(α, δ, W)` as published.
    Raw,
    /// Rotations in the VSOP87 convention.
    #[default]
    Vsop87,
}

impl FrameKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Vsop87 => "vsop87",
        }
    }
}

/// Inclusive Julian Date grid.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EpochGrid {
    pub start_jd: f64,
    pub end_jd: f64,
    pub step_days: f64,
}

/// Bodies and epochs to evaluate, parsed from YAML or TOML.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SamplingPlan {
    pub bodies: Vec<String>,
    pub epochs: EpochGrid,
    #[serde(default)]
    pub frame: FrameKind,
}

/// Errors that can occur while loading a sampling plan.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read plan: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("plan lists no bodies")]
    EmptyBodies,
    #[error("epoch step must be a positive number of days, got {0}")]
    InvalidStep(f64),
    #[error("epoch range ends at JD {end} before it starts at JD {start}")]
    InvalidRange { start: f64, end: f64 },
    #[error("epoch grid spans {count:e} epochs, more than the limit of {limit}")]
    TooManyEpochs { count: f64, limit: usize },
}

impl SamplingPlan {
    /// Check the plan is usable before any sampling starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::EmptyBodies);
        }
        let step = self.epochs.step_days;
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        let (start, end) = (self.epochs.start_jd, self.epochs.end_jd);
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(ConfigError::InvalidRange { start, end });
        }
        let count = self.grid_size();
        if !count.is_finite() || count > MAX_EPOCHS as f64 {
            return Err(ConfigError::TooManyEpochs {
                count,
                limit: MAX_EPOCHS,
            });
        }
        Ok(())
    }

    /// Number of epochs on the grid, both ends included.
    ///
    /// Saturates at `usize::MAX` for grids [`SamplingPlan::validate`] would reject.
    pub fn epoch_count(&self) -> usize {
        let count = self.grid_size();
        if count.is_finite() && count < usize::MAX as f64 {
            count as usize
        } else {
            usize::MAX
        }
    }

    fn grid_size(&self) -> f64 {
        let span = self.epochs.end_jd - self.epochs.start_jd;
        // tolerate a final step that lands a hair past the end
        (span / self.epochs.step_days + 1e-9).floor() + 1.0
    }

    /// Julian Dates on the grid, computed from the start to avoid drift.
    pub fn julian_dates(&self) -> Vec<f64> {
        (0..self.epoch_count())
            .map(|i| self.epochs.start_jd + i as f64 * self.epochs.step_days)
            .collect()
    }
}

/// Load and validate a plan; `.toml` files are read as TOML, anything else as YAML.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<SamplingPlan, ConfigError> {
    let path = path.as_ref();
    let plan: SamplingPlan = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    plan.validate()?;
    Ok(plan)
}
