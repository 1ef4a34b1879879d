//! List configuration.
//!
//! [`SwipeConfig`] carries every tunable of the list. It can be built in code
//! with the `with_*` setters or loaded from TOML; every field is optional and
//! falls back to its default.
//!
//! ```toml
//! hidden_area_width = 96.0
//! line_height = 56.0
//! velocity_threshold = 0.25
//!
//! [spring]
//! stiffness = 300.0
//! damping = 24.0
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use swipelist_core::SpringParams;

use crate::animator::DEFAULT_COLLAPSE_DURATION_MS;
use crate::error::{Error, Result};
use crate::gesture::{DEFAULT_CLAIM_THRESHOLD, DEFAULT_VELOCITY_THRESHOLD};

/// Default maximum reveal distance.
pub const DEFAULT_HIDDEN_AREA_WIDTH: f64 = 72.0;

/// Default row height, and the start height of the delete collapse.
pub const DEFAULT_LINE_HEIGHT: f64 = 64.0;

/// Spring parameters as they appear in a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_displacement: f64,
    pub rest_velocity: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringParams::default().into()
    }
}

impl From<SpringParams> for SpringConfig {
    fn from(params: SpringParams) -> Self {
        Self {
            stiffness: params.stiffness,
            damping: params.damping,
            mass: params.mass,
            rest_displacement: params.rest_displacement,
            rest_velocity: params.rest_velocity,
        }
    }
}

impl From<SpringConfig> for SpringParams {
    fn from(config: SpringConfig) -> Self {
        Self {
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass,
            rest_displacement: config.rest_displacement,
            rest_velocity: config.rest_velocity,
        }
    }
}

/// Configuration for a [`SwipeList`](crate::SwipeList).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwipeConfig {
    /// Maximum reveal distance. Rows settle at `0` or `-hidden_area_width`.
    pub hidden_area_width: f64,
    /// Row height; the delete collapse animates from here to zero.
    pub line_height: f64,
    /// Distance a touch must travel before its direction is decided.
    pub directional_threshold: f64,
    /// Leftward release speed (units per millisecond) needed to open.
    pub velocity_threshold: f64,
    /// Duration of the delete collapse in milliseconds.
    pub collapse_duration_ms: u64,
    /// Spring used for open and close snaps.
    pub spring: SpringConfig,
    /// Enables [`SwipeList::item_layout`](crate::SwipeList::item_layout).
    pub fixed_row_layout: bool,
    /// Styling for the hidden-area container, passed through untouched.
    pub hidden_area_style: Option<toml::Value>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            hidden_area_width: DEFAULT_HIDDEN_AREA_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
            directional_threshold: DEFAULT_CLAIM_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            collapse_duration_ms: DEFAULT_COLLAPSE_DURATION_MS,
            spring: SpringConfig::default(),
            fixed_row_layout: false,
            hidden_area_style: None,
        }
    }
}

impl SwipeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Set the maximum reveal distance.
    pub fn with_hidden_area_width(mut self, width: f64) -> Self {
        self.hidden_area_width = width;
        self
    }

    /// Set the row height.
    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    /// Set the claim threshold.
    pub fn with_directional_threshold(mut self, threshold: f64) -> Self {
        self.directional_threshold = threshold;
        self
    }

    /// Set the release velocity threshold.
    pub fn with_velocity_threshold(mut self, threshold: f64) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    /// Set the delete collapse duration.
    pub fn with_collapse_duration(mut self, duration: Duration) -> Self {
        self.collapse_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the snap spring.
    pub fn with_spring(mut self, params: SpringParams) -> Self {
        self.spring = params.into();
        self
    }

    /// Enable or disable the fixed-size layout fast path.
    pub fn with_fixed_row_layout(mut self, enabled: bool) -> Self {
        self.fixed_row_layout = enabled;
        self
    }

    /// Attach an opaque hidden-area style.
    pub fn with_hidden_area_style(mut self, style: toml::Value) -> Self {
        self.hidden_area_style = Some(style);
        self
    }

    /// The delete collapse duration.
    pub fn collapse_duration(&self) -> Duration {
        Duration::from_millis(self.collapse_duration_ms)
    }

    /// The snap spring as animation parameters.
    pub fn spring_params(&self) -> SpringParams {
        self.spring.into()
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<()> {
        non_negative("hidden_area_width", self.hidden_area_width)?;
        non_negative("directional_threshold", self.directional_threshold)?;
        non_negative("velocity_threshold", self.velocity_threshold)?;

        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(Error::invalid_config(
                "line_height",
                format!("must be a positive number, got {}", self.line_height),
            ));
        }

        if !self.spring_params().is_valid() {
            return Err(Error::invalid_config(
                "spring",
                "stiffness and mass must be positive, damping and rest thresholds non-negative",
            ));
        }

        Ok(())
    }
}

static_assertions::assert_impl_all!(SwipeConfig: Send, Sync, Clone);

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_config(
            field,
            format!("must be a non-negative number, got {value}"),
        ))
    }
}
