//! Helix configuration.
//!
//! A [`HelixConfig`] is a plain value: build it with the `with_*` methods,
//! load it from a JSON preset, or edit a copy and hand it to
//! [`FieldStore::set_config`](crate::FieldStore::set_config).

use crate::color::{self, hex_serde};
use crate::error::HelixError;
use crate::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Slider ranges offered by the settings panel.
///
/// The generator accepts values outside these ranges as long as
/// [`HelixConfig::validate`] passes.
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const SIZE: RangeInclusive<f32> = 0.001..=0.1;
    pub const SIZE_STEP: f64 = 0.001;
    pub const RADIUS: RangeInclusive<f32> = 150.0..=1500.0;
    pub const RADIUS_STEP: f64 = 50.0;
    pub const HEIGHT_STEP: RangeInclusive<f32> = 0.01..=0.5;
    pub const HEIGHT_STEP_STEP: f64 = 0.01;
    pub const TURNS: RangeInclusive<u32> = 1..=10;
    pub const POINTS_PER_TURN: RangeInclusive<u32> = 200..=15_000;
    pub const POINTS_PER_TURN_STEP: f64 = 100.0;
    pub const RANDOMNESS: RangeInclusive<f32> = 0.1..=15.0;
    pub const RANDOMNESS_STEP: f64 = 0.1;
    pub const RANDOMNESS_POWER: RangeInclusive<f32> = 1.0..=10.0;
    pub const RANDOMNESS_POWER_STEP: f64 = 1.0;
}

/// Largest field the generator will allocate: ten times the slider maximum.
pub const MAX_POINTS: u32 = 10 * 10 * 15_000;

/// Parameters of a helical point field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixConfig {
    /// Rendered point size in world units. Not used by the generator.
    pub size: f32,
    /// Maximum radial distance from the helix axis.
    pub radius: f32,
    /// Vertical rise per point index.
    pub height_step: f32,
    /// Number of helical revolutions.
    pub turns: u32,
    /// Angular resolution of one revolution.
    pub points_per_turn: u32,
    /// Magnitude of per-axis positional jitter.
    pub randomness: f32,
    /// Exponent applied to jitter draws; higher values pull jitter toward zero.
    pub randomness_power: f32,
    /// Color at the helix axis (t = 0).
    #[serde(with = "hex_serde")]
    pub inside_color: Vec3,
    /// Color at the full radius (t = 1).
    #[serde(with = "hex_serde")]
    pub outside_color: Vec3,
}

impl Default for HelixConfig {
    fn default() -> Self {
        Self {
            size: 0.02,
            radius: 250.0,
            height_step: 0.1,
            turns: 4,
            points_per_turn: 325,
            randomness: 7.6,
            randomness_power: 2.0,
            // #ff6030
            inside_color: Vec3::new(1.0, 96.0 / 255.0, 48.0 / 255.0),
            // #1b3984
            outside_color: Vec3::new(27.0 / 255.0, 57.0 / 255.0, 132.0 / 255.0),
        }
    }
}

impl HelixConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered point size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the maximum radial distance.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the vertical rise per point.
    pub fn with_height_step(mut self, height_step: f32) -> Self {
        self.height_step = height_step;
        self
    }

    /// Set the number of revolutions.
    pub fn with_turns(mut self, turns: u32) -> Self {
        self.turns = turns;
        self
    }

    /// Set the number of points per revolution.
    pub fn with_points_per_turn(mut self, points_per_turn: u32) -> Self {
        self.points_per_turn = points_per_turn;
        self
    }

    /// Set the jitter magnitude.
    pub fn with_randomness(mut self, randomness: f32) -> Self {
        self.randomness = randomness;
        self
    }

    /// Set the jitter exponent.
    pub fn with_randomness_power(mut self, power: f32) -> Self {
        self.randomness_power = power;
        self
    }

    /// Set both gradient endpoints.
    pub fn with_colors(mut self, inside: Vec3, outside: Vec3) -> Self {
        self.inside_color = inside;
        self.outside_color = outside;
        self
    }

    /// Set both gradient endpoints from hex strings such as `"#ff6030"`.
    pub fn with_hex_colors(self, inside: &str, outside: &str) -> Result<Self, HelixError> {
        Ok(self.with_colors(color::parse_hex(inside)?, color::parse_hex(outside)?))
    }

    /// Total number of points, or `None` if it does not fit in a `u32`.
    pub fn point_count(&self) -> Option<u32> {
        self.turns.checked_mul(self.points_per_turn)
    }

    /// Check the preconditions of the generator.
    ///
    /// Turns, points per turn and radius must be positive and the point count
    /// at most [`MAX_POINTS`]. Jitter parameters must be finite with a
    /// non-negative magnitude and a positive exponent, and both colors must
    /// lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), HelixError> {
        self.validated_point_count().map(|_| ())
    }

    /// Validate and return the number of points to generate.
    pub(crate) fn validated_point_count(&self) -> Result<u32, HelixError> {
        if self.turns == 0 {
            return Err(HelixError::invalid("turns", "must be at least 1"));
        }
        if self.points_per_turn == 0 {
            return Err(HelixError::invalid("points_per_turn", "must be at least 1"));
        }
        let count = match self.point_count() {
            Some(count) if count <= MAX_POINTS => count,
            _ => {
                return Err(HelixError::invalid(
                    "points_per_turn",
                    "makes turns * points_per_turn exceed 1 500 000 points",
                ))
            }
        };
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(HelixError::invalid("radius", "must be finite and greater than zero"));
        }
        if !self.height_step.is_finite() {
            return Err(HelixError::invalid("height_step", "must be finite"));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(HelixError::invalid("size", "must be finite and greater than zero"));
        }
        if !(self.randomness.is_finite() && self.randomness >= 0.0) {
            return Err(HelixError::invalid("randomness", "must be finite and non-negative"));
        }
        if !(self.randomness_power.is_finite() && self.randomness_power > 0.0) {
            return Err(HelixError::invalid(
                "randomness_power",
                "must be finite and greater than zero",
            ));
        }
        if !color::is_unit_rgb(self.inside_color) {
            return Err(HelixError::invalid("inside_color", "components must lie in [0, 1]"));
        }
        if !color::is_unit_rgb(self.outside_color) {
            return Err(HelixError::invalid("outside_color", "components must lie in [0, 1]"));
        }
        Ok(count)
    }

    /// True when every tunable field lies inside the panel's slider ranges.
    pub fn within_ui_ranges(&self) -> bool {
        fn inside<T: PartialOrd>(range: RangeInclusive<T>, v: T) -> bool {
            range.contains(&v)
        }
        inside(ranges::SIZE, self.size)
            && inside(ranges::RADIUS, self.radius)
            && inside(ranges::HEIGHT_STEP, self.height_step)
            && inside(ranges::TURNS, self.turns)
            && inside(ranges::POINTS_PER_TURN, self.points_per_turn)
            && inside(ranges::RANDOMNESS, self.randomness)
            && inside(ranges::RANDOMNESS_POWER, self.randomness_power)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HelixError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values. The result is validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HelixError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, HelixError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
