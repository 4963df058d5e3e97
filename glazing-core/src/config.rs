//! Shop tolerances and settings for the layout engine.

use serde::{Deserialize, Serialize};

use crate::error::{ProjectError, Result};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.000_001;

/// Total lateral clearance subtracted from the opening width (box family), in meters.
pub const LATERAL_CLEARANCE: f64 = 0.03;

/// Total height clearance subtracted from the opening height (box family), in meters.
pub const HEIGHT_CLEARANCE: f64 = 0.05;

/// Overlap between a sliding leaf and its neighbor, in meters.
pub const LEAF_OVERLAP: f64 = 0.05;

/// Largest module width for sliding glass walls, in meters.
pub const MODULE_CAP: f64 = 1.5;

/// Largest opening width or height accepted from a visit, in meters.
pub const MAX_OPENING: f64 = 30.0;

/// Most modules a sliding wall face may be split into.
pub const MAX_MODULES: f64 = 200.0;

/// Pivot door width as a fraction of the opening width.
pub const PIVOT_DOOR_RATIO: f64 = 0.4;

/// Fixed panel width as a fraction of one corner face.
pub const CORNER_FIXED_RATIO: f64 = 0.4;

/// Generic openings up to this width get a single module.
pub const GENERIC_SINGLE_MAX: f64 = 1.6;

/// Generic openings up to this width get two modules; wider ones get three.
pub const GENERIC_DOUBLE_MAX: f64 = 3.0;

/// Unevenness above this value (centimeters) triggers the shimming alert.
pub const UNEVENNESS_ALERT_CM: f64 = 0.5;

/// Rounding error allowed per millimeter-rounded piece when rebuilding a width.
pub const RECONSTRUCTION_EPS: f64 = 0.0005;

/// Tolerances used by the layout and report generators.
///
/// Every field defaults to the constant of the same name, so a shop file
/// only needs to list the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Total lateral clearance (m).
    pub lateral_clearance: f64,
    /// Total height clearance (m).
    pub height_clearance: f64,
    /// Sliding leaf overlap (m).
    pub leaf_overlap: f64,
    /// Module width cap for sliding walls (m).
    pub module_cap: f64,
    /// Largest accepted opening dimension (m).
    pub max_opening: f64,
    /// Pivot door share of the opening.
    pub pivot_door_ratio: f64,
    /// Fixed panel share of a corner face.
    pub corner_fixed_ratio: f64,
    /// Single-module limit for generic openings (m).
    pub generic_single_max: f64,
    /// Two-module limit for generic openings (m).
    pub generic_double_max: f64,
    /// Unevenness alert threshold (cm).
    pub unevenness_alert_cm: f64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            lateral_clearance: LATERAL_CLEARANCE,
            height_clearance: HEIGHT_CLEARANCE,
            leaf_overlap: LEAF_OVERLAP,
            module_cap: MODULE_CAP,
            max_opening: MAX_OPENING,
            pivot_door_ratio: PIVOT_DOOR_RATIO,
            corner_fixed_ratio: CORNER_FIXED_RATIO,
            generic_single_max: GENERIC_SINGLE_MAX,
            generic_double_max: GENERIC_DOUBLE_MAX,
            unevenness_alert_cm: UNEVENNESS_ALERT_CM,
        }
    }
}

impl ShopConfig {
    /// Parse a (possibly partial) shop configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShopConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reject tolerances the layout algorithms cannot work with.
    pub fn check(&self) -> Result<()> {
        let non_negative = [
            ("lateral_clearance", self.lateral_clearance),
            ("height_clearance", self.height_clearance),
            ("leaf_overlap", self.leaf_overlap),
            ("unevenness_alert_cm", self.unevenness_alert_cm),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, value, "a non-negative number"));
            }
        }

        if !self.module_cap.is_finite() || self.module_cap <= 0.0 {
            return Err(invalid("module_cap", self.module_cap, "a positive width"));
        }

        if !self.max_opening.is_finite() || self.max_opening <= 0.0 {
            return Err(invalid("max_opening", self.max_opening, "a positive length"));
        }

        if self.max_opening / self.module_cap > MAX_MODULES {
            return Err(invalid(
                "module_cap",
                self.module_cap,
                &format!("a width splitting max_opening into at most {} modules", MAX_MODULES),
            ));
        }

        for (field, value) in [
            ("pivot_door_ratio", self.pivot_door_ratio),
            ("corner_fixed_ratio", self.corner_fixed_ratio),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(invalid(field, value, "a ratio between 0 and 1"));
            }
        }

        if !(self.generic_single_max > 0.0 && self.generic_single_max < self.generic_double_max) {
            return Err(invalid(
                "generic_single_max",
                self.generic_single_max,
                "a positive width below generic_double_max",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, value: f64, expected: &str) -> ProjectError {
    ProjectError::InvalidConfig {
        field: field.to_string(),
        expected: expected.to_string(),
        value,
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if two floats are equal within an explicit tolerance.
    #[inline]
    pub fn within(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance + EPS
    }
}

/// Millimeter rounding shared by every template.
pub mod rounding {
    /// Round a length in meters to millimeter resolution (3 decimals).
    ///
    /// Halves round away from zero.
    #[inline]
    pub fn round_mm(meters: f64) -> f64 {
        (meters * 1000.0).round() / 1000.0
    }
}
