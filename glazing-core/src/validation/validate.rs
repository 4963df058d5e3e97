//! Validation of visit records before layout and of the pieces after it.

use crate::classify::matched_keywords;
use crate::config::rounding::round_mm;
use crate::config::ShopConfig;
use crate::error::{ProjectError, Result};
use crate::layout::reconstruction;
use crate::model::{Piece, TemplateId, VisitRecord};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Smallest opening width (exclusive) a template can lay out positive pieces in.
pub fn required_width(template: TemplateId, config: &ShopConfig) -> f64 {
    match template {
        TemplateId::Box2Door2Fixed | TemplateId::Box6 => {
            config.lateral_clearance + config.leaf_overlap
        }
        TemplateId::Box1Door1Fixed => config.lateral_clearance / (1.0 - config.pivot_door_ratio),
        TemplateId::BoxCorner
        | TemplateId::SlidingWallStraight
        | TemplateId::SlidingWallCorner
        | TemplateId::MirrorRect
        | TemplateId::Generic => 0.0,
    }
}

/// Smallest opening height (exclusive) a template can lay out positive pieces in.
pub fn required_height(template: TemplateId, config: &ShopConfig) -> f64 {
    if template.is_box_family() {
        config.height_clearance
    } else {
        0.0
    }
}

/// Every rule the visit breaks, in a fixed order.
fn visit_errors(visit: &VisitRecord, template: TemplateId, config: &ShopConfig) -> Vec<ProjectError> {
    let mut errors = Vec::new();

    let dimensions = [("width", visit.width), ("height", visit.height)];
    let mut dimensions_ok = true;
    for (field, value) in dimensions {
        if !value.is_finite() || value <= 0.0 || value > config.max_opening {
            dimensions_ok = false;
            errors.push(ProjectError::InvalidDimension {
                field: field.to_string(),
                value,
            });
        }
    }

    // clearance checks only make sense on positive dimensions
    if dimensions_ok {
        let limits = [
            ("width", visit.width, required_width(template, config)),
            ("height", visit.height, required_height(template, config)),
        ];
        for (dimension, available, required) in limits {
            if available <= required {
                errors.push(ProjectError::IncompatibleClearance {
                    template,
                    dimension: dimension.to_string(),
                    available,
                    required: round_mm(required),
                });
            }
        }
    }

    if !visit.unevenness.is_finite() || visit.unevenness < 0.0 {
        errors.push(ProjectError::InvalidValue {
            field: "unevenness".to_string(),
            expected: "a non-negative deviation in centimeters".to_string(),
            value: visit.unevenness.to_string(),
        });
    }

    errors
}

/// Validate a visit record against the chosen template.
pub fn validate_visit(
    visit: &VisitRecord,
    template: TemplateId,
    config: &ShopConfig,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for error in visit_errors(visit, template, config) {
        result.add_error(error.to_string());
    }

    if visit.glass_thickness == 0 {
        result.add_warning("Missing or zero glass thickness");
    }

    if visit.environment.trim().is_empty() {
        result.add_warning("Environment is blank; the report will not name the location");
    }

    let keywords = matched_keywords(&visit.service_type);
    if keywords.len() > 1 {
        result.add_warning(format!(
            "Service type '{}' matches several families ({}); using template {}",
            visit.service_type,
            keywords.join(", "),
            template
        ));
    }

    result
}

/// Validate the pieces produced for a visit.
pub fn validate_layout(
    visit: &VisitRecord,
    template: TemplateId,
    pieces: &[Piece],
    config: &ShopConfig,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if pieces.is_empty() {
        result.add_error(format!("Template {}: No pieces laid out", template));
    }

    for piece in pieces {
        if !piece.has_positive_size() {
            result.add_error(format!(
                "Piece {}: Invalid dimensions ({})",
                piece.code,
                piece.dimensions_string()
            ));
        }
    }

    let check = reconstruction(visit, template, pieces, config);
    if !check.holds() {
        result.add_warning(format!(
            "Template {}: pieces rebuild {:.3}m instead of {:.3}m",
            template, check.rebuilt, check.expected
        ));
    }

    result
}

/// Reject a visit the template cannot lay out, with the first broken rule.
pub fn check_visit(visit: &VisitRecord, template: TemplateId, config: &ShopConfig) -> Result<()> {
    match visit_errors(visit, template, config).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
