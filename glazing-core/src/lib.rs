//! glazing-core - Layout engine turning technical visits into glass projects.
//!
//! A technician records an opening (width, height, corner, door and fixed
//! panel counts, glass and profile). This library picks a layout template,
//! splits the opening into fabricable pieces with the shop's clearances and
//! overlaps, and writes the technical report with its safety alerts.
//!
//! # Example
//!
//! ```
//! use glazing_core::{generate_project, ShopConfig, TemplateId, VisitRecord};
//!
//! let visit = VisitRecord {
//!     door_count: Some(2),
//!     fixed_count: Some(2),
//!     ..VisitRecord::new("Box", 1.20, 2.00)
//! };
//! let project = generate_project(&visit, &ShopConfig::default()).unwrap();
//! assert_eq!(project.template_id, TemplateId::Box2Door2Fixed);
//! assert_eq!(project.pieces.len(), 4);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use classify::classify;
pub use config::ShopConfig;
pub use error::{ErrorCode, ProjectError, Result};
pub use layout::{layout, reconstruction, Reconstruction};
pub use model::{Client, Piece, PieceKind, ProjectResult, TemplateId, VisitRecord};
pub use report::report;
pub use validation::{check_visit, validate_layout, validate_visit, ValidationResult};

use config::rounding::round_mm;
use validation::{required_height, required_width};

/// Generate the complete project for a visit.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Classify the visit into a template
/// 2. Reject dimensions the template cannot lay out
/// 3. Lay out the pieces
/// 4. Write the report and alerts
pub fn generate_project(visit: &VisitRecord, config: &ShopConfig) -> Result<ProjectResult> {
    let template = classify(visit);

    let mut validation = validate_visit(visit, template, config);
    check_visit(visit, template, config)?;

    let pieces = layout(visit, template, config);

    validation.merge(validate_layout(visit, template, &pieces, config));
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &validation.errors {
        tracing::error!("{}", error);
    }

    // millimeter rounding can still collapse a piece that passed the clearance check
    if let Some(piece) = pieces.iter().find(|p| !p.has_positive_size()) {
        let (dimension, available, size, required) = if piece.width <= 0.0 {
            ("width", visit.width, piece.width, required_width(template, config))
        } else {
            ("height", visit.height, piece.height, required_height(template, config))
        };
        if required <= 0.0 {
            return Err(ProjectError::InvalidDimension {
                field: format!("{} of piece {}", dimension, piece.code),
                value: size,
            });
        }
        return Err(ProjectError::IncompatibleClearance {
            template,
            dimension: dimension.to_string(),
            available,
            required: round_mm(required),
        });
    }

    let (report_text, alerts) = report(visit, template, config);

    Ok(ProjectResult {
        template_id: template,
        model_description: template.model_label(),
        pieces,
        glass: visit.glass_summary(),
        profile: visit.profile_color.clone(),
        report: report_text,
        alerts,
    })
}

/// Parse a visit record from JSON and generate its project.
pub fn generate_project_from_json(json: &str, config: &ShopConfig) -> Result<ProjectResult> {
    let visit: VisitRecord = serde_json::from_str(json)?;
    generate_project(&visit, config)
}
