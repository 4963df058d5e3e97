//! Technical report text and safety alerts.

use crate::config::ShopConfig;
use crate::model::{TemplateId, VisitRecord};

/// Compose the technical report and its alerts for a visit.
///
/// The report is a single paragraph: visit, opening size, glass and
/// profile, the template's sentence, then the technician's notes.
pub fn report(
    visit: &VisitRecord,
    template: TemplateId,
    config: &ShopConfig,
) -> (String, Vec<String>) {
    let mut lines: Vec<String> = Vec::with_capacity(5);

    lines.push(format!(
        "A technical visit was carried out at {} for {}.",
        visit.environment,
        visit.service_type_lower()
    ));
    lines.push(format!(
        "The opening measures approximately {:.2}m wide by {:.2}m high.",
        visit.width, visit.height
    ));
    lines.push(format!(
        "{} glass, {}mm thick, will be used with {} profiles.",
        visit.glass_type, visit.glass_thickness, visit.profile_color
    ));
    lines.push(template.report_sentence().to_string());

    if let Some(notes) = visit.notes_text() {
        lines.push(format!("Technician notes: {}", notes));
    }

    let alerts: Vec<String> = unevenness_alert(visit, config).into_iter().collect();

    (lines.join(" "), alerts)
}

/// Shimming alert when the mounting surface deviates beyond the threshold.
///
/// The comparison is strict: a deviation equal to the threshold is accepted.
pub fn unevenness_alert(visit: &VisitRecord, config: &ShopConfig) -> Option<String> {
    if visit.unevenness > config.unevenness_alert_cm {
        Some(format!(
            "Wall unevenness of {:.1} cm: shims are required and plumb must be checked before installation.",
            visit.unevenness
        ))
    } else {
        None
    }
}
