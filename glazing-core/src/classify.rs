//! Template classification from visit attributes.

use crate::model::{TemplateId, VisitRecord};

/// Service keyword for shower boxes.
pub const KEYWORD_BOX: &str = "box";

/// Service keyword for balcony sliding glass walls.
pub const KEYWORD_BALCONY: &str = "sacada";

/// Service keyword for mirrors.
pub const KEYWORD_MIRROR: &str = "espelho";

/// Family keywords in evaluation order. The first match decides.
pub const FAMILY_KEYWORDS: [&str; 3] = [KEYWORD_BOX, KEYWORD_BALCONY, KEYWORD_MIRROR];

/// Pick the layout template for a visit.
///
/// Total and deterministic: anything unrecognised maps to
/// [`TemplateId::Generic`].
pub fn classify(visit: &VisitRecord) -> TemplateId {
    let service = visit.service_type_lower();

    let template = if service.contains(KEYWORD_BOX) {
        classify_box(visit)
    } else if service.contains(KEYWORD_BALCONY) {
        if visit.has_corner {
            TemplateId::SlidingWallCorner
        } else {
            TemplateId::SlidingWallStraight
        }
    } else if service.contains(KEYWORD_MIRROR) {
        TemplateId::MirrorRect
    } else {
        TemplateId::Generic
    };

    tracing::debug!(service = %visit.service_type, template = %template, "classified visit");
    template
}

/// Box family sub-variant from the corner flag and door/fixed counts.
fn classify_box(visit: &VisitRecord) -> TemplateId {
    if visit.has_corner {
        return TemplateId::BoxCorner;
    }

    match (visit.door_count, visit.fixed_count) {
        (Some(2), Some(2)) => TemplateId::Box2Door2Fixed,
        (Some(1), Some(1)) => TemplateId::Box1Door1Fixed,
        _ => TemplateId::Box6,
    }
}

/// Every family keyword contained in a service type, in evaluation order.
pub fn matched_keywords(service_type: &str) -> Vec<&'static str> {
    let service = service_type.to_lowercase();
    FAMILY_KEYWORDS
        .iter()
        .copied()
        .filter(|k| service.contains(k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(service: &str) -> VisitRecord {
        VisitRecord::new(service, 1.2, 2.0)
    }

    // ==================== Box family ====================

    #[test]
    fn test_box_corner_wins_over_counts() {
        let v = VisitRecord {
            has_corner: true,
            door_count: Some(2),
            fixed_count: Some(2),
            ..visit("Box de canto")
        };
        assert_eq!(classify(&v), TemplateId::BoxCorner);
    }

    #[test]
    fn test_box_two_doors_two_fixed() {
        let v = VisitRecord {
            door_count: Some(2),
            fixed_count: Some(2),
            ..visit("box")
        };
        assert_eq!(classify(&v), TemplateId::Box2Door2Fixed);
    }

    #[test]
    fn test_box_one_door_one_fixed() {
        let v = VisitRecord {
            door_count: Some(1),
            fixed_count: Some(1),
            ..visit("BOX frontal")
        };
        assert_eq!(classify(&v), TemplateId::Box1Door1Fixed);
    }

    #[test]
    fn test_box_without_counts_falls_through() {
        let v = visit("Box reto");
        assert_eq!(classify(&v), TemplateId::Box6);
    }

    #[test]
    fn test_box_partial_counts_falls_through() {
        let v = VisitRecord {
            door_count: Some(2),
            fixed_count: Some(1),
            ..visit("box")
        };
        assert_eq!(classify(&v), TemplateId::Box6);
    }

    // ==================== Other families ====================

    #[test]
    fn test_balcony_straight_and_corner() {
        assert_eq!(classify(&visit("Sacada")), TemplateId::SlidingWallStraight);
        let corner = VisitRecord {
            has_corner: true,
            ..visit("envidraçamento de SACADA")
        };
        assert_eq!(classify(&corner), TemplateId::SlidingWallCorner);
    }

    #[test]
    fn test_mirror_ignores_corner_flag() {
        let v = VisitRecord {
            has_corner: true,
            ..visit("Espelho banheiro")
        };
        assert_eq!(classify(&v), TemplateId::MirrorRect);
    }

    #[test]
    fn test_unknown_is_generic() {
        assert_eq!(classify(&visit("outro")), TemplateId::Generic);
        assert_eq!(classify(&visit("")), TemplateId::Generic);
    }

    // ==================== Keyword collisions ====================

    #[test]
    fn test_box_wins_over_balcony() {
        assert_eq!(classify(&visit("box sacada")), TemplateId::Box6);
        assert_eq!(classify(&visit("sacada com espelho")), TemplateId::SlidingWallStraight);
    }

    #[test]
    fn test_matched_keywords_in_evaluation_order() {
        assert_eq!(matched_keywords("Espelho na sacada"), vec!["sacada", "espelho"]);
        assert_eq!(matched_keywords("Box"), vec!["box"]);
        assert!(matched_keywords("janela").is_empty());
    }
}
