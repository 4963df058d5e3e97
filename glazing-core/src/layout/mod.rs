//! Piece layout for each template.

mod box_family;
mod modules;

pub use box_family::*;
pub use modules::*;

use crate::config::{float_cmp, ShopConfig, RECONSTRUCTION_EPS};
use crate::model::{Piece, TemplateId, VisitRecord};

/// Piece code from a prefix letter and 1-based index ("F01").
pub(crate) fn piece_code(prefix: char, index: usize) -> String {
    format!("{}{:02}", prefix, index)
}

/// Lay out the pieces of a template, in installation order.
///
/// Pure and total: the input is not validated here, see
/// [`crate::validation::check_visit`].
pub fn layout(visit: &VisitRecord, template: TemplateId, config: &ShopConfig) -> Vec<Piece> {
    let pieces = match template {
        TemplateId::BoxCorner => box_corner(visit, config),
        TemplateId::Box2Door2Fixed => box_2door_2fixed(visit, config),
        TemplateId::Box1Door1Fixed => box_1door_1fixed(visit, config),
        TemplateId::Box6 => box_6(visit, config),
        TemplateId::SlidingWallStraight => sliding_wall_straight(visit, config),
        TemplateId::SlidingWallCorner => sliding_wall_corner(visit, config),
        TemplateId::MirrorRect => mirror_rect(visit, config),
        TemplateId::Generic => generic(visit, config),
    };

    tracing::debug!(template = %template, pieces = pieces.len(), "laid out pieces");
    pieces
}

/// Width rebuilt from a layout compared with the width it should rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reconstruction {
    /// Width the pieces should cover.
    pub expected: f64,
    /// Width the pieces actually cover.
    pub rebuilt: f64,
    /// Allowed deviation (rounding of each contributing piece).
    pub tolerance: f64,
}

impl Reconstruction {
    /// Absolute deviation between rebuilt and expected width.
    pub fn deviation(&self) -> f64 {
        (self.rebuilt - self.expected).abs()
    }

    /// Whether the rebuilt width is within tolerance.
    pub fn holds(&self) -> bool {
        float_cmp::within(self.rebuilt, self.expected, self.tolerance)
    }
}

/// Rebuild the opening width from a template's pieces.
///
/// Box pairs (a fixed panel plus its sliding or pivot door) cover the
/// opening minus the lateral clearance, the door's overlap included. In the
/// four-panel box each side pair covers it on its own track, so only the left
/// pair is summed. Corner boxes, walls, mirrors and generic panels cover the
/// full width.
pub fn reconstruction(
    visit: &VisitRecord,
    template: TemplateId,
    pieces: &[Piece],
    config: &ShopConfig,
) -> Reconstruction {
    let (contributing, expected) = match template {
        TemplateId::Box2Door2Fixed => (
            &pieces[..pieces.len().min(2)],
            visit.width - config.lateral_clearance,
        ),
        TemplateId::Box6 | TemplateId::Box1Door1Fixed => {
            (pieces, visit.width - config.lateral_clearance)
        }
        TemplateId::BoxCorner
        | TemplateId::SlidingWallStraight
        | TemplateId::SlidingWallCorner
        | TemplateId::MirrorRect
        | TemplateId::Generic => (pieces, visit.width),
    };

    Reconstruction {
        expected,
        rebuilt: contributing.iter().map(|p| p.width).sum(),
        tolerance: contributing.len() as f64 * RECONSTRUCTION_EPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::PieceKind;

    fn config() -> ShopConfig {
        ShopConfig::default()
    }

    #[test]
    fn test_piece_code() {
        assert_eq!(piece_code('F', 1), "F01");
        assert_eq!(piece_code('L', 12), "L12");
    }

    // ==================== dispatch ====================

    #[test]
    fn test_layout_piece_counts() {
        let visit = VisitRecord::new("any", 3.5, 2.0);
        let expected = [
            (TemplateId::BoxCorner, 4),
            (TemplateId::Box2Door2Fixed, 4),
            (TemplateId::Box1Door1Fixed, 2),
            (TemplateId::Box6, 2),
            (TemplateId::SlidingWallStraight, 3),
            (TemplateId::SlidingWallCorner, 4),
            (TemplateId::MirrorRect, 1),
            (TemplateId::Generic, 2),
        ];
        for (template, count) in expected {
            assert_eq!(layout(&visit, template, &config()).len(), count, "{}", template);
        }
    }

    #[test]
    fn test_layout_is_idempotent() {
        let visit = VisitRecord::new("any", 2.345, 2.1);
        for template in TemplateId::ALL {
            let first = layout(&visit, template, &config());
            let second = layout(&visit, template, &config());
            assert_eq!(first, second);
            for (a, b) in first.iter().zip(&second) {
                assert_eq!(a.width.to_bits(), b.width.to_bits());
                assert_eq!(a.height.to_bits(), b.height.to_bits());
            }
        }
    }

    #[test]
    fn test_layout_codes_unique() {
        let visit = VisitRecord::new("any", 7.3, 2.4);
        for template in TemplateId::ALL {
            let pieces = layout(&visit, template, &config());
            let mut codes: Vec<_> = pieces.iter().map(|p| p.code.clone()).collect();
            codes.sort();
            codes.dedup();
            assert_eq!(codes.len(), pieces.len(), "{}", template);
        }
    }

    // ==================== reconstruction ====================

    #[test]
    fn test_reconstruction_holds_for_every_template() {
        for mm in (900..=8000).step_by(71) {
            let visit = VisitRecord::new("any", mm as f64 / 1000.0, 2.0);
            for template in TemplateId::ALL {
                let pieces = layout(&visit, template, &config());
                let check = reconstruction(&visit, template, &pieces, &config());
                assert!(
                    check.holds(),
                    "{} at {}m: {:?}",
                    template,
                    visit.width,
                    check
                );
            }
        }
    }

    #[test]
    fn test_reconstruction_box_family_exact_for_millimeter_input() {
        let visit = VisitRecord::new("box", 1.20, 2.00);
        for template in [
            TemplateId::Box2Door2Fixed,
            TemplateId::Box6,
            TemplateId::Box1Door1Fixed,
        ] {
            let pieces = layout(&visit, template, &config());
            let check = reconstruction(&visit, template, &pieces, &config());
            assert!(approx_eq(check.rebuilt, 1.17), "{}", template);
            assert!(check.deviation() < 1e-6);
        }
    }

    #[test]
    fn test_reconstruction_detects_tampered_layout() {
        let visit = VisitRecord::new("outro", 2.0, 2.0);
        let mut pieces = layout(&visit, TemplateId::Generic, &config());
        pieces.push(Piece::new("M03", PieceKind::Panel, "extra", 0.1, 2.0));
        let check = reconstruction(&visit, TemplateId::Generic, &pieces, &config());
        assert!(!check.holds());
    }
}
