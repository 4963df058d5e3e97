//! Shower box layouts: clearances subtracted, sliding leaves overlap.

use crate::config::rounding::round_mm;
use crate::config::ShopConfig;
use crate::model::{Piece, PieceKind, VisitRecord};

use super::piece_code;

/// Glass height after the top/bottom clearance.
fn usable_height(visit: &VisitRecord, config: &ShopConfig) -> f64 {
    round_mm(visit.height - config.height_clearance)
}

/// Fixed and sliding door widths for one fixed/door pair spanning the opening.
///
/// The door is wider than the fixed panel by exactly one overlap, so
/// `fixed + door == width - lateral_clearance`.
fn sliding_pair_widths(visit: &VisitRecord, config: &ShopConfig) -> (f64, f64) {
    let fixed = round_mm((visit.width - config.lateral_clearance - config.leaf_overlap) / 2.0);
    let door = round_mm(fixed + config.leaf_overlap);
    (fixed, door)
}

/// Two sliding doors between two fixed panels.
pub fn box_2door_2fixed(visit: &VisitRecord, config: &ShopConfig) -> Vec<Piece> {
    let height = usable_height(visit, config);
    let (fixed, door) = sliding_pair_widths(visit, config);

    vec![
        Piece::new(piece_code('F', 1), PieceKind::Fixed, "left fixed", fixed, height),
        Piece::new(piece_code('P', 1), PieceKind::Door, "sliding door 1", door, height),
        Piece::new(piece_code('P', 2), PieceKind::Door, "sliding door 2", door, height),
        Piece::new(piece_code('F', 2), PieceKind::Fixed, "right fixed", fixed, height),
    ]
}

/// One lateral fixed panel and one sliding door.
pub fn box_6(visit: &VisitRecord, config: &ShopConfig) -> Vec<Piece> {
    let height = usable_height(visit, config);
    let (fixed, door) = sliding_pair_widths(visit, config);

    vec![
        Piece::new(piece_code('F', 1), PieceKind::Fixed, "lateral fixed", fixed, height),
        Piece::new(piece_code('P', 1), PieceKind::Door, "sliding door", door, height),
    ]
}

/// Pivot door sized as a share of the span, fixed panel takes the rest.
pub fn box_1door_1fixed(visit: &VisitRecord, config: &ShopConfig) -> Vec<Piece> {
    let height = usable_height(visit, config);
    let door = round_mm(visit.width * config.pivot_door_ratio);
    let fixed = round_mm(visit.width - config.lateral_clearance - door);

    vec![
        Piece::new(piece_code('P', 1), PieceKind::Door, "pivot door", door, height),
        Piece::new(piece_code('F', 1), PieceKind::Fixed, "lateral fixed", fixed, height),
    ]
}

/// Two equal faces meeting at the corner, each with a fixed panel and a door.
pub fn box_corner(visit: &VisitRecord, config: &ShopConfig) -> Vec<Piece> {
    let height = usable_height(visit, config);
    let face = visit.width / 2.0;
    let fixed = round_mm(face * config.corner_fixed_ratio);
    let door = round_mm(face - fixed);

    let mut pieces = Vec::with_capacity(4);
    for n in 1..=2 {
        pieces.push(Piece::new(
            piece_code('F', n),
            PieceKind::Fixed,
            format!("corner face {} fixed", n),
            fixed,
            height,
        ));
        pieces.push(Piece::new(
            piece_code('P', n),
            PieceKind::Door,
            format!("corner face {} door", n),
            door,
            height,
        ));
    }
    pieces
}
