//! Modular layouts: sliding walls, mirrors and generic openings.
//!
//! These are butt-glazed or single-pane, so no clearance or overlap is
//! subtracted and the full opening height is used.

use crate::config::rounding::round_mm;
use crate::config::{ShopConfig, EPS, MAX_MODULES};
use crate::model::{Piece, PieceKind, VisitRecord};

use super::piece_code;

/// Number of modules needed so none is wider than `cap`, measured on the
/// span rounded to millimeters. Never less than one, never more than
/// `MAX_MODULES` (openings that large are rejected before layout).
pub fn module_count(span: f64, cap: f64) -> usize {
    // guard against 3.6 / 1.2 landing just above 3
    let count = (round_mm(span) / cap - EPS).ceil();
    if count.is_finite() && count > 1.0 {
        count.min(MAX_MODULES) as usize
    } else {
        1
    }
}

/// Split a span into `count` equal pieces labeled `{prefix}01..`.
fn equal_modules(
    span: f64,
    height: f64,
    count: usize,
    prefix: char,
    kind: PieceKind,
    position: impl Fn(usize) -> String,
) -> Vec<Piece> {
    let width = round_mm(span / count as f64);
    let height = round_mm(height);

    (1..=count)
        .map(|n| Piece::new(piece_code(prefix, n), kind, position(n), width, height))
        .collect()
}

/// Straight sliding glass wall, modules capped at the shop's module width.
pub fn sliding_wall_straight(visit: &VisitRecord, config: &ShopConfig) -> Vec<Piece> {
    let count = module_count(visit.width, config.module_cap);
    equal_modules(visit.width, visit.height, count, 'L', PieceKind::Leaf, |n| {
        format!("leaf {}", n)
    })
}

/// Corner sliding glass wall: each half of the span is laid out as a straight wall.
pub fn sliding_wall_corner(visit: &VisitRecord, config: &ShopConfig) -> Vec<Piece> {
    let face = visit.width / 2.0;
    let count = module_count(face, config.module_cap);

    let mut pieces = equal_modules(face, visit.height, count, 'A', PieceKind::Leaf, |n| {
        format!("corner face 1 leaf {}", n)
    });
    pieces.extend(equal_modules(
        face,
        visit.height,
        count,
        'B',
        PieceKind::Leaf,
        |n| format!("corner face 2 leaf {}", n),
    ));
    pieces
}

/// One mirror covering the whole opening.
pub fn mirror_rect(visit: &VisitRecord, _config: &ShopConfig) -> Vec<Piece> {
    vec![Piece::new(
        piece_code('E', 1),
        PieceKind::Panel,
        "mirror",
        round_mm(visit.width),
        round_mm(visit.height),
    )]
}

/// Equal panels, one to three depending on the opening width.
pub fn generic(visit: &VisitRecord, config: &ShopConfig) -> Vec<Piece> {
    let count = if visit.width <= config.generic_single_max {
        1
    } else if visit.width <= config.generic_double_max {
        2
    } else {
        3
    };

    equal_modules(visit.width, visit.height, count, 'M', PieceKind::Panel, |n| {
        format!("module {}", n)
    })
}
