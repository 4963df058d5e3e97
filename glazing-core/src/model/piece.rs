//! Piece definition representing one fabricable glass unit.

use serde::{Deserialize, Serialize};

/// Role of a glass piece in the installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Fixed, non-operable pane.
    Fixed,
    /// Sliding or pivot door.
    Door,
    /// Sliding wall leaf.
    Leaf,
    /// Plain panel (mirror, generic module).
    #[default]
    Panel,
}

/// A single glass piece, dimensions in meters at millimeter resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Code unique within the project ("F01", "P02").
    pub code: String,
    /// Piece role.
    pub kind: PieceKind,
    /// Installation slot ("left fixed", "face 2 leaf 3").
    pub position: String,
    /// Width in meters.
    pub width: f64,
    /// Height in meters.
    pub height: f64,
}

impl Piece {
    /// Create a new piece.
    pub fn new(
        code: impl Into<String>,
        kind: PieceKind,
        position: impl Into<String>,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            code: code.into(),
            kind,
            position: position.into(),
            width,
            height,
        }
    }

    /// Glass area in square meters.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether both dimensions are strictly positive.
    pub fn has_positive_size(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Get display dimensions (width x height).
    pub fn dimensions_string(&self) -> String {
        format!("{:.3} x {:.3}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        let piece = Piece::new("F01", PieceKind::Fixed, "left fixed", 0.56, 1.95);
        let json = serde_json::to_value(&piece).unwrap();
        assert_eq!(json["kind"], "fixed");
        assert_eq!(json["code"], "F01");
    }

    #[test]
    fn test_dimensions_string() {
        let piece = Piece::new("P01", PieceKind::Door, "sliding door", 0.61, 1.95);
        assert_eq!(piece.dimensions_string(), "0.610 x 1.950");
    }

    #[test]
    fn test_has_positive_size() {
        assert!(Piece::new("M01", PieceKind::Panel, "", 0.5, 2.0).has_positive_size());
        assert!(!Piece::new("F01", PieceKind::Fixed, "", -0.01, 2.0).has_positive_size());
    }
}
