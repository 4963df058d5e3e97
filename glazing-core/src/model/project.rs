//! ProjectResult - The generated glass project.

use super::{Piece, TemplateId};
use serde::{Deserialize, Serialize};

/// Complete project for one visit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResult {
    /// Chosen template.
    pub template_id: TemplateId,
    /// Model label ("Modelo BOX_2DOOR_2FIXED").
    pub model_description: String,
    /// Pieces in installation order (left to right, face by face).
    pub pieces: Vec<Piece>,
    /// Glass summary ("incolor 8mm").
    pub glass: String,
    /// Profile color.
    pub profile: String,
    /// Technical report text.
    pub report: String,
    /// Safety alerts, in evaluation order.
    pub alerts: Vec<String>,
}

impl ProjectResult {
    /// Total glass area in square meters.
    pub fn glass_area(&self) -> f64 {
        self.pieces.iter().map(Piece::area).sum()
    }
}
