//! TemplateId - Named layout templates.

use serde::{Deserialize, Serialize};

/// Layout template chosen for a visit.
///
/// The set is closed: every algorithm in the layout generator matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemplateId {
    /// Shower box wrapping a corner, fixed panel and door on each face.
    #[serde(rename = "box_corner")]
    BoxCorner,
    /// Shower box with two sliding doors between two fixed panels.
    #[serde(rename = "box_2door_2fixed")]
    Box2Door2Fixed,
    /// Shower box with a pivot door and one fixed panel.
    #[serde(rename = "box_1door_1fixed")]
    Box1Door1Fixed,
    /// Shower box with one sliding door and one fixed panel.
    #[serde(rename = "box_6")]
    Box6,
    /// Straight balcony sliding glass wall.
    #[serde(rename = "sliding_wall_straight")]
    SlidingWallStraight,
    /// Balcony sliding glass wall wrapping a corner.
    #[serde(rename = "sliding_wall_corner")]
    SlidingWallCorner,
    /// Single rectangular mirror.
    #[serde(rename = "mirror_rect")]
    MirrorRect,
    /// Catch-all: equal panels.
    #[default]
    #[serde(rename = "generic")]
    Generic,
}

impl TemplateId {
    /// Every template, in declaration order.
    pub const ALL: [TemplateId; 8] = [
        TemplateId::BoxCorner,
        TemplateId::Box2Door2Fixed,
        TemplateId::Box1Door1Fixed,
        TemplateId::Box6,
        TemplateId::SlidingWallStraight,
        TemplateId::SlidingWallCorner,
        TemplateId::MirrorRect,
        TemplateId::Generic,
    ];

    /// Wire identifier ("box_2door_2fixed").
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::BoxCorner => "box_corner",
            TemplateId::Box2Door2Fixed => "box_2door_2fixed",
            TemplateId::Box1Door1Fixed => "box_1door_1fixed",
            TemplateId::Box6 => "box_6",
            TemplateId::SlidingWallStraight => "sliding_wall_straight",
            TemplateId::SlidingWallCorner => "sliding_wall_corner",
            TemplateId::MirrorRect => "mirror_rect",
            TemplateId::Generic => "generic",
        }
    }

    /// Whether the template belongs to the shower box family.
    pub fn is_box_family(&self) -> bool {
        matches!(
            self,
            TemplateId::BoxCorner
                | TemplateId::Box2Door2Fixed
                | TemplateId::Box1Door1Fixed
                | TemplateId::Box6
        )
    }

    /// Model label shown on the project ("Modelo BOX_6").
    pub fn model_label(&self) -> String {
        format!("Modelo {}", self.as_str().to_uppercase())
    }

    /// Report sentence describing the chosen model.
    pub fn report_sentence(&self) -> &'static str {
        match self {
            TemplateId::BoxCorner => {
                "The selected model is a corner shower box, with a fixed panel and a sliding door on each of the two faces."
            }
            TemplateId::Box2Door2Fixed => {
                "The selected model is a four-panel shower box (two sliding doors between two fixed panels), giving a wider passage and better sealing."
            }
            TemplateId::Box1Door1Fixed => {
                "The selected model is a shower box with a pivot door and one lateral fixed panel."
            }
            TemplateId::Box6 => {
                "The selected model is a straight shower box with one sliding door and one lateral fixed panel."
            }
            TemplateId::SlidingWallStraight => {
                "The selected model is a straight sliding glass wall split into equal modules sized for safe transport and handling."
            }
            TemplateId::SlidingWallCorner => {
                "The selected model is a corner sliding glass wall, with the modules of each face laid out independently."
            }
            TemplateId::MirrorRect => {
                "The selected model is a single rectangular mirror covering the full opening."
            }
            TemplateId::Generic => {
                "No specific model matched the service type; the opening was split into equal generic panels."
            }
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
