//! Data model types for visit records and glass projects.

mod piece;
mod project;
mod template;
mod visit;

pub use piece::{Piece, PieceKind};
pub use project::ProjectResult;
pub use template::TemplateId;
pub use visit::{Client, VisitRecord};
