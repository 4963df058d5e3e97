//! VisitRecord - Measurements taken by the technician on site.

use serde::{Deserialize, Serialize};

/// Customer identity, carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Customer name.
    #[serde(alias = "nome")]
    pub name: String,
    /// Customer city.
    #[serde(default, alias = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Technical visit record for one opening.
///
/// Field names follow the JSON payload (camelCase). The Portuguese names
/// used by the shop's earlier forms are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    /// Free-text service category ("Box reto", "Sacada", "Espelho", ...).
    #[serde(alias = "tipoServico")]
    pub service_type: String,
    /// Location label, used in the report only.
    #[serde(alias = "ambiente")]
    pub environment: String,
    /// Opening width in meters.
    #[serde(alias = "largura")]
    pub width: f64,
    /// Opening height in meters.
    #[serde(alias = "altura")]
    pub height: f64,
    /// Whether the installation wraps a 90 degree corner.
    #[serde(default, alias = "temCanto")]
    pub has_corner: bool,
    /// Number of doors requested (box family only).
    #[serde(default, alias = "numPortas")]
    pub door_count: Option<u32>,
    /// Number of fixed panels requested (box family only).
    #[serde(default, alias = "numFixos")]
    pub fixed_count: Option<u32>,
    /// Glass type ("incolor", "fume", ...).
    #[serde(alias = "tipoVidro")]
    pub glass_type: String,
    /// Glass thickness in millimeters.
    #[serde(alias = "espessura")]
    pub glass_thickness: u32,
    /// Aluminium profile color.
    #[serde(alias = "perfil")]
    pub profile_color: String,
    /// Floor/wall deviation in centimeters.
    #[serde(default, alias = "desnivel")]
    pub unevenness: f64,
    /// Technician notes.
    #[serde(default, alias = "observacoes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Customer identity.
    #[serde(alias = "cliente")]
    pub client: Client,
}

impl VisitRecord {
    /// Create a visit record with the fields the layout engine reads.
    pub fn new(service_type: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            service_type: service_type.into(),
            width,
            height,
            ..Default::default()
        }
    }

    /// Service type lowercased for keyword matching.
    pub fn service_type_lower(&self) -> String {
        self.service_type.to_lowercase()
    }

    /// Technician notes, if any non-blank text was recorded.
    pub fn notes_text(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Glass summary as printed on the project ("incolor 8mm").
    pub fn glass_summary(&self) -> String {
        format!("{} {}mm", self.glass_type, self.glass_thickness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "serviceType": "Box reto",
            "environment": "Suite",
            "width": 1.2,
            "height": 2.0,
            "glassType": "incolor",
            "glassThickness": 8,
            "profileColor": "preto",
            "client": {"name": "Ana"}
        }"#;
        let visit: VisitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(visit.service_type, "Box reto");
        assert!(!visit.has_corner);
        assert_eq!(visit.door_count, None);
        assert_eq!(visit.unevenness, 0.0);
        assert_eq!(visit.client.city, None);
    }

    #[test]
    fn test_deserialize_portuguese_aliases() {
        let json = r#"{
            "tipoServico": "Sacada",
            "ambiente": "Varanda",
            "largura": 4.5,
            "altura": 2.1,
            "temCanto": true,
            "numPortas": 2,
            "numFixos": 2,
            "tipoVidro": "temperado",
            "espessura": 10,
            "perfil": "branco",
            "desnivel": 0.8,
            "observacoes": "piso irregular",
            "cliente": {"nome": "Joao", "cidade": "Campinas"}
        }"#;
        let visit: VisitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(visit.environment, "Varanda");
        assert!(visit.has_corner);
        assert_eq!(visit.door_count, Some(2));
        assert_eq!(visit.glass_thickness, 10);
        assert_eq!(visit.unevenness, 0.8);
        assert_eq!(visit.client.city.as_deref(), Some("Campinas"));
    }

    #[test]
    fn test_deserialize_rejects_missing_width() {
        let json = r#"{
            "serviceType": "Box",
            "environment": "Suite",
            "height": 2.0,
            "glassType": "incolor",
            "glassThickness": 8,
            "profileColor": "preto",
            "client": {"name": "Ana"}
        }"#;
        assert!(serde_json::from_str::<VisitRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_height() {
        let json = r#"{
            "serviceType": "Box",
            "environment": "Suite",
            "width": 1.2,
            "height": "alto",
            "glassType": "incolor",
            "glassThickness": 8,
            "profileColor": "preto",
            "client": {"name": "Ana"}
        }"#;
        assert!(serde_json::from_str::<VisitRecord>(json).is_err());
    }

    #[test]
    fn test_notes_text_ignores_blank() {
        let mut visit = VisitRecord::new("Box", 1.0, 2.0);
        assert_eq!(visit.notes_text(), None);
        visit.notes = Some("   ".to_string());
        assert_eq!(visit.notes_text(), None);
        visit.notes = Some(" check plumb ".to_string());
        assert_eq!(visit.notes_text(), Some("check plumb"));
    }

    #[test]
    fn test_glass_summary() {
        let visit = VisitRecord {
            glass_type: "fume".to_string(),
            glass_thickness: 8,
            ..Default::default()
        };
        assert_eq!(visit.glass_summary(), "fume 8mm");
    }
}
