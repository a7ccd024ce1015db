//! Frontend Models
//!
//! Data structures matching the Ecoleta backend and the IBGE geography API.

use serde::{Deserialize, Serialize};

/// Sentinel value meaning "no selection" for the UF and city selectors
pub const UNSELECTED: &str = "0";

/// Collection item category (matches backend `GET /items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub image_url: String,
    pub name: String,
}

/// Federative unit as returned by IBGE `/estados`
#[derive(Debug, Clone, Deserialize)]
pub struct FederativeUnit {
    pub sigla: String,
}

/// Municipality as returned by IBGE `/estados/{uf}/municipios`
#[derive(Debug, Clone, Deserialize)]
pub struct Municipality {
    pub nome: String,
}

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Contact fields of the point form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Whatsapp,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Whatsapp];

    /// Input `name` attribute and multipart field name
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Whatsapp => "whatsapp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "whatsapp" => Some(FormField::Whatsapp),
            _ => None,
        }
    }
}

/// Free-text contact data entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Whatsapp => &self.whatsapp,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Whatsapp => self.whatsapp = value,
        }
    }
}

/// Metadata of the image chosen in the drop zone.
/// The binary handle itself stays with the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedImage {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}
