use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AppError;

/// Kinds of real-estate unit managed by the dashboard.
/// Wire format is the lowercase code (`"apartment"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Apartment,
    Office,
    House,
}

impl PropertyType {
    /// Returns the lowercase code used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Office => "office",
            PropertyType::House => "house",
        }
    }

    /// Returns a capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Office => "Office",
            PropertyType::House => "House",
        }
    }

    /// All selectable property types.
    pub fn all() -> &'static [PropertyType] {
        &[
            PropertyType::Apartment,
            PropertyType::Office,
            PropertyType::House,
        ]
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PropertyType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apartment" => Ok(PropertyType::Apartment),
            "office" => Ok(PropertyType::Office),
            "house" => Ok(PropertyType::House),
            _ => Err(AppError::DataError(format!("Invalid property type: {s}"))),
        }
    }
}

/// A managed property as returned by the backend.
/// `id` and `created_at` are server-assigned; the server is the source
/// of truth for both.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub floor_area_m2: f64,
    pub year_of_construction: i32,
    pub number_of_inhabitants: u32,
    pub ceiling_height_m: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating or updating a property.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PropertyCreate {
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub floor_area_m2: f64,
    pub year_of_construction: i32,
    pub number_of_inhabitants: u32,
    pub ceiling_height_m: f64,
}
