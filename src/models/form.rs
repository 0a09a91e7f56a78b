use super::property::{Property, PropertyCreate, PropertyType};

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Address,
    FloorArea,
    YearOfConstruction,
    Inhabitants,
    CeilingHeight,
}

/// A field-level validation failure. Surfaced inline next to the
/// offending input; submission is aborted while one is present.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FormError {
    pub field: FormField,
    pub message: String,
}

impl FormError {
    fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub const MIN_YEAR: i32 = 1800;
pub const MAX_YEAR: i32 = 2030;
pub const MAX_INHABITANTS: u32 = 50;
pub const MIN_CEILING_M: f64 = 1.5;
pub const MAX_CEILING_M: f64 = 6.0;

/// Raw form state: every numeric field is held as the string the user
/// typed, so partial input never panics and parse failures map to
/// field errors on submit.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PropertyDraft {
    pub name: String,
    pub address: String,
    pub kind: PropertyType,
    pub floor_area_m2: String,
    pub year_of_construction: String,
    pub number_of_inhabitants: String,
    pub ceiling_height_m: String,
}

impl PropertyDraft {
    /// Pre-fills the draft from an existing property (edit mode).
    pub fn from_property(property: &Property) -> Self {
        Self {
            name: property.name.clone(),
            address: property.address.clone(),
            kind: property.kind,
            floor_area_m2: property.floor_area_m2.to_string(),
            year_of_construction: property.year_of_construction.to_string(),
            number_of_inhabitants: property.number_of_inhabitants.to_string(),
            ceiling_height_m: property.ceiling_height_m.to_string(),
        }
    }

    /// Parses and validates the draft into a request body. Returns the
    /// first violation; no network request may be issued while this
    /// fails.
    pub fn validate(&self) -> Result<PropertyCreate, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::new(
                FormField::Name,
                "Property name is required",
            ));
        }

        let address = self.address.trim();
        if address.is_empty() {
            return Err(FormError::new(FormField::Address, "Address is required"));
        }

        let floor_area_m2 = self.floor_area_m2.trim().parse::<f64>().unwrap_or(0.0);
        if floor_area_m2 <= 0.0 {
            return Err(FormError::new(
                FormField::FloorArea,
                "Floor area must be greater than 0",
            ));
        }

        let year_of_construction =
            self.year_of_construction.trim().parse::<i32>().map_err(|_| {
                FormError::new(
                    FormField::YearOfConstruction,
                    "Year of construction must be a whole number",
                )
            })?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year_of_construction) {
            return Err(FormError::new(
                FormField::YearOfConstruction,
                format!("Year of construction must be between {MIN_YEAR} and {MAX_YEAR}"),
            ));
        }

        let number_of_inhabitants =
            self.number_of_inhabitants.trim().parse::<u32>().map_err(|_| {
                FormError::new(
                    FormField::Inhabitants,
                    "Number of inhabitants must be a whole number",
                )
            })?;
        if number_of_inhabitants > MAX_INHABITANTS {
            return Err(FormError::new(
                FormField::Inhabitants,
                format!("Number of inhabitants must be at most {MAX_INHABITANTS}"),
            ));
        }

        let ceiling_height_m = self.ceiling_height_m.trim().parse::<f64>().map_err(|_| {
            FormError::new(
                FormField::CeilingHeight,
                "Ceiling height must be a number",
            )
        })?;
        if !(MIN_CEILING_M..=MAX_CEILING_M).contains(&ceiling_height_m) {
            return Err(FormError::new(
                FormField::CeilingHeight,
                format!("Ceiling height must be between {MIN_CEILING_M} and {MAX_CEILING_M} metres"),
            ));
        }

        Ok(PropertyCreate {
            name: name.to_string(),
            address: address.to_string(),
            kind: self.kind,
            floor_area_m2,
            year_of_construction,
            number_of_inhabitants,
            ceiling_height_m,
        })
    }
}
