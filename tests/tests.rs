#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::rc::Rc;

    use property_dashboard::hooks::DataState;
    use property_dashboard::models::{
        energy::{EnergyData, EnergyReading},
        error::AppError,
        form::{FormField, PropertyDraft},
        property::{Property, PropertyType},
    };

    // Helper function to create a complete, valid draft
    fn valid_draft() -> PropertyDraft {
        PropertyDraft {
            name: "Centrum Apartment".to_string(),
            address: "Grote Markt 1, Groningen".to_string(),
            kind: PropertyType::Apartment,
            floor_area_m2: "78".to_string(),
            year_of_construction: "2008".to_string(),
            number_of_inhabitants: "2".to_string(),
            ceiling_height_m: "2.6".to_string(),
        }
    }

    // Helper function to create a reading sequence
    fn readings(values: &[f64]) -> Vec<EnergyReading> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &kwh)| EnergyReading {
                date: start + chrono::Days::new(i as u64),
                kwh_consumed: kwh,
            })
            .collect()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection refused".to_string());
        assert_eq!(error.to_string(), "API error: Connection refused");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("No readings available".to_string());
        assert_eq!(error.to_string(), "Data error: No readings available");
    }

    // ===== Property Type Tests =====

    #[test]
    fn test_property_type_parsing() {
        assert_eq!("apartment".parse::<PropertyType>().unwrap(), PropertyType::Apartment);
        assert_eq!("Office".parse::<PropertyType>().unwrap(), PropertyType::Office);
        assert_eq!("HOUSE".parse::<PropertyType>().unwrap(), PropertyType::House);
        assert!("castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_property_type_codes() {
        assert_eq!(PropertyType::Apartment.code(), "apartment");
        assert_eq!(PropertyType::Office.code(), "office");
        assert_eq!(PropertyType::House.code(), "house");
        assert_eq!(PropertyType::all().len(), 3);
    }

    #[test]
    fn test_property_type_wire_format() {
        let json = serde_json::to_value(PropertyType::House).unwrap();
        assert_eq!(json, serde_json::json!("house"));
    }

    // ===== Property Model Tests =====

    #[test]
    fn test_property_deserialization() {
        let json = r#"{
            "id": "11111111-1111-1111-1111-111111111111",
            "name": "Test Apartment",
            "address": "Grote Markt 1, Groningen",
            "type": "apartment",
            "floor_area_m2": 85.0,
            "year_of_construction": 2000,
            "number_of_inhabitants": 2,
            "ceiling_height_m": 2.5,
            "created_at": "2025-01-01T00:00:00Z"
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.name, "Test Apartment");
        assert_eq!(property.kind, PropertyType::Apartment);
        assert_eq!(property.floor_area_m2, 85.0);
        assert_eq!(property.year_of_construction, 2000);
        assert!(property.created_at.is_some());
    }

    #[test]
    fn test_property_deserialization_without_created_at() {
        let json = r#"{
            "id": "p1",
            "name": "Helpman Family Home",
            "address": "Helperzoom 12, Groningen",
            "type": "house",
            "floor_area_m2": 145.0,
            "year_of_construction": 1995,
            "number_of_inhabitants": 4,
            "ceiling_height_m": 2.9
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.kind, PropertyType::House);
        assert_eq!(property.created_at, None);
    }

    #[test]
    fn test_property_create_serializes_type_wire_name() {
        let payload = valid_draft().validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["type"], serde_json::json!("apartment"));
        assert_eq!(json["name"], serde_json::json!("Centrum Apartment"));
        assert_eq!(json["floor_area_m2"], serde_json::json!(78.0));
        assert!(json.get("kind").is_none());
        assert!(json.get("id").is_none());
    }

    // ===== Form Validation Tests =====

    #[test]
    fn test_empty_name_blocks_submission() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();

        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, FormField::Name);
        assert_eq!(err.message, "Property name is required");
    }

    #[test]
    fn test_empty_address_blocks_submission() {
        let mut draft = valid_draft();
        draft.address = String::new();

        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, FormField::Address);
        assert_eq!(err.message, "Address is required");
    }

    #[test]
    fn test_non_positive_floor_area_blocks_submission() {
        for value in ["0", "-5", "", "abc"] {
            let mut draft = valid_draft();
            draft.floor_area_m2 = value.to_string();

            let err = draft.validate().unwrap_err();
            assert_eq!(err.field, FormField::FloorArea);
            assert_eq!(err.message, "Floor area must be greater than 0");
        }
    }

    #[test]
    fn test_year_of_construction_range() {
        let mut draft = valid_draft();
        draft.year_of_construction = "1799".to_string();
        assert_eq!(
            draft.validate().unwrap_err().field,
            FormField::YearOfConstruction
        );

        draft.year_of_construction = "2031".to_string();
        assert_eq!(
            draft.validate().unwrap_err().field,
            FormField::YearOfConstruction
        );

        draft.year_of_construction = "1800".to_string();
        assert!(draft.validate().is_ok());

        draft.year_of_construction = "2030".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_year_of_construction_must_parse() {
        let mut draft = valid_draft();
        draft.year_of_construction = "next year".to_string();

        let err = draft.validate().unwrap_err();
        assert_eq!(err.field, FormField::YearOfConstruction);
    }

    #[test]
    fn test_inhabitants_range() {
        let mut draft = valid_draft();
        draft.number_of_inhabitants = "51".to_string();
        assert_eq!(draft.validate().unwrap_err().field, FormField::Inhabitants);

        // Negative numbers fail the unsigned parse
        draft.number_of_inhabitants = "-1".to_string();
        assert_eq!(draft.validate().unwrap_err().field, FormField::Inhabitants);

        draft.number_of_inhabitants = "0".to_string();
        assert!(draft.validate().is_ok());

        draft.number_of_inhabitants = "50".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_ceiling_height_range() {
        let mut draft = valid_draft();
        draft.ceiling_height_m = "1.4".to_string();
        assert_eq!(
            draft.validate().unwrap_err().field,
            FormField::CeilingHeight
        );

        draft.ceiling_height_m = "6.1".to_string();
        assert_eq!(
            draft.validate().unwrap_err().field,
            FormField::CeilingHeight
        );

        draft.ceiling_height_m = "1.5".to_string();
        assert!(draft.validate().is_ok());

        draft.ceiling_height_m = "6".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_valid_draft_produces_trimmed_payload() {
        let mut draft = valid_draft();
        draft.name = "  Centrum Apartment  ".to_string();

        let payload = draft.validate().unwrap();
        assert_eq!(payload.name, "Centrum Apartment");
        assert_eq!(payload.kind, PropertyType::Apartment);
        assert_eq!(payload.floor_area_m2, 78.0);
        assert_eq!(payload.year_of_construction, 2008);
        assert_eq!(payload.number_of_inhabitants, 2);
        assert_eq!(payload.ceiling_height_m, 2.6);
    }

    #[test]
    fn test_edit_mode_prefills_draft() {
        let property = Property {
            id: "p1".to_string(),
            name: "Paddepoel Studio".to_string(),
            address: "Zernikepark 4, Groningen".to_string(),
            kind: PropertyType::Apartment,
            floor_area_m2: 32.0,
            year_of_construction: 1985,
            number_of_inhabitants: 1,
            ceiling_height_m: 2.5,
            created_at: None,
        };

        let draft = PropertyDraft::from_property(&property);
        assert_eq!(draft.name, "Paddepoel Studio");
        assert_eq!(draft.address, "Zernikepark 4, Groningen");
        assert_eq!(draft.kind, PropertyType::Apartment);
        assert_eq!(draft.floor_area_m2, "32");
        assert_eq!(draft.year_of_construction, "1985");
        assert_eq!(draft.number_of_inhabitants, "1");
        assert_eq!(draft.ceiling_height_m, "2.5");

        // A round trip through validation reproduces the field values
        assert!(draft.validate().is_ok());
    }

    // ===== Energy Model Tests =====

    #[test]
    fn test_energy_data_deserialization() {
        let json = r#"{
            "property_id": "11111111-1111-1111-1111-111111111111",
            "readings": [
                {"date": "2025-01-01", "kwh_consumed": 12.5},
                {"date": "2025-01-02", "kwh_consumed": 11.8}
            ]
        }"#;

        let energy: EnergyData = serde_json::from_str(json).unwrap();
        assert_eq!(energy.readings.len(), 2);
        assert_eq!(
            energy.readings[0].date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(energy.readings[1].kwh_consumed, 11.8);
    }

    #[test]
    fn test_energy_stats_total_average_peak() {
        let energy = EnergyData::new("p1", readings(&[10.0, 20.0, 30.0]));

        let stats = energy.stats().unwrap();
        assert_eq!(stats.total, 60.0);
        assert_eq!(stats.average, 20.0);
        assert_eq!(stats.peak, 30.0);
        assert_eq!(stats.days, 3);
    }

    #[test]
    fn test_energy_stats_single_reading() {
        let energy = EnergyData::new("p1", readings(&[7.25]));

        let stats = energy.stats().unwrap();
        assert_eq!(stats.total, 7.25);
        assert_eq!(stats.average, 7.25);
        assert_eq!(stats.peak, 7.25);
        assert_eq!(stats.days, 1);
    }

    #[test]
    fn test_energy_stats_empty_is_error() {
        let energy = EnergyData::new("p1", vec![]);
        let err = energy.stats().unwrap_err();
        assert!(matches!(err, AppError::DataError(_)));
    }

    #[test]
    fn test_series_data_labels_and_rounding() {
        let energy = EnergyData::new(
            "p1",
            vec![
                EnergyReading {
                    date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                    kwh_consumed: 12.345,
                },
                EnergyReading {
                    date: NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
                    kwh_consumed: 9.999,
                },
            ],
        );

        let (labels, values) = energy.series_data();
        assert_eq!(labels, vec!["5 Jan", "14 Feb"]);
        assert_eq!(values, vec![12.35, 10.0]);
    }

    #[test]
    fn test_series_data_preserves_order() {
        let energy = EnergyData::new("p1", readings(&[1.0, 2.0, 3.0, 4.0]));

        let (labels, values) = energy.series_data();
        assert_eq!(labels.len(), 4);
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    // ===== Data State Tests =====

    #[test]
    fn test_data_state_loading() {
        let state: DataState<Vec<Property>> = DataState::Loading;
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_data_state_loaded() {
        let energy = EnergyData::new("p1", readings(&[5.0]));
        let state = DataState::Loaded(Rc::new(energy));

        assert!(!state.is_loading());
        assert_eq!(state.data().unwrap().readings.len(), 1);
    }

    #[test]
    fn test_data_state_error() {
        let state: DataState<EnergyData> = DataState::Error("Failed to fetch".to_string());
        assert_eq!(state.error(), Some("Failed to fetch"));
        assert!(state.data().is_none());
    }
}
