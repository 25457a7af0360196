//! Wire types for vPIC JSON responses.
//!
//! Field names mirror the API's PascalCase/underscore hybrid (`Mfr_ID`,
//! `VehicleTypes`, ...) via serde renames. Everything the API may omit or
//! null out is `Option` or defaulted — vPIC records are sparse.

use serde::Deserialize;

/// The envelope every vPIC endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "Count", default)]
    pub count: Option<i64>,

    #[serde(rename = "Message", default)]
    pub message: Option<String>,

    #[serde(rename = "Results", default = "Vec::new")]
    pub results: Vec<T>,
}

/// One entry from `getallmanufacturers`.
#[derive(Debug, Clone, Deserialize)]
pub struct ManufacturerRecord {
    #[serde(rename = "Mfr_ID")]
    pub id: u32,

    #[serde(rename = "Mfr_Name")]
    pub name: String,

    #[serde(rename = "Country", default)]
    pub country: Option<String>,

    #[serde(rename = "VehicleTypes", default)]
    pub vehicle_types: Vec<VehicleTypeRecord>,
}

/// A vehicle type attached to a manufacturer summary.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleTypeRecord {
    #[serde(rename = "Name")]
    pub name: String,
}

/// One entry from `getmanufacturerdetails/{id}`.
///
/// The endpoint wraps this in the same `Results` array as its sibling;
/// a successful lookup yields exactly one record.
#[derive(Debug, Clone, Deserialize)]
pub struct ManufacturerDetailRecord {
    #[serde(rename = "Mfr_Name", default)]
    pub name: Option<String>,

    #[serde(rename = "Mfr_RegisteredName", default)]
    pub registered_name: Option<String>,

    #[serde(rename = "Current_Head", default)]
    pub current_head: Option<String>,

    #[serde(rename = "Current_Head_Exec_Title", default)]
    pub current_head_title: Option<String>,

    #[serde(rename = "Address", default)]
    pub address: Option<String>,

    #[serde(rename = "City", default)]
    pub city: Option<String>,

    #[serde(rename = "State", default)]
    pub state: Option<String>,

    #[serde(rename = "Zip", default)]
    pub zip: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_manufacturer_list_envelope() {
        let body = r#"{
            "Count": 1,
            "Message": "Response returned successfully",
            "Results": [{
                "Country": "UNITED STATES (USA)",
                "Mfr_ID": 955,
                "Mfr_Name": "TESLA, INC.",
                "VehicleTypes": [{"IsPrimary": true, "Name": "Passenger Car"}]
            }]
        }"#;

        let envelope: Envelope<ManufacturerRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.count, Some(1));
        assert_eq!(envelope.results.len(), 1);

        let record = &envelope.results[0];
        assert_eq!(record.id, 955);
        assert_eq!(record.name, "TESLA, INC.");
        assert_eq!(record.country.as_deref(), Some("UNITED STATES (USA)"));
        assert_eq!(record.vehicle_types[0].name, "Passenger Car");
    }

    #[test]
    fn missing_vehicle_types_defaults_to_empty() {
        let body = r#"{"Results": [{"Mfr_ID": 7, "Mfr_Name": "ACME"}]}"#;
        let envelope: Envelope<ManufacturerRecord> = serde_json::from_str(body).unwrap();
        assert!(envelope.results[0].vehicle_types.is_empty());
        assert!(envelope.results[0].country.is_none());
    }

    #[test]
    fn decodes_detail_record_with_sparse_fields() {
        let body = r#"{
            "Count": 1,
            "Message": "ok",
            "Results": [{
                "Mfr_Name": "ACME MOTORS",
                "Mfr_RegisteredName": "Acme Motors LLC",
                "Current_Head": null,
                "City": "Detroit"
            }]
        }"#;

        let envelope: Envelope<ManufacturerDetailRecord> = serde_json::from_str(body).unwrap();
        let record = &envelope.results[0];
        assert_eq!(record.name.as_deref(), Some("ACME MOTORS"));
        assert_eq!(record.registered_name.as_deref(), Some("Acme Motors LLC"));
        assert!(record.current_head.is_none());
        assert_eq!(record.city.as_deref(), Some("Detroit"));
        assert!(record.zip.is_none());
    }

    #[test]
    fn empty_envelope_decodes() {
        let envelope: Envelope<ManufacturerRecord> = serde_json::from_str("{}").unwrap();
        assert!(envelope.results.is_empty());
        assert!(envelope.count.is_none());
    }
}
