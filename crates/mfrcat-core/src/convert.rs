// ── Wire → domain conversion ──
//
// The only place that knows both the vPIC wire shapes and the domain
// types. Detail records may arrive without a name; the summary name (or
// an id-derived placeholder) is not substituted here — display fallbacks
// belong to the frontends.

use mfrcat_api::wire;

use crate::model::{Manufacturer, ManufacturerDetail, MfrId, VehicleType};

impl From<wire::ManufacturerRecord> for Manufacturer {
    fn from(record: wire::ManufacturerRecord) -> Self {
        Self {
            id: MfrId::new(record.id),
            name: record.name,
            country: record.country.filter(|c| !c.is_empty()),
            vehicle_types: record
                .vehicle_types
                .into_iter()
                .map(VehicleType::from)
                .collect(),
        }
    }
}

impl From<wire::VehicleTypeRecord> for VehicleType {
    fn from(record: wire::VehicleTypeRecord) -> Self {
        Self { name: record.name }
    }
}

impl From<wire::ManufacturerDetailRecord> for ManufacturerDetail {
    fn from(record: wire::ManufacturerDetailRecord) -> Self {
        Self {
            name: record.name.unwrap_or_default(),
            registered_name: record.registered_name.filter(|s| !s.is_empty()),
            current_head: record.current_head.filter(|s| !s.is_empty()),
            current_head_title: record.current_head_title.filter(|s| !s.is_empty()),
            address: record.address.filter(|s| !s.is_empty()),
            city: record.city.filter(|s| !s.is_empty()),
            state: record.state.filter(|s| !s.is_empty()),
            zip: record.zip.filter(|s| !s.is_empty()),
        }
    }
}

/// Convert a full wire list into domain manufacturers, preserving order.
pub fn manufacturers_from_wire(records: Vec<wire::ManufacturerRecord>) -> Vec<Manufacturer> {
    records.into_iter().map(Manufacturer::from).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wire_record(id: u32, name: &str, types: &[&str]) -> wire::ManufacturerRecord {
        serde_json::from_value(serde_json::json!({
            "Mfr_ID": id,
            "Mfr_Name": name,
            "Country": "UNITED STATES (USA)",
            "VehicleTypes": types.iter().map(|t| serde_json::json!({"Name": t})).collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    #[test]
    fn summary_conversion_keeps_order_and_identity() {
        let records = vec![
            wire_record(955, "TESLA, INC.", &["Passenger Car"]),
            wire_record(1041, "BMW AG", &[]),
        ];

        let manufacturers = manufacturers_from_wire(records);

        assert_eq!(manufacturers[0].id, MfrId::new(955));
        assert_eq!(manufacturers[0].vehicle_types[0].name, "Passenger Car");
        assert_eq!(manufacturers[1].name, "BMW AG");
        assert!(manufacturers[1].vehicle_types.is_empty());
    }

    #[test]
    fn detail_conversion_drops_empty_strings() {
        let record: wire::ManufacturerDetailRecord = serde_json::from_value(serde_json::json!({
            "Mfr_Name": "ACME MOTORS",
            "Mfr_RegisteredName": "",
            "Current_Head": "Jo Smith",
        }))
        .unwrap();

        let detail = ManufacturerDetail::from(record);
        assert_eq!(detail.name, "ACME MOTORS");
        assert!(detail.registered_name.is_none());
        assert_eq!(detail.current_head.as_deref(), Some("Jo Smith"));
    }
}
