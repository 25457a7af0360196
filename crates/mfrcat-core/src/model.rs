// ── Domain types ──
//
// MfrId is the canonical identity for every manufacturer. Summary and
// detail records are separate types with separate lifecycles: the summary
// list is fetched once and immutable, a detail exists only while a
// selection is active.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── MfrId ───────────────────────────────────────────────────────────

/// Canonical identifier for a manufacturer (vPIC `Mfr_ID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MfrId(u32);

impl MfrId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MfrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MfrId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u32> for MfrId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

// ── Summary types ───────────────────────────────────────────────────

/// A vehicle type a manufacturer produces (e.g. "Passenger Car").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleType {
    pub name: String,
}

impl VehicleType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Manufacturer summary, as listed by the catalog.
///
/// Immutable once stored; identity is [`MfrId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: MfrId,
    pub name: String,
    /// Registered country, if the registry knows it.
    pub country: Option<String>,
    /// Vehicle types in registry order. May be empty — such entries are
    /// hidden by the filter engine but still held in the full list.
    pub vehicle_types: Vec<VehicleType>,
}

impl Manufacturer {
    /// Iterate the vehicle-type names of this manufacturer.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.vehicle_types.iter().map(|t| t.name.as_str())
    }

    /// Comma-joined vehicle-type names for display.
    pub fn type_summary(&self) -> String {
        self.type_names().collect::<Vec<_>>().join(", ")
    }
}

// ── Detail type ─────────────────────────────────────────────────────

/// Extended manufacturer record from the detail endpoint.
///
/// Everything beyond the name is optional — vPIC detail records are sparse
/// and the registry omits fields freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerDetail {
    pub name: String,
    pub registered_name: Option<String>,
    pub current_head: Option<String>,
    pub current_head_title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl ManufacturerDetail {
    /// "City, State Zip" line, skipping whatever is missing.
    pub fn location_line(&self) -> String {
        let mut line = String::new();
        if let Some(city) = &self.city {
            line.push_str(city);
        }
        if let Some(state) = &self.state {
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(state);
        }
        if let Some(zip) = &self.zip {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(zip);
        }
        line
    }
}
