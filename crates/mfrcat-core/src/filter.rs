//! The filter engine — a pure view over the manufacturer list.
//!
//! [`compute_view`] is the single derivation point both frontends call
//! whenever the list or the filter inputs change. It never mutates the
//! underlying list and performs no I/O.

use indexmap::IndexSet;

use crate::model::Manufacturer;

/// User-controlled filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive name substring. Empty matches everything.
    pub search_term: String,
    /// Exact vehicle-type name constraint. `None` means no constraint.
    pub vehicle_type: Option<String>,
}

impl FilterState {
    /// Whether a manufacturer passes all active filters.
    ///
    /// A manufacturer is shown when its name contains `search_term`
    /// (case-insensitively), it has at least one vehicle type, and — if a
    /// type filter is set — one of its type names equals it exactly.
    pub fn matches(&self, manufacturer: &Manufacturer) -> bool {
        if manufacturer.vehicle_types.is_empty() {
            return false;
        }

        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            if !manufacturer.name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        match &self.vehicle_type {
            Some(wanted) => manufacturer.type_names().any(|t| t == wanted),
            None => true,
        }
    }
}

/// The derived view: filtered manufacturers plus the type-option list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    /// Manufacturers passing the current filters, in list order.
    pub manufacturers: Vec<Manufacturer>,
    /// Distinct vehicle-type names across the FULL list (not the filtered
    /// subset), first-seen order, duplicates removed.
    pub type_options: Vec<String>,
}

/// Distinct vehicle-type names across the full list.
pub fn type_options(list: &[Manufacturer]) -> Vec<String> {
    let set: IndexSet<&str> = list.iter().flat_map(Manufacturer::type_names).collect();
    set.into_iter().map(str::to_owned).collect()
}

/// Derive the catalog view from the list and the filter state.
pub fn compute_view(list: &[Manufacturer], filter: &FilterState) -> CatalogView {
    CatalogView {
        manufacturers: list.iter().filter(|m| filter.matches(m)).cloned().collect(),
        type_options: type_options(list),
    }
}
