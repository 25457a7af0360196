//! Domain layer between `mfrcat-api` and UI consumers (CLI / TUI).
//!
//! This crate owns the business logic and reactive state for the catalog:
//!
//! - **[`Browser`]** — Facade managing the catalog lifecycle:
//!   [`load()`](Browser::load) fetches the manufacturer list exactly once,
//!   [`select()`](Browser::select) fetches a detail record on demand, and
//!   [`clear_selection()`](Browser::clear_selection) drops it. State is
//!   published through `tokio::sync::watch` channels so the TUI renders
//!   reactively while the CLI just takes snapshots.
//!
//! - **Filter engine** ([`filter`]) — [`compute_view`] derives the filtered
//!   manufacturer list and the distinct vehicle-type options as a pure
//!   function of (list, [`FilterState`]). No I/O, no hidden state.
//!
//! - **Domain model** ([`model`]) — [`Manufacturer`] summaries keyed by
//!   [`MfrId`], plus the on-demand [`ManufacturerDetail`] record.

pub mod browser;
pub mod convert;
pub mod error;
pub mod filter;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use browser::{Browser, DetailState, LoadState};
pub use error::CoreError;
pub use filter::{CatalogView, FilterState, compute_view, type_options};
pub use model::{Manufacturer, ManufacturerDetail, MfrId, VehicleType};
