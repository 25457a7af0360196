//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use mfrcat_core::{DetailState, LoadState, Manufacturer, MfrId};

#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ────────────────────────────────────────────────────
    /// Periodic tick for animation (4 Hz).
    Tick,
    /// Render tick (~30 FPS).
    Render,
    /// Terminal resized to (cols, rows).
    Resize(u16, u16),
    /// Shut down the application.
    Quit,

    // ── Overlays ─────────────────────────────────────────────────────
    ToggleHelp,
    OpenSearch,
    CloseSearch,
    /// Incremental search query change.
    SearchInput(String),
    /// Search accepted — overlay closes, filter stays applied.
    SearchSubmit,

    // ── Data updates (from the browser bridge) ───────────────────────
    ManufacturersUpdated(Arc<Vec<Manufacturer>>),
    LoadStateChanged(LoadState),
    DetailChanged(DetailState),

    // ── User intents ─────────────────────────────────────────────────
    /// Open the detail popup for a manufacturer (triggers a fetch).
    SelectManufacturer(MfrId),
    /// Close the detail popup and drop the detail record.
    ClearDetail,
    /// Retry a failed catalog load.
    RetryLoad,
}
