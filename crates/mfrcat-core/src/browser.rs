// ── Browser facade ──
//
// Owns the catalog lifecycle: the one-shot list load, the on-demand
// detail fetch, and the reactive state slots consumers subscribe to.
// Cheaply cloneable via Arc; all mutation happens through watch channels,
// so the CLI can poll snapshots while the TUI streams changes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use mfrcat_api::VpicClient;

use crate::convert;
use crate::error::CoreError;
use crate::model::{Manufacturer, ManufacturerDetail, MfrId};

// ── Observable states ────────────────────────────────────────────────

/// Progress of the initial manufacturer-list load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// No load attempted yet.
    #[default]
    Idle,
    /// A load request is in flight.
    Loading,
    /// The list is populated.
    Loaded { count: usize },
    /// The load failed; the list is empty. A new `load()` will retry.
    Failed { message: String },
}

/// The active detail selection.
///
/// At most one detail record exists at a time; selecting a new manufacturer
/// or clearing replaces the slot atomically from the consumer's viewpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    /// No selection active.
    #[default]
    None,
    /// A detail request for `id` is in flight.
    Fetching { id: MfrId },
    /// The detail record for the current selection.
    Loaded(Arc<ManufacturerDetail>),
    /// The fetch for `id` failed.
    Failed { id: MfrId, message: String },
}

// ── Browser ──────────────────────────────────────────────────────────

/// The main entry point for consumers.
#[derive(Clone)]
pub struct Browser {
    inner: Arc<BrowserInner>,
}

struct BrowserInner {
    client: VpicClient,
    manufacturers: watch::Sender<Arc<Vec<Manufacturer>>>,
    load_state: watch::Sender<LoadState>,
    detail: watch::Sender<DetailState>,
    /// Bumped by every `select` and `clear_selection`. A detail response is
    /// applied only while its generation is still current, so a slow
    /// response can never overwrite a newer selection or a clear.
    detail_generation: AtomicU64,
}

impl Browser {
    /// Create a new Browser over the given API client. Does NOT fetch —
    /// call [`load()`](Self::load) to populate the list.
    pub fn new(client: VpicClient) -> Self {
        let (manufacturers, _) = watch::channel(Arc::new(Vec::new()));
        let (load_state, _) = watch::channel(LoadState::default());
        let (detail, _) = watch::channel(DetailState::default());

        Self {
            inner: Arc::new(BrowserInner {
                client,
                manufacturers,
                load_state,
                detail,
                detail_generation: AtomicU64::new(0),
            }),
        }
    }

    /// Access the underlying API client.
    pub fn client(&self) -> &VpicClient {
        &self.inner.client
    }

    // ── Data loader ──────────────────────────────────────────────────

    /// Fetch the manufacturer list.
    ///
    /// Runs at most once per Browser lifetime: calls while a load is in
    /// flight or after a successful load are no-ops. A failed load parks
    /// the state in [`LoadState::Failed`]; calling `load()` again retries.
    pub async fn load(&self) -> Result<(), CoreError> {
        let proceed = self.inner.load_state.send_if_modified(|state| {
            if matches!(state, LoadState::Idle | LoadState::Failed { .. }) {
                *state = LoadState::Loading;
                true
            } else {
                false
            }
        });
        if !proceed {
            debug!("load skipped: already loading or loaded");
            return Ok(());
        }

        match self.inner.client.all_manufacturers().await {
            Ok(records) => {
                let list = convert::manufacturers_from_wire(records);
                let count = list.len();
                self.inner.manufacturers.send_replace(Arc::new(list));
                self.inner
                    .load_state
                    .send_replace(LoadState::Loaded { count });
                debug!(count, "manufacturer list loaded");
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "manufacturer list load failed");
                self.inner.load_state.send_replace(LoadState::Failed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Fire-and-forget [`load`](Self::load) on the current runtime.
    pub fn spawn_load(&self) {
        let browser = self.clone();
        tokio::spawn(async move {
            // Errors are already surfaced through the LoadState channel.
            let _ = browser.load().await;
        });
    }

    // ── Detail fetcher ───────────────────────────────────────────────

    /// Select a manufacturer: fetch its detail record and store it.
    ///
    /// Each selection re-fetches, even for a previously viewed id. If a
    /// newer selection (or a clear) happens while the request is in
    /// flight, the response is discarded on arrival.
    pub async fn select(&self, id: MfrId) -> Result<(), CoreError> {
        let generation = self
            .inner
            .detail_generation
            .fetch_add(1, Ordering::SeqCst)
            + 1;
        self.send_detail_if_current(generation, DetailState::Fetching { id });

        match self.inner.client.manufacturer_details(id.get()).await {
            Ok(record) => {
                let detail = Arc::new(ManufacturerDetail::from(record));
                if !self.send_detail_if_current(generation, DetailState::Loaded(detail)) {
                    debug!(%id, "discarding superseded detail response");
                }
                Ok(())
            }
            Err(e) => {
                let err = CoreError::from(e);
                let applied = self.send_detail_if_current(
                    generation,
                    DetailState::Failed {
                        id,
                        message: err.to_string(),
                    },
                );
                if applied {
                    warn!(%id, error = %err, "detail fetch failed");
                    Err(err)
                } else {
                    debug!(%id, "discarding superseded detail failure");
                    Ok(())
                }
            }
        }
    }

    /// Fire-and-forget [`select`](Self::select) on the current runtime.
    pub fn spawn_select(&self, id: MfrId) {
        let browser = self.clone();
        tokio::spawn(async move {
            // Errors are already surfaced through the DetailState channel.
            let _ = browser.select(id).await;
        });
    }

    /// Clear the active selection, removing any detail record.
    ///
    /// Also invalidates in-flight detail fetches, so a late response cannot
    /// resurrect the popup.
    pub fn clear_selection(&self) {
        self.inner.detail_generation.fetch_add(1, Ordering::SeqCst);
        self.inner.detail.send_replace(DetailState::None);
    }

    fn send_detail_if_current(&self, generation: u64, state: DetailState) -> bool {
        if self.inner.detail_generation.load(Ordering::SeqCst) == generation {
            self.inner.detail.send_replace(state);
            true
        } else {
            false
        }
    }

    // ── Subscriptions & snapshots ────────────────────────────────────

    /// Subscribe to manufacturer-list changes.
    pub fn manufacturers(&self) -> watch::Receiver<Arc<Vec<Manufacturer>>> {
        self.inner.manufacturers.subscribe()
    }

    /// Subscribe to load-state changes.
    pub fn load_state(&self) -> watch::Receiver<LoadState> {
        self.inner.load_state.subscribe()
    }

    /// Subscribe to detail-selection changes.
    pub fn detail(&self) -> watch::Receiver<DetailState> {
        self.inner.detail.subscribe()
    }

    /// Current manufacturer list (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<Manufacturer>> {
        self.inner.manufacturers.borrow().clone()
    }

    /// Current detail-selection state.
    pub fn detail_snapshot(&self) -> DetailState {
        self.inner.detail.borrow().clone()
    }

    /// Current load state.
    pub fn load_snapshot(&self) -> LoadState {
        self.inner.load_state.borrow().clone()
    }
}
