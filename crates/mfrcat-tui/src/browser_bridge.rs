//! Browser bridge — connects [`Browser`] watch channels to TUI actions.
//!
//! Runs as a background task: kicks off the initial catalog load, then
//! forwards every list / load-state / detail change as an [`Action`]
//! through the TUI's action channel.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use mfrcat_core::Browser;

use crate::action::Action;

/// Run the bridge between [`Browser`] reactive state and the TUI.
///
/// Sends initial snapshots so the screen has data immediately, starts the
/// one-shot catalog load, then loops forwarding changes until cancelled.
pub async fn run_browser_bridge(
    browser: Browser,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut manufacturers = browser.manufacturers();
    let mut load_state = browser.load_state();
    let mut detail = browser.detail();

    // Push initial snapshots (and mark them seen, so `changed()` only
    // fires for genuine updates from here on).
    let _ = action_tx.send(Action::ManufacturersUpdated(
        manufacturers.borrow_and_update().clone(),
    ));
    let _ = action_tx.send(Action::LoadStateChanged(
        load_state.borrow_and_update().clone(),
    ));
    let _ = action_tx.send(Action::DetailChanged(detail.borrow_and_update().clone()));

    // The one-shot catalog load. Failures surface through LoadState.
    browser.spawn_load();

    // Stream loop — forward every change until cancelled
    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Ok(()) = manufacturers.changed() => {
                let list = manufacturers.borrow_and_update().clone();
                let _ = action_tx.send(Action::ManufacturersUpdated(list));
            }
            Ok(()) = load_state.changed() => {
                let state = load_state.borrow_and_update().clone();
                let _ = action_tx.send(Action::LoadStateChanged(state));
            }
            Ok(()) = detail.changed() => {
                let state = detail.borrow_and_update().clone();
                let _ = action_tx.send(Action::DetailChanged(state));
            }
        }
    }

    debug!("browser bridge shut down");
}
