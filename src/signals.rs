//! Transient UI signals produced by the streaming core.
//!
//! A `Pulse` is a flag that goes briefly true and then resets itself. The
//! reset runs as an independent fire-and-forget task: firing again cancels
//! the previous reset, and a reset that never runs (owner dropped) is
//! harmless because nothing observes the flag for correctness.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default hold duration before a pulse resets itself.
const DEFAULT_HOLD: Duration = Duration::from_millis(400);

/// A momentary boolean flag with a scheduled, cancellable reset.
#[derive(Debug)]
pub struct Pulse {
    active: Arc<AtomicBool>,
    hold: Duration,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD)
    }
}

impl Pulse {
    /// Create a pulse that stays up for `hold` after each fire.
    pub fn new(hold: Duration) -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            hold,
            reset_task: Mutex::new(None),
        }
    }

    /// Raise the flag and schedule the reset, cancelling any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fire(&self) {
        self.active.store(true, Ordering::SeqCst);

        let active = Arc::clone(&self.active);
        let hold = self.hold;
        let task = tokio::spawn(async move {
            tokio::time::sleep(hold).await;
            active.store(false, Ordering::SeqCst);
        });

        // A poisoned lock only leaks one pending reset, which is harmless.
        if let Ok(mut slot) = self.reset_task.lock() {
            if let Some(previous) = slot.replace(task) {
                previous.abort();
            }
        }
    }

    /// Whether the flag is currently up.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Drop for Pulse {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.reset_task.lock() {
            if let Some(task) = slot.take() {
                task.abort();
            }
        }
    }
}

/// The discrete signals this core hands to the consuming UI layer.
#[derive(Debug, Default)]
pub struct UiSignals {
    /// The keyboard should drop when a stream starts consuming.
    pub dismiss_keyboard: Pulse,
    /// The full detail panel should be revealed (interface command).
    pub reveal_detail_panel: Pulse,
}
