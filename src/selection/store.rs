use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use super::model::{Selection, TrackId};

/// Owner of the track list and the active track.
///
/// Readers take snapshots; writers request a new active id. Subscribers get the
/// new id every time the active track actually changes.
pub trait SelectionStore {
    fn snapshot(&self) -> Selection;
    fn set_active(&self, id: TrackId);
    fn subscribe(&self) -> Receiver<TrackId>;
}

#[derive(Default)]
struct Inner {
    selection: Selection,
    subscribers: Vec<Sender<TrackId>>,
}

/// In-process `SelectionStore`; clones share the same state.
#[derive(Clone, Default)]
pub struct SharedSelection {
    inner: Arc<Mutex<Inner>>,
}

impl SharedSelection {
    pub fn new(ids: Vec<TrackId>) -> Self {
        let store = Self::default();
        store.set_ids(ids);
        store
    }

    /// Replace the track list. The active id is kept even if it is no longer
    /// listed; navigation then restarts from the list boundaries.
    pub fn set_ids(&self, ids: Vec<TrackId>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.selection.ids = ids;
        }
    }
}

impl SelectionStore for SharedSelection {
    fn snapshot(&self) -> Selection {
        self.inner
            .lock()
            .map(|inner| inner.selection.clone())
            .unwrap_or_default()
    }

    fn set_active(&self, id: TrackId) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        if inner.selection.active.as_ref() == Some(&id) {
            return;
        }
        inner.selection.active = Some(id.clone());
        // Drop subscribers whose receiving end is gone.
        inner.subscribers.retain(|tx| tx.send(id.clone()).is_ok());
    }

    fn subscribe(&self) -> Receiver<TrackId> {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut inner) = self.inner.lock() {
            inner.subscribers.push(tx);
        }
        rx
    }
}
