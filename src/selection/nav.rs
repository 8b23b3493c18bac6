//! Next/previous resolution over an ordered track list.
//!
//! Both directions wrap around. An active id that is missing from the list is
//! treated like the list boundary: "next" lands on the first entry and
//! "previous" on the last one.

use super::model::TrackId;
use super::store::SelectionStore;

/// The id following `active`, or `None` when `ids` is empty.
pub fn next_id<'a>(ids: &'a [TrackId], active: Option<&TrackId>) -> Option<&'a TrackId> {
    let pos = active.and_then(|a| ids.iter().position(|id| id == a));
    match pos {
        Some(p) => ids.get(p + 1).or_else(|| ids.first()),
        None => ids.first(),
    }
}

/// The id preceding `active`, or `None` when `ids` is empty.
pub fn previous_id<'a>(ids: &'a [TrackId], active: Option<&TrackId>) -> Option<&'a TrackId> {
    let pos = active.and_then(|a| ids.iter().position(|id| id == a));
    match pos {
        Some(0) | None => ids.last(),
        Some(p) => ids.get(p - 1),
    }
}

/// Make the track after the active one active. Returns the newly requested id.
pub fn select_next<S: SelectionStore + ?Sized>(store: &S) -> Option<TrackId> {
    let selection = store.snapshot();
    let next = next_id(&selection.ids, selection.active.as_ref())?.clone();
    store.set_active(next.clone());
    Some(next)
}

/// Make the track before the active one active. Returns the newly requested id.
pub fn select_previous<S: SelectionStore + ?Sized>(store: &S) -> Option<TrackId> {
    let selection = store.snapshot();
    let prev = previous_id(&selection.ids, selection.active.as_ref())?.clone();
    store.set_active(prev.clone());
    Some(prev)
}
