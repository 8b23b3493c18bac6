//! Track selection: the ordered track list, the active track and the
//! wrap-around navigation between them.

mod model;
mod nav;
mod store;

pub use model::{Selection, TrackId};
pub use nav::{next_id, previous_id, select_next, select_previous};
pub use store::{SelectionStore, SharedSelection};

#[cfg(test)]
mod tests;
