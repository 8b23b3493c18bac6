//! Music library: the `Track` descriptor and directory scanning.

mod model;
mod scan;

pub use model::Track;
pub use scan::scan;
