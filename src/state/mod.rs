//! Snapshot types and the predicates derived from them.

pub mod derive;
pub mod snapshot;

pub use derive::*;
pub use snapshot::*;
