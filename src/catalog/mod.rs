//! Static item and species catalog.

pub mod item;
pub mod species;

pub use item::*;
pub use species::*;
