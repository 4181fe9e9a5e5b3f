pub mod discount;
pub mod econ;
#[cfg(feature = "system-deck")]
pub mod stoch;

pub use discount::*;
pub use econ::*;
