#[cfg(feature = "system-surplus")]  pub mod surplus;
#[cfg(feature = "system-bidding")]  pub mod bidding;
#[cfg(feature = "system-exchange")] pub mod exchange;
#[cfg(feature = "system-deck")]     pub mod deck;
