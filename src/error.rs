//! Error type for the fallible surfaces: decoding, table lookups, exchanges.
//!
//! Valuation itself never fails; see `catalog` for the total lookups.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EconomyError {
    #[error("failed to decode json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no table entry for {players} players")]
    UnsupportedPlayerCount { players: usize },

    #[error("no table entry for turn {turn}")]
    UnsupportedTurn { turn: usize },

    #[error("item `{0}` cannot take part in this exchange")]
    IllegalItem(String),

    #[error("not enough `{item}`: need {needed}, hold {held}")]
    InsufficientStorage { item: String, needed: f64, held: f64 },

    #[error("offered {offered} units for an input that needs {required}")]
    WrongQuantity { required: f64, offered: f64 },
}

pub type Result<T> = std::result::Result<T, EconomyError>;
