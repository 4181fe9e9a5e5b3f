//! Rule constants the valuation depends on.
//!
//! The stock values live in [`struct@DEFAULT_RULES`], built once and never
//! mutated. Tables for variants can be decoded from JSON; omitted fields keep
//! their stock value.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::catalog::{ItemKind, Species};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Resource whose holders get the favor discount.
    pub buff_resource: ItemKind,
    /// Species that grants favor and never receives the discount.
    pub exempt_species: Species,
    /// Kind that is never discounted.
    pub exempt_kind: ItemKind,
    /// Flat amount taken off a buffed cost.
    pub favor_discount: f64,
    /// Per-turn growth factor used when discounting future income.
    pub interest_base: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            buff_resource: ItemKind::Favor,
            exempt_species: Species::Kjasjavikalimm,
            exempt_kind: ItemKind::Hypertech,
            favor_discount: 1.0,
            interest_base: 1.23,
        }
    }
}

impl Rules {
    pub fn from_json(src: &str) -> Result<Self> {
        let rules: Rules = serde_json::from_str(src)?;
        log::debug!("loaded rules: {rules:?}");
        Ok(rules)
    }

    /// Process-wide stock rules.
    pub fn stock() -> &'static Rules {
        &DEFAULT_RULES
    }
}

lazy_static! {
    pub static ref DEFAULT_RULES: Rules = Rules::default();
}
