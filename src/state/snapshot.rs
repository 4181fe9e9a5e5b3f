//! Game snapshot as the server pushes it.
//!
//! Field names follow the server's JSON. Everything the panel may omit is
//! defaulted, so a partial or stale snapshot still decodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::Species;
use crate::error::Result;
use crate::mechanics::discount::BuffContext;
use crate::mechanics::econ::{Bundle, bundle_value, quantity};
use crate::rules::Rules;

/// Converter inputs: one bundle, or a list of alternative bundles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputItems {
    One(Bundle),
    Choices(Vec<Bundle>),
}

impl Default for InputItems {
    fn default() -> Self {
        InputItems::One(Bundle::new())
    }
}

impl InputItems {
    pub fn choices(&self) -> &[Bundle] {
        match self {
            InputItems::One(b) => std::slice::from_ref(b),
            InputItems::Choices(bs) => bs,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Converter {
    pub input_items: InputItems,
    pub output_items: Bundle,
    pub donation_items: Bundle,
    pub running_stage: String,
    pub used: bool,
}

/// `{ "type": "Colony", "properties": { ... } }`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: Map<String, Value>,
}

impl Feature {
    /// True only for a JSON `true`; absent or any other value is false.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.properties.get(name), Some(Value::Bool(true)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Factory {
    pub name: String,
    pub converter: Converter,
    pub preview: Option<Converter>,
    pub owner: String,
    pub feature: Feature,
    pub run_count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub user_id: String,
    pub specie: String,
    pub specie_zh_name: String,
    pub storage: Bundle,
    pub donation_items: Bundle,
    pub factories: BTreeMap<String, Factory>,
    pub max_colony: usize,
    pub tie_breaker: i64,
    pub agreed: bool,
    pub colony_bid: f64,
    pub research_bid: f64,
    pub tech: Vec<String>,
    pub invented_tech: Vec<String>,
    pub score: f64,
    pub item_value: f64,
}

impl Player {
    pub fn species(&self) -> Option<Species> {
        Species::parse(&self.specie)
    }

    pub fn buff_context<'r>(&self, buff_enabled: bool, rules: &'r Rules) -> BuffContext<'r> {
        BuffContext {
            buff_enabled,
            species: self.species(),
            favor_held: quantity(&self.storage, rules.buff_resource.as_str()),
            rules,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidCard {
    pub price: u32,
    pub item: Option<Factory>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPick {
    #[serde(rename = "type")]
    pub kind: String,
    pub player: String,
}

/// Items, lent factories and granted techs moving one way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gift {
    pub items: Bundle,
    pub factories: Vec<String>,
    pub techs: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeProposal {
    pub id: u64,
    pub from_player: String,
    pub to_players: Vec<String>,
    pub send_gift: Gift,
    pub receive_gift: Gift,
    pub message: String,
}

impl TradeProposal {
    /// Item value the proposer receives minus what they send. Factories and
    /// techs carry no item value.
    pub fn balance_for_sender(&self) -> f64 {
        bundle_value(&self.receive_gift.items) - bundle_value(&self.send_gift.items)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_round: usize,
    pub end_round: usize,
    pub stage: String,
    pub room_name: String,
    pub research_bid_cards: Vec<BidCard>,
    pub colony_bid_cards: Vec<BidCard>,
    pub current_pick: Option<CurrentPick>,
    pub current_discard_colony_player: Option<String>,
    /// Global favor-buff switch.
    pub favor_buff: bool,
    /// Open proposals keyed by proposer.
    pub proposals: BTreeMap<String, Vec<TradeProposal>>,
}

impl GameState {
    pub fn from_json(src: &str) -> Result<Self> {
        let state: GameState = serde_json::from_str(src)?;
        log::debug!(
            "decoded snapshot of `{}`: {} players, round {}",
            state.room_name,
            state.players.len(),
            state.current_round
        );
        Ok(state)
    }

    pub fn player(&self, user_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.user_id == user_id)
    }
}
