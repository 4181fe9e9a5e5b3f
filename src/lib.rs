/*!
`sidcon_economy`: the valuation engine behind a trading/economy board game.

What it does
- Values heterogeneous item bundles from a fixed unit-value catalog
  (`bundle_value`, `donation_value`, `item_value`).
- Applies the favor buff: a flat discount for eligible participants on every
  kind except the exempt one (`discounted_cost`, `favor_adjusted_cost`).
- Splits a cooperative surplus with a simplified Shapley rule where only the
  grand coalition produces synergy (`calculate_shapley_values_simplified`).
- Derives player-facing aggregates from a server snapshot
  (`player_score`, `is_colony`, `is_on_favor_buff`, standings, bid order).

How to use (call surface only)
- Decode a snapshot with `GameState::from_json`, or build one in memory.
- Call the free functions in `mechanics`, `state` and `systems::*`.
- Valuation lookups are total: unknown ids are worth 0, never an error.

What it does NOT do
- No transport, rendering, persistence or lobby handling. No global state
  beyond the immutable catalog and stock `Rules`.
*/

pub mod catalog;
pub mod error;
pub mod mechanics;
pub mod rules;
pub mod state;
pub mod systems;

pub use catalog::{ItemKind, Species, base_kind, display_color, display_name, is_donation_variant, unit_value};
pub use error::{EconomyError, Result};
pub use mechanics::econ::{Bundle, bundle_value, donation_value};
pub use mechanics::discount::{BuffContext, discounted_cost};
pub use rules::Rules;
pub use state::{GameState, Player, favor_adjusted_cost, is_colony, is_on_favor_buff, player_score};
#[cfg(feature = "system-surplus")]
pub use systems::surplus::calculate_shapley_values_simplified;
