/// Derived state: buff eligibility, adjusted costs, colonies, scores.
/// Nothing here is cached; each call reads the snapshot as given.
use crate::mechanics::discount::discounted_cost;
use crate::mechanics::econ::{item_value, score_total};
use crate::rules::Rules;
use crate::state::snapshot::{Factory, GameState, Player};

/// Feature type of colony cards.
pub const COLONY_TYPE: &str = "Colony";

/// Property that marks a factory as a colony regardless of its type.
pub const COLONY_FLAG: &str = "colony";

/// Score and item value as they follow from storage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerAggregate {
    pub score: f64,
    pub item_value: f64,
}

impl PlayerAggregate {
    pub fn from_storage(player: &Player) -> Self {
        Self {
            score: score_total(&player.storage),
            item_value: item_value(&player.storage),
        }
    }
}

impl Player {
    /// Copy whose `score` / `item_value` match its storage.
    pub fn recomputed(&self) -> Player {
        let agg = PlayerAggregate::from_storage(self);
        Player {
            score: agg.score,
            item_value: agg.item_value,
            ..self.clone()
        }
    }
}

#[inline]
pub fn is_on_favor_buff(state: &GameState, participant_id: &str) -> bool {
    is_on_favor_buff_with(state, participant_id, Rules::stock())
}

pub fn is_on_favor_buff_with(state: &GameState, participant_id: &str, rules: &Rules) -> bool {
    if !state.favor_buff {
        return false;
    }
    match state.player(participant_id) {
        Some(player) => player.buff_context(state.favor_buff, rules).is_eligible(),
        None => {
            log::debug!("favor check for unknown player `{participant_id}`");
            false
        }
    }
}

#[inline]
pub fn favor_adjusted_cost(state: &GameState, participant_id: &str, item_kind: &str, base_cost: f64) -> f64 {
    favor_adjusted_cost_with(state, participant_id, item_kind, base_cost, Rules::stock())
}

pub fn favor_adjusted_cost_with(
    state: &GameState,
    participant_id: &str,
    item_kind: &str,
    base_cost: f64,
    rules: &Rules,
) -> f64 {
    match state.player(participant_id) {
        Some(player) => discounted_cost(base_cost, &player.buff_context(state.favor_buff, rules), item_kind),
        None => base_cost,
    }
}

/// Colony by card type, or by an explicit `colony: true` property.
pub fn is_colony(factory: &Factory) -> bool {
    factory.feature.kind == COLONY_TYPE || factory.feature.flag(COLONY_FLAG)
}

/// Displayed standing: raw score plus one sixth of item value.
#[inline]
pub fn player_score(player: &Player) -> f64 {
    player.score + player.item_value * 0.5 / 3.0
}

/// [`player_score`] on values recomputed from storage.
pub fn live_score(player: &Player) -> f64 {
    let agg = PlayerAggregate::from_storage(player);
    agg.score + agg.item_value * 0.5 / 3.0
}

pub fn factory_count_by_type(player: &Player, kind: &str) -> usize {
    player.factories.values().filter(|f| f.feature.kind == kind).count()
}

/// Players holding more colony cards than allowed, in seat order.
/// Only `Colony`-typed cards count toward the cap; a `colony` flag does not.
pub fn colony_overflow(state: &GameState) -> Vec<&str> {
    state
        .players
        .iter()
        .filter(|p| factory_count_by_type(p, COLONY_TYPE) > p.max_colony)
        .map(|p| p.user_id.as_str())
        .collect()
}

/// `(user_id, live_score)`, best first; ties go to the higher tie breaker.
pub fn standings(state: &GameState) -> Vec<(&str, f64)> {
    let mut rows: Vec<(&Player, f64)> = state.players.iter().map(|p| (p, live_score(p))).collect();
    rows.sort_by(|(pa, a), (pb, b)| b.total_cmp(a).then(pb.tie_breaker.cmp(&pa.tie_breaker)));
    rows.into_iter().map(|(p, s)| (p.user_id.as_str(), s)).collect()
}

#[cfg(feature = "system-bidding")]
mod bids {
    use super::*;
    use crate::systems::bidding::{Bidder, bid_order, effective_colony_bid};

    /// Colony track pick order.
    pub fn colony_bid_order(state: &GameState) -> Vec<&str> {
        let bidders = state
            .players
            .iter()
            .map(|p| Bidder {
                id: &p.user_id,
                bid: effective_colony_bid(p.species(), p.colony_bid),
                owned: factory_count_by_type(p, COLONY_TYPE),
                tie_breaker: p.tie_breaker,
            })
            .collect();
        bid_order(bidders)
    }

    /// Research track pick order.
    pub fn research_bid_order(state: &GameState) -> Vec<&str> {
        let bidders = state
            .players
            .iter()
            .map(|p| Bidder {
                id: &p.user_id,
                bid: p.research_bid,
                owned: factory_count_by_type(p, "Research"),
                tie_breaker: p.tie_breaker,
            })
            .collect();
        bid_order(bidders)
    }
}

#[cfg(feature = "system-bidding")]
pub use bids::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::econ::Bundle;

    fn player(id: &str, specie: &str, storage: &[(&str, f64)]) -> Player {
        Player {
            user_id: id.into(),
            specie: specie.into(),
            storage: storage.iter().map(|(k, q)| (k.to_string(), *q)).collect::<Bundle>(),
            ..Player::default()
        }
    }

    #[test]
    fn recomputed_matches_storage() {
        let p = player("p", "Eni", &[("Score", 4.0), ("ScoreDonation", 1.0), ("Energy", 2.0)]).recomputed();
        assert_eq!(p.score, 5.0);
        assert_eq!(p.item_value, 3.0);
        assert_eq!(player_score(&p), live_score(&p));
    }

    #[test]
    fn unknown_player_is_not_buffed_and_pays_full() {
        let state = GameState { favor_buff: true, ..GameState::default() };
        assert!(!is_on_favor_buff(&state, "ghost"));
        assert_eq!(favor_adjusted_cost(&state, "ghost", "Food", 3.0), 3.0);
    }

    #[test]
    fn standings_break_ties_by_tie_breaker() {
        let mut a = player("a", "Eni", &[("Score", 2.0)]);
        let mut b = player("b", "Kit", &[("Score", 2.0)]);
        a.tie_breaker = 1;
        b.tie_breaker = 3;
        let c = player("c", "Zeth", &[("Score", 1.0), ("Hypertech", 4.0)]);
        let state = GameState { players: vec![a, b, c], ..GameState::default() };
        let order: Vec<&str> = standings(&state).into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, ["c", "b", "a"]);
    }
}
