//! Auction tables and bid ordering for the colony and research tracks.

use std::cmp::Ordering;

use crate::catalog::Species;
use crate::error::{EconomyError, Result};

/// Ship prices printed on the bid board, cheapest slot first.
pub fn bid_board(players: usize) -> Result<&'static [u32]> {
    let board: &'static [u32] = match players {
        3 => &[1, 2, 3],
        4 => &[1, 1, 2, 3],
        5 => &[1, 1, 2, 3, 3],
        6 => &[1, 1, 1, 2, 3, 3],
        7 => &[1, 1, 1, 2, 2, 3, 4],
        8 => &[1, 1, 1, 1, 2, 2, 3, 4],
        9 => &[1, 1, 1, 1, 2, 2, 3, 4, 4],
        10 => &[1, 1, 1, 1, 1, 2, 2, 3, 4, 4],
        _ => return Err(EconomyError::UnsupportedPlayerCount { players }),
    };
    Ok(board)
}

const NORMAL_SHARE: [[u32; 6]; 7] = [
    [6, 5, 4, 4, 3, 2],
    [6, 5, 4, 4, 3, 2],
    [6, 6, 5, 4, 3, 1],
    [6, 6, 5, 4, 2, 1],
    [7, 6, 5, 4, 2, 0],
    [7, 6, 5, 4, 2, 0],
    [7, 6, 5, 4, 2, 0],
];

const YENGII_SHARE: [[u32; 6]; 7] = [
    [3, 2, 2, 1, 1, 0],
    [3, 2, 2, 1, 1, 0],
    [3, 2, 1, 1, 1, 0],
    [3, 2, 1, 1, 0, 0],
    [2, 2, 1, 1, 0, 0],
    [2, 2, 1, 1, 0, 0],
    [2, 2, 1, 1, 0, 0],
];

/// Score for sharing a technology: `(everyone else, Yengii)`.
pub fn share_score(players: usize, turn: usize) -> Result<(u32, u32)> {
    let row = players
        .checked_sub(3)
        .filter(|r| *r < NORMAL_SHARE.len())
        .ok_or(EconomyError::UnsupportedPlayerCount { players })?;
    if turn >= NORMAL_SHARE[row].len() {
        return Err(EconomyError::UnsupportedTurn { turn });
    }
    Ok((NORMAL_SHARE[row][turn], YENGII_SHARE[row][turn]))
}

/// Bonus score a researcher gets when the tech spreads.
pub fn tech_spread_bonus(species: Option<Species>, players: usize, turn: usize) -> Result<u32> {
    let (normal, yengii) = share_score(players, turn)?;
    Ok(if species == Some(Species::Yengii) { yengii } else { normal })
}

/// Caylion colony bids count half.
#[inline]
pub fn effective_colony_bid(species: Option<Species>, bid: f64) -> f64 {
    if species == Some(Species::Caylion) { bid / 2.0 } else { bid }
}

/// One seat at the auction.
#[derive(Clone, Copy, Debug)]
pub struct Bidder<'a> {
    pub id: &'a str,
    /// Bid after species adjustments.
    pub bid: f64,
    /// Factories of the track's type already owned.
    pub owned: usize,
    pub tie_breaker: i64,
}

/// Higher bid first, then fewer owned, then higher tie breaker.
pub fn priority(a: &Bidder<'_>, b: &Bidder<'_>) -> Ordering {
    b.bid
        .total_cmp(&a.bid)
        .then(a.owned.cmp(&b.owned))
        .then(b.tie_breaker.cmp(&a.tie_breaker))
}

/// Pick order for a track. Stable for bidders that compare equal.
pub fn bid_order<'a>(mut bidders: Vec<Bidder<'a>>) -> Vec<&'a str> {
    bidders.sort_by(priority);
    bidders.into_iter().map(|b| b.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_has_one_slot_per_player() {
        for players in 3..=10 {
            assert_eq!(bid_board(players).unwrap().len(), players);
        }
        assert!(bid_board(2).is_err());
    }

    #[test]
    fn share_score_bounds() {
        assert_eq!(share_score(3, 0).unwrap(), (6, 3));
        assert_eq!(share_score(9, 5).unwrap(), (0, 0));
        assert!(matches!(share_score(10, 0), Err(EconomyError::UnsupportedPlayerCount { players: 10 })));
        assert!(matches!(share_score(4, 6), Err(EconomyError::UnsupportedTurn { turn: 6 })));
    }

    #[test]
    fn yengii_gets_their_column() {
        assert_eq!(tech_spread_bonus(Some(Species::Yengii), 5, 2).unwrap(), 1);
        assert_eq!(tech_spread_bonus(Some(Species::Eni), 5, 2).unwrap(), 5);
    }
}
