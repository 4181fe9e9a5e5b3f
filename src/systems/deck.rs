//! Seeded colony / research decks.
//! Same seed, same order: replays and tests can pin a deal.

use bevy_prng::WyRand;
use rand_core::SeedableRng;

use crate::mechanics::stoch;

/// Fisher-Yates over a WyRand stream.
pub fn shuffle<T>(cards: &mut [T], rng: &mut WyRand) {
    for i in (1..cards.len()).rev() {
        let j = stoch::index_below(rng, i + 1);
        cards.swap(i, j);
    }
}

pub struct Deck<T> {
    rng: WyRand,
    cards: Vec<T>,
}

impl<T> Deck<T> {
    /// Shuffles `cards` once; draws come off the top.
    pub fn new(mut cards: Vec<T>, seed: u64) -> Self {
        let mut rng = WyRand::from_seed(seed.to_le_bytes());
        shuffle(&mut cards, &mut rng);
        Self { rng, cards }
    }

    pub fn draw(&mut self) -> Option<T> {
        let card = self.cards.pop();
        if card.is_none() {
            log::debug!("draw from an empty deck");
        }
        card
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Puts cards back and reshuffles the whole deck.
    pub fn return_and_shuffle(&mut self, returned: impl IntoIterator<Item = T>) {
        self.cards.extend(returned);
        shuffle(&mut self.cards, &mut self.rng);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Deck<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck").field("cards", &self.cards).finish_non_exhaustive()
    }
}
