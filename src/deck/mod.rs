//! Deck construction and tile containers.
//!
//! A full set is 106 tiles: two copies of every (color, number) pair for
//! numbers 1-13 across the four colors, plus two fake jokers. The shuffled
//! set becomes the draw queue; tiles are drawn from the front. The discard
//! pile is a stack sharing one end for push and pop, so its top tile is
//! always the most recent discard.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Tile, TileColor, TileId};

/// Total tiles in a full set.
pub const TILE_COUNT: usize = 106;

/// Tiles dealt to each seat at the start of a session.
pub const HAND_SIZE: usize = 21;

/// Tiles the deck must still hold when distribution begins:
/// 21 per seat plus the opening face-up discard.
pub const DISTRIBUTION_REQUIRES: usize = HAND_SIZE * 4 + 1;

/// The draw queue of remaining face-down tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    tiles: VecDeque<Tile>,
}

impl Deck {
    /// An empty deck, the state before a session starts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and shuffle a full 106-tile set.
    ///
    /// Two copies of each (color, number) combination for numbers 1-13,
    /// then one red and one blue fake joker. Tile identities are assigned
    /// before the shuffle, so a given seed always yields the same
    /// identity-to-position mapping.
    #[must_use]
    pub fn build(rng: &mut GameRng) -> Self {
        let mut tiles = Vec::with_capacity(TILE_COUNT);
        let mut next_id = 0u32;

        for _ in 0..2 {
            for color in TileColor::ALL {
                for number in 1..=13u8 {
                    tiles.push(Tile::new(TileId(next_id), color, number));
                    next_id += 1;
                }
            }
        }
        tiles.push(Tile::fake(TileId(next_id), TileColor::Red));
        tiles.push(Tile::fake(TileId(next_id + 1), TileColor::Blue));

        rng.shuffle(&mut tiles);

        Self {
            tiles: tiles.into(),
        }
    }

    /// Number of tiles remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw the front tile of the queue.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Draw up to `n` tiles from the front.
    pub fn draw_n(&mut self, n: usize) -> Vec<Tile> {
        let take = n.min(self.tiles.len());
        self.tiles.drain(..take).collect()
    }

    /// Iterate the remaining tiles in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

/// The face-up discard stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    tiles: Vec<Tile>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of discarded tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The most recently discarded tile.
    #[must_use]
    pub fn top(&self) -> Option<&Tile> {
        self.tiles.last()
    }

    /// Place a tile on top of the pile.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Take the top tile off the pile.
    pub fn pop(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_full_set_composition() {
        let mut rng = GameRng::new(42);
        let deck = Deck::build(&mut rng);

        assert_eq!(deck.len(), TILE_COUNT);

        let fakes = deck.iter().filter(|t| t.is_fake).count();
        assert_eq!(fakes, 2);

        let mut counts: FxHashMap<(TileColor, u8), usize> = FxHashMap::default();
        for tile in deck.iter().filter(|t| !t.is_fake) {
            *counts.entry((tile.color, tile.number)).or_default() += 1;
        }
        assert_eq!(counts.len(), 52);
        for color in TileColor::ALL {
            for number in 1..=13u8 {
                assert_eq!(
                    counts.get(&(color, number)),
                    Some(&2),
                    "expected two copies of {color} {number}",
                );
            }
        }
    }

    #[test]
    fn test_identities_are_unique() {
        let mut rng = GameRng::new(7);
        let deck = Deck::build(&mut rng);

        let mut ids: Vec<_> = deck.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TILE_COUNT);
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut rng1 = GameRng::new(1234);
        let mut rng2 = GameRng::new(1234);
        let mut rng3 = GameRng::new(4321);

        let a = Deck::build(&mut rng1);
        let b = Deck::build(&mut rng2);
        let c = Deck::build(&mut rng3);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_draw_from_front() {
        let mut rng = GameRng::new(9);
        let mut deck = Deck::build(&mut rng);

        let front = *deck.iter().next().unwrap();
        let drawn = deck.draw().unwrap();
        assert_eq!(front, drawn);
        assert_eq!(deck.len(), TILE_COUNT - 1);
    }

    #[test]
    fn test_draw_n() {
        let mut rng = GameRng::new(9);
        let mut deck = Deck::build(&mut rng);

        let tiles = deck.draw_n(HAND_SIZE);
        assert_eq!(tiles.len(), HAND_SIZE);
        assert_eq!(deck.len(), TILE_COUNT - HAND_SIZE);

        let rest = deck.draw_n(TILE_COUNT);
        assert_eq!(rest.len(), TILE_COUNT - HAND_SIZE);
        assert!(deck.is_empty());
        assert!(deck.draw().is_none());
    }

    #[test]
    fn test_discard_pile_is_a_stack() {
        let mut pile = DiscardPile::new();
        let a = Tile::new(TileId(0), TileColor::Red, 1);
        let b = Tile::new(TileId(1), TileColor::Blue, 2);

        pile.push(a);
        pile.push(b);

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top(), Some(&b));
        assert_eq!(pile.pop(), Some(b));
        assert_eq!(pile.top(), Some(&a));
        assert_eq!(pile.pop(), Some(a));
        assert!(pile.is_empty());
        assert_eq!(pile.pop(), None);
    }
}
