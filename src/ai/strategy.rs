//! Scripted opponent strategies.
//!
//! Each AI seat is bound to a fixed difficulty tier: ai1 easy, ai2 medium,
//! ai3 hard. A strategy makes exactly two decisions per turn: where to
//! draw from, and which tile to discard. It never fails; with nothing to
//! decide over it simply returns the neutral choice.
//!
//! Strategies are stateless; all randomness comes from the injected
//! [`GameRng`], so a seeded session replays identical AI behavior.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Seat, Tile, TileId};

/// Where a draw comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawSource {
    Deck,
    Discard,
}

impl std::fmt::Display for DrawSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawSource::Deck => write!(f, "deck"),
            DrawSource::Discard => write!(f, "discard"),
        }
    }
}

/// Difficulty tier of an AI seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The fixed seat-to-difficulty binding. The user seat has none.
    #[must_use]
    pub const fn for_seat(seat: Seat) -> Option<Difficulty> {
        match seat {
            Seat::User => None,
            Seat::Ai1 => Some(Difficulty::Easy),
            Seat::Ai2 => Some(Difficulty::Medium),
            Seat::Ai3 => Some(Difficulty::Hard),
        }
    }
}

/// Decision functions for one AI seat's turn.
///
/// Implementations must be deterministic given the hand, the visible
/// discard top, and the RNG stream.
pub trait Strategy {
    /// Choose where to draw from. `discard_top` is `None` when the discard
    /// pile is empty, in which case only the deck is available.
    fn choose_draw_source(
        &self,
        hand: &[Tile],
        discard_top: Option<&Tile>,
        rng: &mut GameRng,
    ) -> DrawSource;

    /// Choose which tile to give up. Returns `None` for an empty hand.
    fn choose_discard(&self, hand: &[Tile], rng: &mut GameRng) -> Option<TileId>;
}

/// Look up the strategy implementation for a difficulty tier.
#[must_use]
pub fn strategy_for(difficulty: Difficulty) -> &'static dyn Strategy {
    match difficulty {
        Difficulty::Easy => &EasyStrategy,
        Difficulty::Medium => &MediumStrategy,
        Difficulty::Hard => &HardStrategy,
    }
}

/// Easy: coin-flip draws, uniform-random discards.
#[derive(Clone, Copy, Debug, Default)]
pub struct EasyStrategy;

impl Strategy for EasyStrategy {
    fn choose_draw_source(
        &self,
        _hand: &[Tile],
        discard_top: Option<&Tile>,
        rng: &mut GameRng,
    ) -> DrawSource {
        if discard_top.is_some() && rng.gen_bool(0.3) {
            DrawSource::Discard
        } else {
            DrawSource::Deck
        }
    }

    fn choose_discard(&self, hand: &[Tile], rng: &mut GameRng) -> Option<TileId> {
        rng.choose(hand).map(|t| t.id)
    }
}

/// Medium: takes the discard when its color is already represented twice,
/// and sheds color-isolated tiles first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediumStrategy;

impl Strategy for MediumStrategy {
    fn choose_draw_source(
        &self,
        hand: &[Tile],
        discard_top: Option<&Tile>,
        rng: &mut GameRng,
    ) -> DrawSource {
        if let Some(top) = discard_top {
            let same_color = hand.iter().filter(|t| t.color == top.color).count();
            // The probability gate is only consulted once the color test
            // passes, keeping the RNG stream aligned across replays.
            if same_color >= 2 && rng.gen_bool(0.6) {
                return DrawSource::Discard;
            }
        }
        DrawSource::Deck
    }

    fn choose_discard(&self, hand: &[Tile], rng: &mut GameRng) -> Option<TileId> {
        if hand.is_empty() {
            return None;
        }

        let singles: Vec<Tile> = hand
            .iter()
            .filter(|t| hand.iter().filter(|o| o.color == t.color).count() == 1)
            .copied()
            .collect();

        if singles.is_empty() {
            rng.choose(hand).map(|t| t.id)
        } else {
            rng.choose(&singles).map(|t| t.id)
        }
    }
}

/// Hard: draws toward same-color neighborhoods and discards the tile with
/// the fewest nearby same-color companions.
#[derive(Clone, Copy, Debug, Default)]
pub struct HardStrategy;

impl HardStrategy {
    /// Count of same-color hand tiles within two numbers of `tile`,
    /// including the tile itself.
    fn companions(hand: &[Tile], tile: &Tile) -> usize {
        hand.iter()
            .filter(|t| {
                t.color == tile.color
                    && (i16::from(t.number) - i16::from(tile.number)).abs() <= 2
            })
            .count()
    }
}

impl Strategy for HardStrategy {
    fn choose_draw_source(
        &self,
        hand: &[Tile],
        discard_top: Option<&Tile>,
        rng: &mut GameRng,
    ) -> DrawSource {
        if let Some(top) = discard_top {
            let same_color = hand.iter().any(|t| t.color == top.color);
            let near_number = hand.iter().any(|t| {
                t.color == top.color
                    && (i16::from(t.number) - i16::from(top.number)).abs() <= 1
            });
            if (same_color || near_number) && rng.gen_bool(0.8) {
                return DrawSource::Discard;
            }
        }
        DrawSource::Deck
    }

    fn choose_discard(&self, hand: &[Tile], _rng: &mut GameRng) -> Option<TileId> {
        // Lowest companion count first; ties broken by lowest number, then
        // by hand position for a stable result.
        hand.iter()
            .enumerate()
            .min_by_key(|(i, t)| (Self::companions(hand, t), t.number, *i))
            .map(|(_, t)| t.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileColor;

    fn tile(id: u32, color: TileColor, number: u8) -> Tile {
        Tile::new(TileId(id), color, number)
    }

    #[test]
    fn test_difficulty_binding() {
        assert_eq!(Difficulty::for_seat(Seat::User), None);
        assert_eq!(Difficulty::for_seat(Seat::Ai1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::for_seat(Seat::Ai2), Some(Difficulty::Medium));
        assert_eq!(Difficulty::for_seat(Seat::Ai3), Some(Difficulty::Hard));
    }

    #[test]
    fn test_empty_discard_forces_deck() {
        let hand = [tile(0, TileColor::Red, 5)];
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut rng = GameRng::new(1);
            for _ in 0..20 {
                assert_eq!(
                    strategy_for(difficulty).choose_draw_source(&hand, None, &mut rng),
                    DrawSource::Deck,
                );
            }
        }
    }

    #[test]
    fn test_easy_draw_rate_is_roughly_thirty_percent() {
        let hand = [tile(0, TileColor::Red, 5)];
        let top = tile(1, TileColor::Blue, 9);
        let mut rng = GameRng::new(42);

        let trials = 2000;
        let discards = (0..trials)
            .filter(|_| {
                EasyStrategy.choose_draw_source(&hand, Some(&top), &mut rng)
                    == DrawSource::Discard
            })
            .count();

        let rate = discards as f64 / trials as f64;
        assert!((0.25..0.35).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_easy_discard_is_some_hand_tile() {
        let hand = [
            tile(0, TileColor::Red, 5),
            tile(1, TileColor::Blue, 9),
            tile(2, TileColor::Black, 2),
        ];
        let mut rng = GameRng::new(3);
        let chosen = EasyStrategy.choose_discard(&hand, &mut rng).unwrap();
        assert!(hand.iter().any(|t| t.id == chosen));

        assert!(EasyStrategy.choose_discard(&[], &mut rng).is_none());
    }

    #[test]
    fn test_medium_ignores_discard_without_color_support() {
        // Only one red in hand: the color test fails, so no probability
        // gate is consulted and the deck is always chosen.
        let hand = [tile(0, TileColor::Red, 5), tile(1, TileColor::Blue, 9)];
        let top = tile(2, TileColor::Red, 6);
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            assert_eq!(
                MediumStrategy.choose_draw_source(&hand, Some(&top), &mut rng),
                DrawSource::Deck,
            );
        }
    }

    #[test]
    fn test_medium_takes_discard_with_color_support() {
        let hand = [
            tile(0, TileColor::Red, 5),
            tile(1, TileColor::Red, 9),
            tile(2, TileColor::Blue, 3),
        ];
        let top = tile(3, TileColor::Red, 6);
        let mut rng = GameRng::new(42);

        let trials = 2000;
        let discards = (0..trials)
            .filter(|_| {
                MediumStrategy.choose_draw_source(&hand, Some(&top), &mut rng)
                    == DrawSource::Discard
            })
            .count();

        let rate = discards as f64 / trials as f64;
        assert!((0.55..0.65).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_medium_discards_color_isolated_single() {
        let hand = [
            tile(0, TileColor::Red, 5),
            tile(1, TileColor::Red, 6),
            tile(2, TileColor::Red, 7),
            tile(3, TileColor::Yellow, 11),
        ];
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let chosen = MediumStrategy.choose_discard(&hand, &mut rng).unwrap();
            assert_eq!(chosen, TileId(3));
        }
    }

    #[test]
    fn test_hard_takes_discard_near_same_color() {
        let hand = [tile(0, TileColor::Red, 5), tile(1, TileColor::Blue, 9)];
        let top = tile(2, TileColor::Red, 6);
        let mut rng = GameRng::new(42);

        let trials = 2000;
        let discards = (0..trials)
            .filter(|_| {
                HardStrategy.choose_draw_source(&hand, Some(&top), &mut rng)
                    == DrawSource::Discard
            })
            .count();

        let rate = discards as f64 / trials as f64;
        assert!((0.75..0.85).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_hard_never_takes_unrelated_discard() {
        let hand = [tile(0, TileColor::Red, 5)];
        let top = tile(1, TileColor::Blue, 9);
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            assert_eq!(
                HardStrategy.choose_draw_source(&hand, Some(&top), &mut rng),
                DrawSource::Deck,
            );
        }
    }

    #[test]
    fn test_hard_discards_loneliest_tile() {
        // Red 5,6,7 support each other; the yellow 12 has no companions
        // besides itself.
        let hand = [
            tile(0, TileColor::Red, 5),
            tile(1, TileColor::Red, 6),
            tile(2, TileColor::Red, 7),
            tile(3, TileColor::Yellow, 12),
        ];
        let mut rng = GameRng::new(42);
        assert_eq!(
            HardStrategy.choose_discard(&hand, &mut rng),
            Some(TileId(3))
        );
    }

    #[test]
    fn test_hard_breaks_ties_by_lowest_number() {
        let hand = [
            tile(0, TileColor::Yellow, 12),
            tile(1, TileColor::Black, 3),
        ];
        let mut rng = GameRng::new(42);
        // Both are isolated; the lower number goes.
        assert_eq!(
            HardStrategy.choose_discard(&hand, &mut rng),
            Some(TileId(1))
        );
    }

    #[test]
    fn test_strategies_are_seed_deterministic() {
        let hand: Vec<Tile> = (0..8)
            .map(|i| tile(i, TileColor::ALL[(i % 4) as usize], (i % 13 + 1) as u8))
            .collect();
        let top = tile(99, TileColor::Red, 4);

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let strategy = strategy_for(difficulty);
            let mut rng1 = GameRng::new(1717);
            let mut rng2 = GameRng::new(1717);

            for _ in 0..50 {
                assert_eq!(
                    strategy.choose_draw_source(&hand, Some(&top), &mut rng1),
                    strategy.choose_draw_source(&hand, Some(&top), &mut rng2),
                );
                assert_eq!(
                    strategy.choose_discard(&hand, &mut rng1),
                    strategy.choose_discard(&hand, &mut rng2),
                );
            }
        }
    }
}
