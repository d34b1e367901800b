//! Per-seat player state.
//!
//! Each seat owns a hand (multiset of tiles addressed by identity), three
//! staging racks, a score, and the opening bookkeeping flags. Racks are
//! purely organizational: tiles moved there are not validated as melds and
//! keep counting toward the seat's holdings.

use serde::{Deserialize, Serialize};

use super::seat::{Seat, TablePosition};
use super::tile::{Tile, TileId};

/// How many staging racks each seat has.
pub const RACK_COUNT: usize = 3;

/// Which qualification path a seat used when opening.
///
/// `None` is the resting value for a seat that has not opened, and also
/// the reported path when an opening evaluation finds no meld candidates
/// at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenPath {
    /// Five or more two-tile pairs.
    Pairs,
    /// Meld candidates totalling at least 101 points.
    Normal,
    /// No qualifying structure found.
    #[default]
    None,
}

/// Mutable state of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatState {
    pub seat: Seat,
    pub name: String,
    pub position: TablePosition,
    pub hand: Vec<Tile>,
    pub racks: [Vec<Tile>; RACK_COUNT],
    pub score: i32,
    /// Set by a successful opening declaration; never cleared afterwards.
    pub has_opened: bool,
    /// Set the instant a tile is drawn from the discard pile; cleared only
    /// by a successful opening in the same seat's turn.
    pub must_open_next: bool,
    /// Path recorded by the opening declaration.
    pub open_path: OpenPath,
}

impl SeatState {
    /// Create an empty seat with its default name and table position.
    #[must_use]
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            name: seat.default_name().to_string(),
            position: seat.position(),
            hand: Vec::new(),
            racks: [Vec::new(), Vec::new(), Vec::new()],
            score: 0,
            has_opened: false,
            must_open_next: false,
            open_path: OpenPath::None,
        }
    }

    /// Number of tiles currently held in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Tile counts per staging rack.
    #[must_use]
    pub fn rack_counts(&self) -> [usize; RACK_COUNT] {
        [self.racks[0].len(), self.racks[1].len(), self.racks[2].len()]
    }

    /// Total tiles this seat holds across hand and racks.
    #[must_use]
    pub fn tiles_held(&self) -> usize {
        self.hand_size() + self.racks.iter().map(Vec::len).sum::<usize>()
    }

    /// Look up a hand tile by identity.
    #[must_use]
    pub fn find_in_hand(&self, id: TileId) -> Option<&Tile> {
        self.hand.iter().find(|t| t.id == id)
    }

    /// Remove a tile from the hand by identity.
    ///
    /// Returns `None` (and leaves the hand untouched) if no tile with that
    /// identity is held.
    pub fn take_from_hand(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.hand.iter().position(|t| t.id == id)?;
        Some(self.hand.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::TileColor;

    fn tile(id: u32, number: u8) -> Tile {
        Tile::new(TileId(id), TileColor::Red, number)
    }

    #[test]
    fn test_new_seat_is_empty() {
        let state = SeatState::new(Seat::Ai2);

        assert_eq!(state.seat, Seat::Ai2);
        assert_eq!(state.name, "Bot 2");
        assert_eq!(state.position, TablePosition::Top);
        assert_eq!(state.hand_size(), 0);
        assert_eq!(state.rack_counts(), [0, 0, 0]);
        assert_eq!(state.score, 0);
        assert!(!state.has_opened);
        assert!(!state.must_open_next);
        assert_eq!(state.open_path, OpenPath::None);
    }

    #[test]
    fn test_take_from_hand() {
        let mut state = SeatState::new(Seat::User);
        state.hand.push(tile(1, 4));
        state.hand.push(tile(2, 5));

        let taken = state.take_from_hand(TileId(1)).unwrap();
        assert_eq!(taken.number, 4);
        assert_eq!(state.hand_size(), 1);

        assert!(state.take_from_hand(TileId(99)).is_none());
        assert_eq!(state.hand_size(), 1);
    }

    #[test]
    fn test_tiles_held_counts_racks() {
        let mut state = SeatState::new(Seat::User);
        state.hand.push(tile(1, 4));
        state.racks[0].push(tile(2, 5));
        state.racks[2].push(tile(3, 6));

        assert_eq!(state.tiles_held(), 3);
        assert_eq!(state.rack_counts(), [1, 0, 1]);
    }

    #[test]
    fn test_find_in_hand() {
        let mut state = SeatState::new(Seat::User);
        state.hand.push(tile(7, 11));

        assert!(state.find_in_hand(TileId(7)).is_some());
        assert!(state.find_in_hand(TileId(8)).is_none());
    }
}
