//! Perspective-bound snapshots of a session.
//!
//! A snapshot is everything one seat is allowed to see: its own tiles by
//! identity, but only counts for every other seat. Snapshots are plain
//! serializable values computed on demand; the session never stores them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{OkeyDescriptor, Seat, TablePosition, TileColor, RACK_COUNT};
use crate::session::game::{GameSession, GameStatus};

/// One tile as exposed to a client, identity included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    /// Stable string form of the tile identity, e.g. `"t42"`.
    pub id: String,
    pub color: TileColor,
    pub number: u8,
    pub is_fake: bool,
}

impl TileView {
    fn of(tile: &crate::core::Tile) -> Self {
        Self {
            id: tile.id.to_string(),
            color: tile.color,
            number: tile.number,
            is_fake: tile.is_fake,
        }
    }
}

/// What one seat reveals to everyone: counts and public flags, never tile
/// identities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub name: String,
    pub tile_count: usize,
    pub rack_counts: [usize; RACK_COUNT],
    pub score: i32,
    pub has_opened: bool,
    pub position: TablePosition,
}

/// The full state of a session as seen from one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: String,
    pub round_number: u32,
    pub current_turn: Seat,
    pub status: GameStatus,
    /// The wildcard face, visible to everyone once the game starts.
    pub okey: Option<OkeyDescriptor>,
    pub indicator_tile: Option<TileView>,
    /// The perspective seat's own hand, identities included.
    pub hand: Vec<TileView>,
    /// The perspective seat's staging racks.
    pub racks: [Vec<TileView>; RACK_COUNT],
    pub discard_pile_top: Option<TileView>,
    pub deck_count: usize,
    pub players: FxHashMap<Seat, SeatView>,
}

impl GameSession {
    /// Build the snapshot visible from `perspective`.
    ///
    /// Only that seat's hand and racks carry tile identities; all other
    /// seats appear as counts. The discard top and the indicator are public.
    #[must_use]
    pub fn snapshot(&self, perspective: Seat) -> GameSnapshot {
        let me = &self.seats[perspective];

        let players = Seat::all()
            .map(|seat| {
                let state = &self.seats[seat];
                let view = SeatView {
                    name: state.name.clone(),
                    tile_count: state.hand_size(),
                    rack_counts: state.rack_counts(),
                    score: state.score,
                    has_opened: state.has_opened,
                    position: state.position,
                };
                (seat, view)
            })
            .collect();

        GameSnapshot {
            game_id: self.id.clone(),
            round_number: self.round_number,
            current_turn: self.current_turn,
            status: self.status,
            okey: self.okey,
            indicator_tile: self.indicator.as_ref().map(TileView::of),
            hand: me.hand.iter().map(TileView::of).collect(),
            racks: [
                me.racks[0].iter().map(TileView::of).collect(),
                me.racks[1].iter().map(TileView::of).collect(),
                me.racks[2].iter().map(TileView::of).collect(),
            ],
            discard_pile_top: self.discard.top().map(TileView::of),
            deck_count: self.deck.len(),
            players,
        }
    }
}
