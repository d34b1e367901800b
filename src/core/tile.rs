//! Tile model for 101 Okey.
//!
//! A physical set holds 106 tiles: two copies of every (color, number)
//! combination for numbers 1-13 across four colors, plus two fake jokers
//! printed with number 0. Tiles are created once when the deck is built
//! and never mutated afterwards; only their container (deck, hand, rack,
//! discard pile) changes.
//!
//! ## The okey tile
//!
//! Which tile acts as the game's wildcard is decided per session by the
//! indicator draw: the okey is the same color as the indicator with the
//! next number up (13 wraps to 1). "Being okey" is a derived predicate
//! over `(color, number)`. It is never stored on the tile itself, because
//! both physical copies of that combination are wild.

use serde::{Deserialize, Serialize};

/// Unique identity of one physical tile within a session.
///
/// Both copies of e.g. (red, 5) are distinct tiles with distinct IDs;
/// hand operations address tiles by identity, never by face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID from a raw index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// The four tile colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    Red,
    Blue,
    Black,
    Yellow,
}

impl TileColor {
    /// All colors in the fixed scan order used by the rule engine.
    pub const ALL: [TileColor; 4] = [
        TileColor::Red,
        TileColor::Blue,
        TileColor::Black,
        TileColor::Yellow,
    ];

    /// Single-letter abbreviation for compact display.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            TileColor::Red => 'R',
            TileColor::Blue => 'B',
            TileColor::Black => 'K',
            TileColor::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TileColor::Red => "red",
            TileColor::Blue => "blue",
            TileColor::Black => "black",
            TileColor::Yellow => "yellow",
        };
        write!(f, "{name}")
    }
}

/// One physical tile. Immutable once created.
///
/// Fake jokers carry `number == 0` and `is_fake == true`; they are printed
/// in a real color (one red, one blue) but substitute for the session's
/// okey tile rather than scoring as their printed face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub color: TileColor,
    pub number: u8,
    pub is_fake: bool,
}

impl Tile {
    /// Create a regular (non-fake) tile.
    #[must_use]
    pub const fn new(id: TileId, color: TileColor, number: u8) -> Self {
        Self {
            id,
            color,
            number,
            is_fake: false,
        }
    }

    /// Create a fake joker tile (number 0).
    #[must_use]
    pub const fn fake(id: TileId, color: TileColor) -> Self {
        Self {
            id,
            color,
            number: 0,
            is_fake: true,
        }
    }

    /// Face-value equality, ignoring identity and fakeness.
    #[must_use]
    pub fn same_face(&self, other: &Tile) -> bool {
        self.color == other.color && self.number == other.number
    }
}

impl std::fmt::Display for Tile {
    /// Compact form like `R5`, `Y13`, or `B0F` for a fake joker.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.number)?;
        if self.is_fake {
            write!(f, "F")?;
        }
        Ok(())
    }
}

/// The session's wildcard descriptor: the (color, number) combination that
/// plays as a joker for this game.
///
/// Computed once from the indicator draw and fixed for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkeyDescriptor {
    pub color: TileColor,
    pub number: u8,
}

impl OkeyDescriptor {
    /// Derive the okey from the indicator tile.
    ///
    /// The okey is the indicator's color with the next number up; 13 wraps
    /// to 1. An indicator of number 0 (a fake joker drawn as indicator)
    /// yields number 1 of the fake's printed color.
    #[must_use]
    pub const fn from_indicator(indicator: &Tile) -> Self {
        Self {
            color: indicator.color,
            number: (indicator.number % 13) + 1,
        }
    }

    /// Check whether a tile is this session's okey.
    #[must_use]
    pub fn matches(&self, tile: &Tile) -> bool {
        tile.color == self.color && tile.number == self.number
    }
}

impl std::fmt::Display for OkeyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.number)
    }
}
