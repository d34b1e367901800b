//! Winning-hand legality.
//!
//! A finished hand must partition all fourteen tiles into valid melds,
//! with at most one floating tile accounted for by the final discard.
//! The partition search itself is not implemented: this check validates
//! the tile count and then reports "not a winning hand" unconditionally,
//! so rounds end through the session's explicit finish operation rather
//! than through play.
//!
//! TODO: implement the full meld-partition search (okey substitution,
//! one float tile) and wire real win detection through the discard path.

use crate::core::Tile;

/// Tiles a hand must hold for a winning declaration.
pub const WINNING_HAND_SIZE: usize = 14;

/// Check a hand for winning legality.
///
/// Currently only the size precondition is evaluated; every 14-tile hand
/// is reported as not winning.
#[must_use]
pub fn is_winning_hand(tiles: &[Tile]) -> bool {
    if tiles.len() != WINNING_HAND_SIZE {
        return false;
    }

    false
}
