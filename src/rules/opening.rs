//! Opening eligibility: tile values and the 101-point / five-pair rule.
//!
//! A seat may open either with five or more pairs, or with meld candidates
//! whose combined tile value reaches 101. The pairs path is checked first.
//! Fake jokers and the session's okey tile are worth zero, so a wildcard
//! inside a candidate contributes structure but no points.
//!
//! Evaluation is pure: it inspects the hand and reports. The conditional
//! state mutation (setting `has_opened`, clearing the forced-open flag)
//! belongs to the session layer.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{OkeyDescriptor, OpenPath, Tile, TileId};

use super::meld::MeldFinder;

/// Minimum combined tile value for a normal opening.
pub const OPENING_THRESHOLD: u32 = 101;

/// Minimum pair count for a pairs opening.
pub const PAIRS_REQUIRED: usize = 5;

/// Whether a tile is this session's wildcard.
#[must_use]
pub fn is_okey(tile: &Tile, okey: &OkeyDescriptor) -> bool {
    okey.matches(tile)
}

/// Point value of a tile: its printed number, or zero for fake jokers and
/// the okey tile.
#[must_use]
pub fn tile_value(tile: &Tile, okey: &OkeyDescriptor) -> u32 {
    if tile.is_fake || is_okey(tile, okey) {
        0
    } else {
        u32::from(tile.number)
    }
}

/// Result of an opening evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenEvaluation {
    pub eligible: bool,
    /// Combined value of the qualifying structure (pairs or deduplicated
    /// meld candidates). On an ineligible normal-path result this is the
    /// shortfall value actually reached.
    pub value: u32,
    pub path: OpenPath,
}

/// Evaluate whether a hand qualifies to open.
///
/// The pairs path is tried first: with `PAIRS_REQUIRED` or more pairs the
/// hand opens at the summed value of all paired tiles. Otherwise the meld
/// candidates are valued, counting each tile identity at most once; the
/// hand opens when the total reaches `OPENING_THRESHOLD`. A hand with no
/// candidates at all reports `OpenPath::None`.
#[must_use]
pub fn evaluate_opening(
    hand: &[Tile],
    okey: &OkeyDescriptor,
    finder: &dyn MeldFinder,
) -> OpenEvaluation {
    let pairs = finder.find_pairs(hand);
    if pairs.len() >= PAIRS_REQUIRED {
        let value = pairs
            .iter()
            .flat_map(|pair| pair.iter())
            .map(|t| tile_value(t, okey))
            .sum();
        return OpenEvaluation {
            eligible: true,
            value,
            path: OpenPath::Pairs,
        };
    }

    let candidates = finder.find_meld_candidates(hand);
    if candidates.is_empty() {
        return OpenEvaluation {
            eligible: false,
            value: 0,
            path: OpenPath::None,
        };
    }

    let mut counted: FxHashSet<TileId> = FxHashSet::default();
    let mut value = 0u32;
    for candidate in &candidates {
        for tile in candidate {
            if counted.insert(tile.id) {
                value += tile_value(tile, okey);
            }
        }
    }

    OpenEvaluation {
        eligible: value >= OPENING_THRESHOLD,
        value,
        path: OpenPath::Normal,
    }
}

/// Plain sum of the printed values in a hand, okeys and fakes at zero.
#[must_use]
pub fn hand_value(hand: &[Tile], okey: &OkeyDescriptor) -> u32 {
    hand.iter().map(|t| tile_value(t, okey)).sum()
}
