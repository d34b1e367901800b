//! Pure rule queries over tile collections.
//!
//! Nothing in this module mutates game state: meld detection, opening
//! evaluation, and winning-hand checks all inspect hands and report.
//! The session layer applies their results.

pub mod meld;
pub mod opening;
pub mod winning;

pub use meld::{is_sequence, is_set, GreedyMeldFinder, MeldFinder, TileGroup, MELD_MIN};
pub use opening::{
    evaluate_opening, hand_value, is_okey, tile_value, OpenEvaluation, OPENING_THRESHOLD,
    PAIRS_REQUIRED,
};
pub use winning::{is_winning_hand, WINNING_HAND_SIZE};
