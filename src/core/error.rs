//! Engine error taxonomy.
//!
//! Three kinds of hard failure exist:
//!
//! - **Validation**: malformed input (unknown tile identity, out-of-range
//!   rack index). No state mutation occurs.
//! - **IllegalAction**: a structurally valid request that violates game
//!   rules or timing (drawing from an empty source, acting out of turn,
//!   starting a session twice). Carries diagnostic data where useful.
//! - **NotFound**: reference to a nonexistent session.
//!
//! Game-logic negatives are deliberately NOT errors: an opening attempt
//! that falls short of 101 points is a successful call whose result
//! encodes the shortfall. Only structurally invalid or out-of-turn
//! operations surface here.

use thiserror::Error;

use super::seat::Seat;
use super::tile::TileId;

/// Coarse error class, for mapping to transport-level codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    IllegalAction,
    NotFound,
}

/// Errors surfaced by engine operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("tile {0} is not in this seat's hand")]
    TileNotInHand(TileId),

    #[error("rack index {0} is out of range (expected 0..=2)")]
    RackIndexOutOfRange(usize),

    #[error("the deck has no tiles left to draw")]
    DeckEmpty,

    #[error("the discard pile is empty")]
    DiscardEmpty,

    #[error("it is {current}'s turn, not {seat}'s")]
    NotYourTurn { seat: Seat, current: Seat },

    #[error("the game is not in the playing state")]
    GameNotActive,

    #[error("the game has already been started")]
    AlreadyStarted,

    #[error("deck holds {remaining} tiles but distribution requires {required}")]
    DeckTooSmall { remaining: usize, required: usize },

    #[error("no game found with id {0:?}")]
    GameNotFound(String),
}

impl EngineError {
    /// Which class of failure this is.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::TileNotInHand(_) | EngineError::RackIndexOutOfRange(_) => {
                ErrorKind::Validation
            }
            EngineError::DeckEmpty
            | EngineError::DiscardEmpty
            | EngineError::NotYourTurn { .. }
            | EngineError::GameNotActive
            | EngineError::AlreadyStarted
            | EngineError::DeckTooSmall { .. } => ErrorKind::IllegalAction,
            EngineError::GameNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Convenience alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
