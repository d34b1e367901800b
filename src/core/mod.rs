//! Core engine types: tiles, seats, player state, RNG, errors.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine is assembled from. Everything here is a plain value type; game
//! flow lives in `session`.

pub mod error;
pub mod player;
pub mod rng;
pub mod seat;
pub mod tile;

pub use error::{EngineError, EngineResult, ErrorKind};
pub use player::{OpenPath, SeatState, RACK_COUNT};
pub use rng::{GameRng, GameRngState};
pub use seat::{Seat, SeatMap, TablePosition};
pub use tile::{OkeyDescriptor, Tile, TileColor, TileId};
