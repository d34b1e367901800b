//! Game sessions: lifecycle, turn control, snapshots, and the registry.
//!
//! [`GameSession`] is the stateful heart of the engine; [`snapshot`]
//! projections bind it to one seat's view; [`SessionRegistry`] holds the
//! live sessions of a hosting process.
//!
//! [`snapshot`]: GameSession::snapshot

pub mod game;
pub mod registry;
pub mod view;

pub use game::{
    AiTurnRecord, DiscardOutcome, GameSession, GameStatus, OpenOutcome, StartSummary, WIN_SCORE,
};
pub use registry::SessionRegistry;
pub use view::{GameSnapshot, SeatView, TileView};
