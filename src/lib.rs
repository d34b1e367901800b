//! # okey-engine
//!
//! A deterministic game engine for 101 Okey, the Turkish four-player
//! tile-rummy variant played with a 106-tile set.
//!
//! ## Architecture
//!
//! - [`core`]: value types shared by everything else. Tiles and their
//!   identities, the four-seat cycle, per-seat state, the seeded RNG, and
//!   the error taxonomy.
//! - [`deck`]: the 106-tile set, the shuffled draw queue, and the discard
//!   stack.
//! - [`rules`]: pure queries over hands. Meld detection, opening
//!   eligibility (101 points or five pairs), and the winning-hand check.
//! - [`ai`]: scripted opponents in three difficulty tiers, stateless and
//!   driven entirely by injected RNG streams.
//! - [`session`]: the stateful turn controller. One [`GameSession`] per
//!   match, perspective-bound [`snapshots`](GameSession::snapshot) for
//!   clients, and an in-memory [`SessionRegistry`].
//!
//! ## Determinism
//!
//! Every source of randomness descends from the session seed: the shuffle
//! uses the root stream and each AI seat gets its own derived stream.
//! Two sessions with equal seeds receiving equal call sequences evolve
//! identically, and a session restored from its serialized bytes continues
//! exactly where the original would have.
//!
//! ## Example
//!
//! ```
//! use okey_engine::ai::DrawSource;
//! use okey_engine::core::Seat;
//! use okey_engine::session::GameSession;
//!
//! let mut session = GameSession::new("table-1", 42);
//! let summary = session.start()?;
//! assert_eq!(summary.user_hand.len(), 21);
//!
//! // Draw, then discard; the three AI seats play automatically.
//! session.draw(Seat::User, DrawSource::Deck)?;
//! let tile_id = session.seat_state(Seat::User).hand[0].id;
//! let outcome = session.discard(Seat::User, tile_id)?;
//! assert_eq!(outcome.ai_turns.len(), 3);
//! assert_eq!(session.current_turn(), Seat::User);
//! # Ok::<(), okey_engine::core::EngineError>(())
//! ```

pub mod ai;
pub mod core;
pub mod deck;
pub mod rules;
pub mod session;

pub use crate::core::{
    EngineError, EngineResult, ErrorKind, GameRng, OkeyDescriptor, OpenPath, Seat, SeatMap,
    SeatState, Tile, TileColor, TileId,
};
pub use ai::{Difficulty, DrawSource, Strategy};
pub use deck::{Deck, DiscardPile, HAND_SIZE, TILE_COUNT};
pub use rules::{
    evaluate_opening, is_winning_hand, GreedyMeldFinder, MeldFinder, OpenEvaluation,
    OPENING_THRESHOLD, PAIRS_REQUIRED,
};
pub use session::{
    DiscardOutcome, GameSession, GameSnapshot, GameStatus, OpenOutcome, SessionRegistry,
    StartSummary, WIN_SCORE,
};
