//! The game session: turn controller and state machine.
//!
//! A session moves `Waiting → Playing → Finished` (terminal). While
//! playing, each seat's turn is draw → optional staging/opening → discard.
//! A discard advances the pointer through the fixed cycle
//! `user → ai1 → ai2 → ai3`; every consecutive AI seat plays its whole
//! turn synchronously inside the advancing call, so control only ever
//! rests on the human seat between mutating calls.
//!
//! The session applies one mutating call at a time and holds no internal
//! locking; a hosting layer must serialize calls per session (one mutex or
//! single-writer queue per session identity). Nothing here performs I/O;
//! persistence after each call is the host's concern, and the whole
//! session (RNG streams included) serializes for exactly that purpose.

use serde::{Deserialize, Serialize};

use crate::ai::{strategy_for, Difficulty, DrawSource};
use crate::core::{
    EngineError, EngineResult, GameRng, OkeyDescriptor, OpenPath, Seat, SeatMap, SeatState, Tile,
    TileId, RACK_COUNT,
};
use crate::deck::{Deck, DiscardPile, DISTRIBUTION_REQUIRES, HAND_SIZE, TILE_COUNT};
use crate::rules::{
    evaluate_opening, is_winning_hand, GreedyMeldFinder, MeldFinder, OPENING_THRESHOLD,
    PAIRS_REQUIRED,
};

/// Points awarded to the seat that goes out.
pub const WIN_SCORE: i32 = 100;

/// Lifecycle state of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

/// What the caller learns from a successful start.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartSummary {
    pub indicator: Tile,
    pub okey: OkeyDescriptor,
    /// The human seat's full dealt hand.
    pub user_hand: Vec<Tile>,
    /// The opening face-up tile.
    pub discard_top: Option<Tile>,
}

/// One auto-played AI turn, as reported back to the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AiTurnRecord {
    pub seat: Seat,
    pub difficulty: Difficulty,
    /// `None` when both draw sources were exhausted and the seat no-opped.
    pub drew_from: Option<DrawSource>,
    pub discarded: Option<Tile>,
}

/// Result of a human discard, including the AI turns it triggered.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiscardOutcome {
    pub discarded: Tile,
    pub game_over: bool,
    pub ai_turns: Vec<AiTurnRecord>,
}

/// Result of an opening attempt.
///
/// A shortfall is not an error: the call succeeds with `opened: false`
/// and the evaluated value, so the caller can explain the gap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpenOutcome {
    pub opened: bool,
    pub value: u32,
    pub path: OpenPath,
    pub message: String,
}

/// One 101 Okey match: four seats, a deck, a discard pile, and the turn
/// pointer. The unit of persistence and of (host-side) concurrency
/// control.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) id: String,
    pub(crate) seats: SeatMap<SeatState>,
    pub(crate) deck: Deck,
    pub(crate) discard: DiscardPile,
    pub(crate) indicator: Option<Tile>,
    pub(crate) okey: Option<OkeyDescriptor>,
    pub(crate) current_turn: Seat,
    pub(crate) round_number: u32,
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<Seat>,
    /// Shuffle stream.
    pub(crate) rng: GameRng,
    /// Independent decision stream per seat (the user entry is unused).
    pub(crate) ai_rngs: SeatMap<GameRng>,
}

impl GameSession {
    /// Create a session in the waiting state.
    ///
    /// The seed fixes the shuffle and every AI decision stream, so equal
    /// seeds replay identical games.
    #[must_use]
    pub fn new(id: impl Into<String>, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        let ai_rngs = SeatMap::new(|seat| rng.for_context(seat.key()));

        Self {
            id: id.into(),
            seats: SeatMap::new(SeatState::new),
            deck: Deck::new(),
            discard: DiscardPile::new(),
            indicator: None,
            okey: None,
            current_turn: Seat::User,
            round_number: 1,
            status: GameStatus::Waiting,
            winner: None,
            rng,
            ai_rngs,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn current_turn(&self) -> Seat {
        self.current_turn
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// The okey descriptor, set by `start`.
    #[must_use]
    pub fn okey(&self) -> Option<OkeyDescriptor> {
        self.okey
    }

    /// The indicator tile, set by `start`.
    #[must_use]
    pub fn indicator(&self) -> Option<Tile> {
        self.indicator
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard_top(&self) -> Option<&Tile> {
        self.discard.top()
    }

    #[must_use]
    pub fn seat_state(&self, seat: Seat) -> &SeatState {
        &self.seats[seat]
    }

    /// Direct mutable access to a seat, for hosts restoring or adjusting
    /// state outside the normal operations.
    pub fn seat_state_mut(&mut self, seat: Seat) -> &mut SeatState {
        &mut self.seats[seat]
    }

    /// Total tiles across deck, discard pile, all hands, all racks, and
    /// the indicator. Equals [`TILE_COUNT`] from `start` onwards.
    #[must_use]
    pub fn tiles_in_play(&self) -> usize {
        let held: usize = Seat::all().map(|s| self.seats[s].tiles_held()).sum();
        self.deck.len() + self.discard.len() + held + usize::from(self.indicator.is_some())
    }

    // === Lifecycle ===

    /// Start the match: build and shuffle the deck, draw the indicator,
    /// compute the okey, deal 21 tiles to each seat, and flip the opening
    /// discard. Runs exactly once per session.
    pub fn start(&mut self) -> EngineResult<StartSummary> {
        if self.status != GameStatus::Waiting {
            return Err(EngineError::AlreadyStarted);
        }

        self.deck = Deck::build(&mut self.rng);

        debug_assert!(self.indicator.is_none(), "indicator drawn twice");
        let indicator = self.deck.draw().ok_or(EngineError::DeckEmpty)?;
        let okey = OkeyDescriptor::from_indicator(&indicator);
        self.indicator = Some(indicator);
        self.okey = Some(okey);

        self.distribute()?;

        self.status = GameStatus::Playing;
        self.current_turn = Seat::User;

        debug_assert_eq!(self.tiles_in_play(), TILE_COUNT);
        log::info!(
            "game {}: started, indicator {indicator}, okey {okey}",
            self.id
        );

        Ok(StartSummary {
            indicator,
            okey,
            user_hand: self.seats[Seat::User].hand.clone(),
            discard_top: self.discard.top().copied(),
        })
    }

    /// Deal 21 tiles to every seat in turn order, then flip one tile onto
    /// the discard pile.
    fn distribute(&mut self) -> EngineResult<()> {
        if self.deck.len() < DISTRIBUTION_REQUIRES {
            return Err(EngineError::DeckTooSmall {
                remaining: self.deck.len(),
                required: DISTRIBUTION_REQUIRES,
            });
        }

        for seat in Seat::all() {
            let tiles = self.deck.draw_n(HAND_SIZE);
            self.seats[seat].hand.extend(tiles);
        }

        let flip = self.deck.draw().ok_or(EngineError::DeckEmpty)?;
        self.discard.push(flip);
        Ok(())
    }

    /// End the match. Idempotent; the session keeps its final state for
    /// inspection until the host drops it from the registry.
    pub fn finish(&mut self) {
        if self.status != GameStatus::Finished {
            self.status = GameStatus::Finished;
            log::info!("game {}: finished, winner {:?}", self.id, self.winner);
        }
    }

    // === Turn actions ===

    fn ensure_playing(&self) -> EngineResult<()> {
        if self.status == GameStatus::Playing {
            Ok(())
        } else {
            Err(EngineError::GameNotActive)
        }
    }

    fn ensure_turn(&self, seat: Seat) -> EngineResult<()> {
        if self.current_turn == seat {
            Ok(())
        } else {
            Err(EngineError::NotYourTurn {
                seat,
                current: self.current_turn,
            })
        }
    }

    /// Draw one tile from the chosen source into the seat's hand.
    ///
    /// Drawing from the discard pile obligates the seat to open this turn;
    /// the obligation is recorded on the seat but later actions are not
    /// blocked when it goes unmet.
    pub fn draw(&mut self, seat: Seat, source: DrawSource) -> EngineResult<Tile> {
        self.ensure_playing()?;
        self.ensure_turn(seat)?;

        let tile = match source {
            DrawSource::Discard => {
                let tile = self.discard.pop().ok_or(EngineError::DiscardEmpty)?;
                self.seats[seat].must_open_next = true;
                tile
            }
            DrawSource::Deck => self.deck.draw().ok_or(EngineError::DeckEmpty)?,
        };

        self.seats[seat].hand.push(tile);
        log::debug!("game {}: {seat} drew {tile} from {source}", self.id);
        Ok(tile)
    }

    /// Discard a hand tile by identity, then advance the turn. Every AI
    /// seat between this seat and the next human turn plays synchronously;
    /// the outcome reports each of those turns.
    pub fn discard(&mut self, seat: Seat, tile_id: TileId) -> EngineResult<DiscardOutcome> {
        self.ensure_playing()?;
        self.ensure_turn(seat)?;

        let tile = self.seats[seat]
            .take_from_hand(tile_id)
            .ok_or(EngineError::TileNotInHand(tile_id))?;
        self.discard.push(tile);
        log::debug!("game {}: {seat} discarded {tile}", self.id);

        if is_winning_hand(&self.seats[seat].hand) {
            self.declare_winner(seat);
            return Ok(DiscardOutcome {
                discarded: tile,
                game_over: true,
                ai_turns: Vec::new(),
            });
        }

        let ai_turns = self.advance_turn();
        Ok(DiscardOutcome {
            discarded: tile,
            game_over: self.status == GameStatus::Finished,
            ai_turns,
        })
    }

    /// Move the named hand tiles onto one of the three staging racks.
    ///
    /// Racks are organizational only; no meld validation happens here.
    /// Validation runs before any tile moves, so a failed call leaves the
    /// hand untouched.
    pub fn add_to_rack(
        &mut self,
        seat: Seat,
        rack_index: usize,
        tile_ids: &[TileId],
    ) -> EngineResult<()> {
        self.ensure_playing()?;
        if rack_index >= RACK_COUNT {
            return Err(EngineError::RackIndexOutOfRange(rack_index));
        }
        for &id in tile_ids {
            if self.seats[seat].find_in_hand(id).is_none() {
                return Err(EngineError::TileNotInHand(id));
            }
        }

        for &id in tile_ids {
            if let Some(tile) = self.seats[seat].take_from_hand(id) {
                self.seats[seat].racks[rack_index].push(tile);
            }
        }
        Ok(())
    }

    /// Attempt to open the seat's hand.
    ///
    /// Re-evaluates eligibility and mutates only on success; a shortfall
    /// is reported in the outcome, so the call is safe to repeat.
    pub fn open_hand(&mut self, seat: Seat) -> EngineResult<OpenOutcome> {
        self.ensure_playing()?;
        self.ensure_turn(seat)?;
        let okey = self.okey.ok_or(EngineError::GameNotActive)?;

        let finder = GreedyMeldFinder;
        let eval = evaluate_opening(&self.seats[seat].hand, &okey, &finder);

        if !eval.eligible {
            return Ok(OpenOutcome {
                opened: false,
                value: eval.value,
                path: eval.path,
                message: format!(
                    "Opening requires at least {OPENING_THRESHOLD} points or \
                     {PAIRS_REQUIRED} pairs; this hand evaluates to {}.",
                    eval.value
                ),
            });
        }

        let state = &mut self.seats[seat];
        state.has_opened = true;
        state.must_open_next = false;
        state.open_path = eval.path;

        let message = match eval.path {
            OpenPath::Pairs => {
                let pairs = finder.find_pairs(&state.hand).len();
                format!("Opened with {pairs} pairs.")
            }
            _ => format!("Opened with {} points.", eval.value),
        };
        log::info!("game {}: {seat} opened ({})", self.id, eval.value);

        Ok(OpenOutcome {
            opened: true,
            value: eval.value,
            path: eval.path,
            message,
        })
    }

    /// Rotate the turn pointer and auto-play every AI seat it lands on.
    ///
    /// An explicit loop bounded by the four-seat cycle: it runs at most
    /// three AI turns before the pointer returns to the human seat, and
    /// stops early if the game finishes.
    pub fn advance_turn(&mut self) -> Vec<AiTurnRecord> {
        let mut records = Vec::new();
        if self.status != GameStatus::Playing {
            return records;
        }

        self.current_turn = self.current_turn.next();
        while self.status == GameStatus::Playing && self.current_turn.is_ai() {
            if let Some(difficulty) = Difficulty::for_seat(self.current_turn) {
                records.push(self.play_ai_turn(self.current_turn, difficulty));
            }
            self.current_turn = self.current_turn.next();
        }

        debug_assert_eq!(self.tiles_in_play(), TILE_COUNT);
        records
    }

    /// Play one full AI turn: choose a draw source, draw, choose a
    /// discard, discard. Never fails; with both sources exhausted the seat
    /// no-ops, and with an empty hand nothing is discarded.
    fn play_ai_turn(&mut self, seat: Seat, difficulty: Difficulty) -> AiTurnRecord {
        let strategy = strategy_for(difficulty);
        let discard_top = self.discard.top().copied();

        let source = {
            let hand = &self.seats[seat].hand;
            strategy.choose_draw_source(hand, discard_top.as_ref(), &mut self.ai_rngs[seat])
        };

        let drew_from = match source {
            DrawSource::Discard => {
                if let Some(tile) = self.discard.pop() {
                    self.seats[seat].must_open_next = true;
                    self.seats[seat].hand.push(tile);
                    Some(DrawSource::Discard)
                } else if let Some(tile) = self.deck.draw() {
                    self.seats[seat].hand.push(tile);
                    Some(DrawSource::Deck)
                } else {
                    None
                }
            }
            DrawSource::Deck => {
                if let Some(tile) = self.deck.draw() {
                    self.seats[seat].hand.push(tile);
                    Some(DrawSource::Deck)
                } else {
                    None
                }
            }
        };

        let discarded = if drew_from.is_none() {
            None
        } else {
            let choice = {
                let hand = &self.seats[seat].hand;
                strategy.choose_discard(hand, &mut self.ai_rngs[seat])
            };
            choice
                .and_then(|id| self.seats[seat].take_from_hand(id))
                .map(|tile| {
                    self.discard.push(tile);
                    tile
                })
        };

        log::debug!(
            "game {}: {seat} ({difficulty:?}) drew from {drew_from:?}, discarded {discarded:?}",
            self.id
        );

        AiTurnRecord {
            seat,
            difficulty,
            drew_from,
            discarded,
        }
    }

    fn declare_winner(&mut self, seat: Seat) {
        self.winner = Some(seat);
        self.seats[seat].score += WIN_SCORE;
        self.status = GameStatus::Finished;
        log::info!("game {}: {seat} wins", self.id);
    }

    // === Persistence ===

    /// Serialize the full session, RNG streams included, for host-side
    /// persistence after a mutating call.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore a session previously serialized with [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
