//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! A session always has exactly four seats in a fixed turn cycle:
//! `user → ai1 → ai2 → ai3 → user`. The user seat is the only human seat;
//! the three AI seats are auto-played by the turn controller.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by a fixed-size array for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four fixed turn positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    User,
    Ai1,
    Ai2,
    Ai3,
}

impl Seat {
    /// The fixed turn cycle, starting from the human seat.
    pub const CYCLE: [Seat; 4] = [Seat::User, Seat::Ai1, Seat::Ai2, Seat::Ai3];

    /// Iterate over all seats in turn order.
    pub fn all() -> impl Iterator<Item = Seat> {
        Self::CYCLE.into_iter()
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Seat {
        match self {
            Seat::User => Seat::Ai1,
            Seat::Ai1 => Seat::Ai2,
            Seat::Ai2 => Seat::Ai3,
            Seat::Ai3 => Seat::User,
        }
    }

    /// Whether this seat is auto-played.
    #[must_use]
    pub const fn is_ai(self) -> bool {
        !matches!(self, Seat::User)
    }

    /// 0-based position in the turn cycle.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::User => 0,
            Seat::Ai1 => 1,
            Seat::Ai2 => 2,
            Seat::Ai3 => 3,
        }
    }

    /// Stable string key, as used in serialized views.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Seat::User => "user",
            Seat::Ai1 => "ai1",
            Seat::Ai2 => "ai2",
            Seat::Ai3 => "ai3",
        }
    }

    /// Default display name for the seat.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Seat::User => "You",
            Seat::Ai1 => "Bot 1",
            Seat::Ai2 => "Bot 2",
            Seat::Ai3 => "Bot 3",
        }
    }

    /// Fixed table position of the seat.
    #[must_use]
    pub const fn position(self) -> TablePosition {
        match self {
            Seat::User => TablePosition::Bottom,
            Seat::Ai1 => TablePosition::Right,
            Seat::Ai2 => TablePosition::Top,
            Seat::Ai3 => TablePosition::Left,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Where a seat sits around the table, from the user's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TablePosition {
    Bottom,
    Right,
    Top,
    Left,
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a fixed `[T; 4]` with one entry per seat, indexed in turn
/// order. Use `SeatMap::new()` to create with a factory function.
///
/// ## Example
///
/// ```
/// use okey_engine::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<i32> = SeatMap::new(|_| 0);
/// scores[Seat::Ai2] = 100;
///
/// assert_eq!(scores[Seat::User], 0);
/// assert_eq!(scores[Seat::Ai2], 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 4],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    ///
    /// The factory receives the `Seat` for each entry.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: Seat::CYCLE.map(factory),
        }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SeatMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::CYCLE.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::CYCLE.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
