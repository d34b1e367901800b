//! Meld detection: sequences, sets, pairs, and the greedy candidate scan.
//!
//! ## Validity checks
//!
//! `is_sequence` and `is_set` are strict structural checks over explicit
//! tile groups; they do not substitute okeys. Wildcard substitution only
//! matters for final winning-hand legality, which is handled separately.
//!
//! ## The greedy finder
//!
//! `GreedyMeldFinder` answers "roughly what could this hand open with?"
//! It scans each color's sorted tiles once, consuming maximal runs, then
//! extracts same-number color-distinct triples from the leftovers. It is
//! deliberately order-dependent and non-exhaustive: a duplicated number
//! breaks a run scan, and no alternate partition is searched for a higher
//! total. Callers needing an exact answer should implement [`MeldFinder`]
//! with a real partition search and swap it in; the opening evaluator only
//! talks to the trait.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Tile, TileColor};

/// A small group of tiles forming (or proposed as) one meld or pair.
pub type TileGroup = SmallVec<[Tile; 4]>;

/// Minimum tiles in a valid meld.
pub const MELD_MIN: usize = 3;

/// Check whether tiles form a valid sequence: at least three tiles, all
/// the same color, with sorted numbers forming a strictly contiguous
/// ascending run. Duplicate numbers invalidate the run.
#[must_use]
pub fn is_sequence(tiles: &[Tile]) -> bool {
    if tiles.len() < MELD_MIN {
        return false;
    }
    let color = tiles[0].color;
    if tiles.iter().any(|t| t.color != color) {
        return false;
    }

    let mut numbers: SmallVec<[u8; 8]> = tiles.iter().map(|t| t.number).collect();
    numbers.sort_unstable();
    numbers.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Check whether tiles form a valid set: at least three tiles, all the
/// same number, with pairwise distinct colors.
#[must_use]
pub fn is_set(tiles: &[Tile]) -> bool {
    if tiles.len() < MELD_MIN {
        return false;
    }
    let number = tiles[0].number;
    if tiles.iter().any(|t| t.number != number) {
        return false;
    }

    // Four colors exist, so a distinct group has at most four tiles.
    let mut seen: SmallVec<[TileColor; 4]> = SmallVec::new();
    for tile in tiles {
        if seen.contains(&tile.color) {
            return false;
        }
        seen.push(tile.color);
    }
    true
}

/// Finds pair groups and meld candidates in a hand.
///
/// The opening evaluator is written against this trait so the greedy
/// heuristic can be replaced by an exhaustive partitioner without touching
/// callers.
pub trait MeldFinder {
    /// Group the hand into two-tile pairs: same number, different colors.
    ///
    /// A greedy, non-exhaustive matching. Tiles are grouped by number in
    /// hand order and paired two at a time; an adjacent same-color pair is
    /// skipped rather than re-matched, so the result may under-count the
    /// maximum achievable pairing for the hand.
    fn find_pairs(&self, hand: &[Tile]) -> Vec<TileGroup>;

    /// Extract candidate melds from the hand.
    ///
    /// Greedy and order-dependent: the returned candidates are one
    /// plausible covering, not the value-maximal one.
    fn find_meld_candidates(&self, hand: &[Tile]) -> Vec<TileGroup>;
}

/// The single-pass greedy finder used for opening estimation.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyMeldFinder;

impl MeldFinder for GreedyMeldFinder {
    fn find_pairs(&self, hand: &[Tile]) -> Vec<TileGroup> {
        let mut by_number: FxHashMap<u8, Vec<&Tile>> = FxHashMap::default();
        for tile in hand {
            by_number.entry(tile.number).or_default().push(tile);
        }

        let mut numbers: Vec<u8> = by_number.keys().copied().collect();
        numbers.sort_unstable();

        let mut pairs = Vec::new();
        for number in numbers {
            let group = &by_number[&number];
            let mut i = 0;
            while i + 1 < group.len() {
                if group[i].color != group[i + 1].color {
                    pairs.push(TileGroup::from_slice(&[*group[i], *group[i + 1]]));
                }
                i += 2;
            }
        }
        pairs
    }

    fn find_meld_candidates(&self, hand: &[Tile]) -> Vec<TileGroup> {
        let mut candidates = Vec::new();
        let mut consumed: Vec<bool> = vec![false; hand.len()];

        // Phase 1: maximal contiguous runs per color. Within a color the
        // tiles are scanned in sorted number order; a run of length >= 3
        // is consumed and the scan resumes after it. A duplicated number
        // sits between run halves and breaks the scan.
        for color in TileColor::ALL {
            let mut indices: Vec<usize> = (0..hand.len())
                .filter(|&i| hand[i].color == color)
                .collect();
            indices.sort_by_key(|&i| hand[i].number);

            let mut i = 0;
            while i < indices.len() {
                let mut j = i + 1;
                while j < indices.len()
                    && hand[indices[j]].number == hand[indices[j - 1]].number + 1
                {
                    j += 1;
                }
                if j - i >= MELD_MIN {
                    let run: TileGroup = indices[i..j].iter().map(|&k| hand[k]).collect();
                    for &k in &indices[i..j] {
                        consumed[k] = true;
                    }
                    candidates.push(run);
                    i = j;
                } else {
                    i += 1;
                }
            }
        }

        // Phase 2: same-number triples over the unconsumed remainder. A
        // number group qualifies only when every tile in it has a distinct
        // color; the first three (in hand order) form the candidate.
        let mut by_number: FxHashMap<u8, Vec<&Tile>> = FxHashMap::default();
        for (i, tile) in hand.iter().enumerate() {
            if !consumed[i] {
                by_number.entry(tile.number).or_default().push(tile);
            }
        }

        let mut numbers: Vec<u8> = by_number.keys().copied().collect();
        numbers.sort_unstable();

        for number in numbers {
            let group = &by_number[&number];
            if group.len() < MELD_MIN {
                continue;
            }
            let mut seen: SmallVec<[TileColor; 4]> = SmallVec::new();
            let distinct = group.iter().all(|t| {
                if seen.contains(&t.color) {
                    false
                } else {
                    seen.push(t.color);
                    true
                }
            });
            if distinct {
                candidates.push(group[..MELD_MIN].iter().map(|t| **t).collect());
            }
        }

        candidates
    }
}
