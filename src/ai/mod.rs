//! AI opponents: per-difficulty draw and discard decision functions.

pub mod strategy;

pub use strategy::{
    strategy_for, Difficulty, DrawSource, EasyStrategy, HardStrategy, MediumStrategy, Strategy,
};
