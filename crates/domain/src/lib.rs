//! Beholder Domain - value objects for dice rolls and spell records.
//!
//! Nothing in this crate performs I/O or owns a random source. Rolls take an
//! injected generator so callers decide where randomness comes from.

pub mod value_objects;

pub use value_objects::{
    normalize_image_url, DiceParseError, DieSize, FieldDisplay, RollRequest, RollResult,
    SpellAttribute, SpellRecord, MAX_DICE_PER_ROLL,
};
