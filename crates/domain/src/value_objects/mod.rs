//! Value objects - Immutable objects defined by their attributes

mod dice;
mod spell;

pub use dice::{DiceParseError, DieSize, RollRequest, RollResult, MAX_DICE_PER_ROLL};
pub use spell::{normalize_image_url, FieldDisplay, SpellAttribute, SpellRecord};
