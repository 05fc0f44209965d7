//! Dice rolling value objects and parsing
//!
//! Supports the compact notation "XdY" where X is an optional count and Y
//! one of the standard polyhedral dice: "2d20", "d6", "4D8".

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Upper bound on dice in a single request; keeps replies inside one chat message.
pub const MAX_DICE_PER_ROLL: u32 = 100;

/// Error when parsing a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The count before the separator is not a positive integer
    #[error("Invalid dice count: '{0}'")]
    InvalidCount(String),
    /// The sides after the separator are missing or not an integer
    #[error("Invalid dice sides: '{0}'")]
    InvalidSides(String),
    /// The sides parsed, but no such die is supported
    #[error("Invalid dice type, must be a d4, d6, d8, d10, d12 or d20")]
    UnsupportedDie(i64),
    /// More dice than a single reply can carry.
    ///
    /// This bound is an addition to the plain `XdY` grammar: any count
    /// above [`MAX_DICE_PER_ROLL`] is refused even though it is otherwise
    /// well formed, so one reply always fits in a single chat message.
    #[error("Too many dice: {requested} requested, at most {max} per roll")]
    TooManyDice { requested: i64, max: u32 },
}

/// One of the supported polyhedral dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieSize {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
}

impl DieSize {
    /// Every supported die, smallest first.
    pub const ALL: [DieSize; 6] = [
        DieSize::D4,
        DieSize::D6,
        DieSize::D8,
        DieSize::D10,
        DieSize::D12,
        DieSize::D20,
    ];

    /// Look up the die with the given number of faces.
    pub fn from_sides(sides: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|die| i64::from(die.sides()) == sides)
    }

    /// Number of faces on this die.
    pub fn sides(self) -> u8 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A parsed roll request like "3d6"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRequest {
    /// Number of dice to roll (X in XdY), always at least 1
    count: u32,
    /// Die to roll (Y in XdY)
    die: DieSize,
}

impl RollRequest {
    /// Create a roll request, enforcing the count bounds.
    pub fn new(count: u32, die: DieSize) -> Result<Self, DiceParseError> {
        if count == 0 {
            return Err(DiceParseError::InvalidCount(count.to_string()));
        }
        if count > MAX_DICE_PER_ROLL {
            return Err(DiceParseError::TooManyDice {
                requested: i64::from(count),
                max: MAX_DICE_PER_ROLL,
            });
        }
        Ok(Self { count, die })
    }

    /// Six d20, one per ability score.
    pub fn stats() -> Self {
        Self {
            count: 6,
            die: DieSize::D20,
        }
    }

    /// Parse a dice formula string like "2d20", "d6" or "4D8"
    ///
    /// The input is split on the letter `d` (either case) into at most three
    /// fragments. Only the first two are read: the count and the sides. A
    /// third fragment, from input such as "2d6d8", is ignored.
    ///
    /// - An empty count means one die.
    /// - Whitespace is not trimmed; "2d6 " is an invalid sides value.
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let mut fragments = input.splitn(3, ['d', 'D']);

        // splitn always yields a first fragment, possibly empty
        let count_str = fragments.next().unwrap_or("");
        let count: i64 = if count_str.is_empty() {
            1 // "d20" means "1d20"
        } else {
            count_str
                .parse()
                .map_err(|_| DiceParseError::InvalidCount(count_str.to_string()))?
        };

        if count < 1 {
            return Err(DiceParseError::InvalidCount(count_str.to_string()));
        }

        let sides_str = fragments
            .next()
            .ok_or_else(|| DiceParseError::InvalidSides(String::new()))?;
        let sides: i64 = sides_str
            .parse()
            .map_err(|_| DiceParseError::InvalidSides(sides_str.to_string()))?;

        let die = DieSize::from_sides(sides).ok_or(DiceParseError::UnsupportedDie(sides))?;

        let count = u32::try_from(count)
            .ok()
            .filter(|count| *count <= MAX_DICE_PER_ROLL)
            .ok_or(DiceParseError::TooManyDice {
                requested: count,
                max: MAX_DICE_PER_ROLL,
            })?;

        Ok(Self { count, die })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn die(&self) -> DieSize {
        self.die
    }

    /// Roll the dice using an injected generator.
    ///
    /// `gen_range(min, max)` must return a value in the inclusive range
    /// `[min, max]`. It is called exactly `count` times, in order.
    pub fn roll_with(&self, mut gen_range: impl FnMut(i32, i32) -> i32) -> RollResult {
        let max = i32::from(self.die.sides());
        let rolls = (0..self.count).map(|_| gen_range(1, max)).collect();

        RollResult {
            request: *self,
            rolls,
        }
    }
}

impl fmt::Display for RollRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}

/// Result of rolling dice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResult {
    /// The request that was rolled
    pub request: RollRequest,
    /// Individual die results in roll order
    pub rolls: Vec<i32>,
}

/// Formats as a bracketed, space separated list: "[14 3]"
impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, roll) in self.rolls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", roll)?;
        }
        f.write_str("]")
    }
}
