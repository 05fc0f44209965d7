//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific command.

pub mod command;
pub mod dice;
pub mod spell;

// Re-export main types
pub use command::{Command, CommandKind, CommandRouter, UsageError};
pub use dice::DiceUseCases;
pub use spell::SpellUseCases;
