//! Beholder Engine library.
//!
//! Chat bot that rolls dice and summarizes spells from their reference pages.
//!
//! ## Structure
//!
//! - `use_cases/` - Command routing, dice rolls and spell lookups
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Discord gateway entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared page fixtures for tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
