//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod discord;
pub mod dndbeyond;
pub mod ports;
pub mod random;
pub mod spell_page;
