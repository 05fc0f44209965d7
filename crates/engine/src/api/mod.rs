//! API layer - gateway entry points.

pub mod discord;

pub use discord::{gateway_intents, DiscordHandler};
