//! Dice use cases.

use std::sync::Arc;

use beholder_domain::{RollRequest, RollResult};

use crate::infrastructure::ports::RandomPort;

/// Container for dice use cases.
#[derive(Clone)]
pub struct DiceUseCases {
    pub roll: Arc<RollDice>,
}

impl DiceUseCases {
    pub fn new(roll: Arc<RollDice>) -> Self {
        Self { roll }
    }
}

/// Roll a validated request against the shared random source.
pub struct RollDice {
    random: Arc<dyn RandomPort>,
}

impl RollDice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn execute(&self, request: RollRequest) -> RollResult {
        let result = request.roll_with(|min, max| self.random.gen_range(min, max));
        tracing::debug!(request = %request, result = %result, "Rolled dice");
        result
    }
}
