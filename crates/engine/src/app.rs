//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::config::BotConfig;
use crate::infrastructure::ports::{ChatPort, PageFetcher, RandomPort};
use crate::use_cases;
use crate::use_cases::dice::RollDice;
use crate::use_cases::spell::LookupSpell;
use crate::use_cases::CommandRouter;

/// Main application state.
///
/// Holds the use cases and the router the gateway handler dispatches into.
pub struct App {
    pub use_cases: UseCases,
    pub router: Arc<CommandRouter>,
}

/// Container for all use cases.
pub struct UseCases {
    pub dice: use_cases::DiceUseCases,
    pub spell: use_cases::SpellUseCases,
}

impl App {
    /// Create the application from its adapters.
    pub fn new(
        config: &BotConfig,
        fetcher: Arc<dyn PageFetcher>,
        chat: Arc<dyn ChatPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let dice = use_cases::DiceUseCases::new(Arc::new(RollDice::new(random)));
        let spell = use_cases::SpellUseCases::new(Arc::new(LookupSpell::new(
            fetcher,
            config.spell_base_url.clone(),
        )));

        let router = Arc::new(CommandRouter::new(chat, dice.clone(), spell.clone()));

        Self {
            use_cases: UseCases { dice, spell },
            router,
        }
    }
}
