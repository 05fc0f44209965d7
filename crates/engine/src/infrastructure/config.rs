//! Process configuration read from the environment.

use std::fmt;

use crate::infrastructure::dndbeyond::{DEFAULT_SPELL_BASE_URL, DEFAULT_USER_AGENT};

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const SPELL_BASE_URL_VAR: &str = "SPELL_BASE_URL";
pub const USER_AGENT_VAR: &str = "BEHOLDER_USER_AGENT";
pub const HTTP_TIMEOUT_VAR: &str = "HTTP_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN must be set to the bot's session token")]
    MissingToken,
    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Startup configuration. Only the token is required.
#[derive(Clone)]
pub struct BotConfig {
    pub bot_token: String,
    /// Always ends with `/`
    pub spell_base_url: String,
    pub user_agent: String,
    /// `None` leaves the transport default in place.
    pub http_timeout_secs: Option<u64>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bot_token = var(BOT_TOKEN_VAR).ok_or(ConfigError::MissingToken)?;

        let mut spell_base_url =
            var(SPELL_BASE_URL_VAR).unwrap_or_else(|| DEFAULT_SPELL_BASE_URL.to_string());
        if !spell_base_url.ends_with('/') {
            spell_base_url.push('/');
        }

        let user_agent = var(USER_AGENT_VAR).unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http_timeout_secs = var(HTTP_TIMEOUT_VAR)
            .map(|value| {
                value.parse().map_err(|_| ConfigError::Invalid {
                    name: HTTP_TIMEOUT_VAR,
                    value,
                })
            })
            .transpose()?;

        Ok(Self {
            bot_token,
            spell_base_url,
            user_agent,
            http_timeout_secs,
        })
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("spell_base_url", &self.spell_base_url)
            .field("user_agent", &self.user_agent)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn token_is_required() {
        assert!(matches!(
            BotConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingToken)
        ));
        assert!(matches!(
            BotConfig::from_lookup(lookup(&[(BOT_TOKEN_VAR, "   ")])),
            Err(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn defaults_apply() {
        let config = BotConfig::from_lookup(lookup(&[(BOT_TOKEN_VAR, "abc")])).unwrap();
        assert_eq!(config.bot_token, "abc");
        assert_eq!(config.spell_base_url, DEFAULT_SPELL_BASE_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.http_timeout_secs, None);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = BotConfig::from_lookup(lookup(&[
            (BOT_TOKEN_VAR, "abc"),
            (SPELL_BASE_URL_VAR, "http://localhost:8080/spells"),
        ]))
        .unwrap();
        assert_eq!(config.spell_base_url, "http://localhost:8080/spells/");
    }

    #[test]
    fn timeout_must_be_numeric() {
        let result = BotConfig::from_lookup(lookup(&[
            (BOT_TOKEN_VAR, "abc"),
            (HTTP_TIMEOUT_VAR, "soon"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { name: HTTP_TIMEOUT_VAR, .. })
        ));

        let config =
            BotConfig::from_lookup(lookup(&[(BOT_TOKEN_VAR, "abc"), (HTTP_TIMEOUT_VAR, "15")]))
                .unwrap();
        assert_eq!(config.http_timeout_secs, Some(15));
    }

    #[test]
    fn debug_redacts_token() {
        let config = BotConfig::from_lookup(lookup(&[(BOT_TOKEN_VAR, "super-secret")])).unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
