//! Recognizing commands in raw chat text.

use std::fmt;

/// Leading character that marks a line of chat as a command.
pub const COMMAND_MARKER: char = '!';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Roll,
    Spell,
}

impl CommandKind {
    const ALL: [CommandKind; 2] = [CommandKind::Roll, CommandKind::Spell];

    /// Command word including the marker.
    pub fn word(self) -> &'static str {
        match self {
            Self::Roll => "!roll",
            Self::Spell => "!spell",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::Roll => "!roll <dice>, e.g. !roll 2d20 or !roll stats",
            Self::Spell => "!spell <name>, e.g. !spell fireball",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.word().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A recognized command and whatever followed the command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    pub kind: CommandKind,
    /// Text after the first whitespace, verbatim. `None` when absent or blank.
    pub argument: Option<&'a str>,
}

impl<'a> Command<'a> {
    /// Recognize a command in raw message text.
    ///
    /// The marker must be the very first character. The command word is
    /// matched case-insensitively and must be the whole first token, so
    /// "!rolling" is not "!roll". Unknown commands give `None`.
    pub fn parse(content: &'a str) -> Option<Self> {
        if !content.starts_with(COMMAND_MARKER) {
            return None;
        }

        let (word, rest) = match content.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest)),
            None => (content, None),
        };

        let kind = CommandKind::from_word(word)?;
        let argument = rest.filter(|rest| !rest.trim().is_empty());

        Some(Self { kind, argument })
    }
}

/// A command arrived without the argument it needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("Usage: {}", .0.usage())]
    MissingArgument(CommandKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roll_with_argument() {
        assert_eq!(
            Command::parse("!roll 2d20"),
            Some(Command {
                kind: CommandKind::Roll,
                argument: Some("2d20"),
            })
        );
    }

    #[test]
    fn command_word_is_case_insensitive() {
        let command = Command::parse("!SPELL Fireball").unwrap();
        assert_eq!(command.kind, CommandKind::Spell);
        assert_eq!(command.argument, Some("Fireball"));

        assert_eq!(Command::parse("!Roll d6").unwrap().kind, CommandKind::Roll);
    }

    #[test]
    fn argument_is_taken_verbatim() {
        let command = Command::parse("!spell magic  missile ").unwrap();
        assert_eq!(command.argument, Some("magic  missile "));
    }

    #[test]
    fn missing_or_blank_argument_is_none() {
        assert_eq!(Command::parse("!roll").unwrap().argument, None);
        assert_eq!(Command::parse("!roll   ").unwrap().argument, None);
    }

    #[test]
    fn requires_leading_marker() {
        assert_eq!(Command::parse("roll 2d20"), None);
        assert_eq!(Command::parse(" !roll 2d20"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn ignores_unknown_commands() {
        assert_eq!(Command::parse("!help"), None);
        assert_eq!(Command::parse("!rolling 2d6"), None);
        assert_eq!(Command::parse("!"), None);
    }

    #[test]
    fn usage_error_names_the_command() {
        assert_eq!(
            UsageError::MissingArgument(CommandKind::Spell).to_string(),
            "Usage: !spell <name>, e.g. !spell fireball"
        );
    }
}
