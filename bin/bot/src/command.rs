//! Bot command parsing.

/// A recognized bot command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Clear,
    Mode,
}

impl Command {
    /// Parses a command from message text.
    ///
    /// Only the first word is considered, and a `@botname` suffix is ignored.
    /// Returns `None` for plain text and for unknown commands, which are
    /// handled as prompts.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?;
        let name = word.strip_prefix('/')?;
        let name = name.split_once('@').map_or(name, |(name, _)| name);

        match name {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "clear" => Some(Self::Clear),
            "mode" => Some(Self::Mode),
            _ => None,
        }
    }
}
