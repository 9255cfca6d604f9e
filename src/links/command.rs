//! Slash-command recognition

/// Commands that receive a canned reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/about`
    About,
}

impl Command {
    /// Command name without the slash
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::About => "about",
        }
    }
}

/// Parse a leading slash-command
///
/// Only the first whitespace-separated token is considered. A `@botname`
/// suffix is ignored. Unknown commands (including mode tokens like `/audio`)
/// return `None`.
#[must_use]
pub fn parse_command(text: &str) -> Option<Command> {
    let token = text.split_whitespace().next()?;
    let name = token.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);

    match name.to_ascii_lowercase().as_str() {
        "start" => Some(Command::Start),
        "help" => Some(Command::Help),
        "about" => Some(Command::About),
        _ => None,
    }
}
