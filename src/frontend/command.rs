use crate::board::Move;

/// One line of input to the text front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Board,
    Turn,
    Moves(String),
    Select(String),
    Click(String),
    Play(String),
    Position(Vec<String>),
    SetOption(Vec<String>),
    Quit,
    Unknown(String),
}

/// Parse a line of input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();
    let arg = |cmd: fn(String) -> Command| match parts.get(1) {
        Some(value) if parts.len() == 2 => cmd((*value).to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    };

    let cmd = match first {
        "new" => Command::NewGame,
        "board" | "d" => Command::Board,
        "turn" => Command::Turn,
        "moves" => arg(Command::Moves),
        "select" => arg(Command::Select),
        "click" => arg(Command::Click),
        "move" => arg(Command::Play),
        "position" => Command::Position(owned_parts()),
        "setoption" => Command::SetOption(owned_parts()),
        "quit" => Command::Quit,
        bare if parts.len() == 1 && bare.parse::<Move>().is_ok() => {
            Command::Play(bare.to_string())
        }
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
