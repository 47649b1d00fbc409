//! Line commands read from stdin

use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty line")]
    Empty,

    #[error("Not a number: {0}")]
    BadNumber(String),

    #[error("Unrecognised command: {0}")]
    Unknown(String),
}

/// What the user typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<sink> <value>` - the user dragged that control
    Drag { sink: String, value: i32 },
    /// `set <value>` - programmatic update
    Set(i32),
    /// `start <sink>`
    StartTracking(String),
    /// `stop <sink>`
    StopTracking(String),
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err(CommandError::Empty),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["set", value] => Ok(Command::Set(number(value)?)),
            ["start", sink] => Ok(Command::StartTracking(sink.to_string())),
            ["stop", sink] => Ok(Command::StopTracking(sink.to_string())),
            ["quit" | "exit" | "set" | "start" | "stop", ..] => {
                Err(CommandError::Unknown(line.trim().to_string()))
            }
            [sink, value] => Ok(Command::Drag {
                sink: sink.to_string(),
                value: number(value)?,
            }),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

fn number(s: &str) -> Result<i32, CommandError> {
    s.parse().map_err(|_| CommandError::BadNumber(s.to_string()))
}
