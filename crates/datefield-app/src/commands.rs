//! Demo command parsing and the command registry.

use std::str::FromStr;

use datefield_core::{DateIso, Intent, YearMonthIso};

/// One line of demo input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the field.
    Intent(Intent),
    /// Open the panel programmatically.
    Open,
    /// Close the panel programmatically.
    Close,
    /// Print the rendered state.
    State,
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid argument: {0}")]
    Invalid(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?;
        let arg = words.next();
        if words.next().is_some() {
            return Err(ParseError::Invalid(line.trim().to_string()));
        }

        let command = match (name, arg) {
            ("activate", None) => Command::Intent(Intent::Activate),
            ("dismiss", None) => Command::Intent(Intent::Dismiss),
            ("clear", None) => Command::Intent(Intent::Clear),
            ("confirm", None) => Command::Intent(Intent::Confirm),
            ("prev", None) => Command::Intent(Intent::PrevMonth),
            ("next", None) => Command::Intent(Intent::NextMonth),
            ("focus", None) => Command::Intent(Intent::Focus),
            ("blur", None) => Command::Intent(Intent::Blur),
            ("pick", Some(date)) => {
                let date: DateIso = date
                    .parse()
                    .map_err(|_| ParseError::Invalid(date.to_string()))?;
                Command::Intent(Intent::SelectDate(date))
            }
            ("pick", None) => return Err(ParseError::Usage("pick YYYY-MM-DD")),
            ("goto", Some(month)) => {
                let month: YearMonthIso = month
                    .parse()
                    .map_err(|_| ParseError::Invalid(month.to_string()))?;
                Command::Intent(Intent::Navigate(month))
            }
            ("goto", None) => return Err(ParseError::Usage("goto YYYY-MM")),
            ("open", None) => Command::Open,
            ("close", None) => Command::Close,
            ("state", None) => Command::State,
            ("help", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            (_, Some(_)) if CommandRegistry::find(name).is_some() => {
                return Err(ParseError::Invalid(line.trim().to_string()));
            }
            _ => return Err(ParseError::Unknown(name.to_string())),
        };
        Ok(command)
    }
}

/// A documented demo command.
#[derive(Debug, Clone)]
pub struct CommandHelp {
    pub name: &'static str,
    pub args: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    pub const fn new(name: &'static str, args: &'static str, description: &'static str) -> Self {
        Self {
            name,
            args,
            description,
        }
    }

    /// Format the usage for display (e.g., "pick YYYY-MM-DD").
    pub fn usage(&self) -> String {
        if self.args.is_empty() {
            self.name.to_string()
        } else {
            format!("{} {}", self.name, self.args)
        }
    }
}

/// Registry of every demo command.
pub struct CommandRegistry;

impl CommandRegistry {
    pub fn all() -> Vec<CommandHelp> {
        vec![
            CommandHelp::new("activate", "", "Click the control (toggles the panel)"),
            CommandHelp::new("open", "", "Open the panel programmatically"),
            CommandHelp::new("close", "", "Close the panel programmatically"),
            CommandHelp::new("dismiss", "", "Dismiss the panel"),
            CommandHelp::new("clear", "", "Click the clear button"),
            CommandHelp::new("pick", "YYYY-MM-DD", "Click a date cell"),
            CommandHelp::new("confirm", "", "Commit the staged date"),
            CommandHelp::new("prev", "", "Show the previous month"),
            CommandHelp::new("next", "", "Show the next month"),
            CommandHelp::new("goto", "YYYY-MM", "Show a specific month"),
            CommandHelp::new("focus", "", "Focus the control"),
            CommandHelp::new("blur", "", "Blur the control"),
            CommandHelp::new("state", "", "Print the rendered state"),
            CommandHelp::new("help", "", "List commands"),
            CommandHelp::new("quit", "", "Exit the demo"),
        ]
    }

    pub fn find(name: &str) -> Option<CommandHelp> {
        Self::all().into_iter().find(|c| c.name == name)
    }

    /// Help text with one command per line.
    pub fn help_text() -> String {
        let all = Self::all();
        let width = all.iter().map(|c| c.usage().len()).max().unwrap_or(0);
        all.iter()
            .map(|c| format!("  {:width$}  {}", c.usage(), c.description, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
