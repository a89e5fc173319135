//! DateField Demo Application
//!
//! A terminal shell around the date picker: mounts a field on an in-memory
//! document and drives it with one command per line.

mod app;
mod commands;

pub use app::{App, AppConfig, AppError, AppResult, Flow};
pub use commands::{Command, CommandHelp, CommandRegistry, ParseError};
