//! Demo application: mounts a field on an in-memory document and drives it
//! from line-oriented commands.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use datefield_core::bootstrap::COMPONENT_SELECTOR;
use datefield_core::{
    Callbacks, DatePickerField, FieldConfig, FieldError, MemoryDocument, MemorySurface, Slot,
    demo_config, mount,
};
use thiserror::Error;

use crate::commands::{Command, CommandRegistry};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// JSON field configuration; the built-in demo config when absent.
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Build from command-line arguments (program name already skipped).
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        Self {
            config_path: args.next().map(PathBuf::from),
        }
    }

    /// Load the field configuration this app should mount.
    pub fn field_config(&self) -> AppResult<FieldConfig> {
        match &self.config_path {
            Some(path) => {
                log::info!("Loading field config from {}", path.display());
                let json = std::fs::read_to_string(path)?;
                Ok(FieldConfig::from_json(&json)?)
            }
            None => Ok(demo_config()),
        }
    }
}

/// Whether the command loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The demo application.
pub struct App {
    field: DatePickerField<MemorySurface>,
    /// Callback notifications not yet printed.
    events: Rc<RefCell<Vec<String>>>,
}

impl App {
    /// Mount a field with `config` on a fresh in-memory document.
    pub fn new(config: FieldConfig) -> AppResult<Self> {
        let mut document = MemoryDocument::new();
        document.insert(COMPONENT_SELECTOR, MemorySurface::new());

        let events = Rc::new(RefCell::new(Vec::new()));
        let field = mount(
            &mut document,
            COMPONENT_SELECTOR,
            config,
            recording_callbacks(&events),
        )?;
        Ok(Self { field, events })
    }

    /// Run the demo on stdin/stdout.
    pub fn run(config: AppConfig) -> AppResult<()> {
        let mut app = Self::new(config.field_config()?)?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        app.run_with(stdin.lock(), stdout.lock())
    }

    pub fn field(&self) -> &DatePickerField<MemorySurface> {
        &self.field
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run_with(&mut self, input: impl BufRead, mut output: impl Write) -> AppResult<()> {
        writeln!(output, "DateField demo. Type `help` for commands.")?;
        writeln!(output, "{}", self.snapshot())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "error: {}", err)?;
                    continue;
                }
            };

            let flow = self.execute(command, &mut output)?;
            for event in self.drain_events() {
                writeln!(output, "  {}", event)?;
            }
            if flow == Flow::Quit {
                break;
            }
        }

        self.field.destroy();
        Ok(())
    }

    /// Apply one command, writing its direct result to `output`.
    pub fn execute(&mut self, command: Command, output: &mut impl Write) -> AppResult<Flow> {
        match command {
            Command::Intent(intent) => {
                let outcome = self.field.dispatch(intent)?;
                writeln!(output, "{:?} -> {:?}", intent, outcome)?;
            }
            Command::Open => {
                self.field.open()?;
                writeln!(output, "open -> panel {}", visibility(&self.field, Slot::Panel))?;
            }
            Command::Close => {
                self.field.close()?;
                writeln!(output, "close -> panel {}", visibility(&self.field, Slot::Panel))?;
            }
            Command::State => writeln!(output, "{}", self.snapshot())?,
            Command::Help => writeln!(output, "{}", CommandRegistry::help_text())?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Take the callback notifications recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<String> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// The rendered state as JSON.
    pub fn snapshot(&self) -> serde_json::Value {
        let field = &self.field;
        let surface = field.surface();
        serde_json::json!({
            "value": field.resolve_value(),
            "open": field.resolve_open(),
            "phase": format!("{:?}", field.phase()),
            "activeMonth": field.state().active_month,
            "candidate": field.state().candidate,
            "status": surface.status(),
            "valueText": surface.text(Slot::ValueText),
            "monthLabel": surface.text(Slot::MonthLabel),
            "clearVisible": !surface.is_hidden(Slot::Clear),
            "confirmVisible": !surface.is_hidden(Slot::Confirm),
        })
    }
}

fn visibility(field: &DatePickerField<MemorySurface>, slot: Slot) -> &'static str {
    if field.surface().is_hidden(slot) {
        "hidden"
    } else {
        "shown"
    }
}

/// Callbacks that log each notification and queue it for printing.
fn recording_callbacks(events: &Rc<RefCell<Vec<String>>>) -> Callbacks {
    let push = |events: &Rc<RefCell<Vec<String>>>| {
        let events = Rc::clone(events);
        move |line: String| {
            log::info!("{}", line);
            events.borrow_mut().push(line);
        }
    };

    let on_change = push(events);
    let on_open_change = push(events);
    let on_clear = push(events);
    let on_navigate = push(events);
    let on_invalid = push(events);
    let on_focus = push(events);
    let on_blur = push(events);

    Callbacks::new()
        .on_change(move |value, ctx| {
            let value = value.map(|v| v.to_string()).unwrap_or_else(|| "null".into());
            on_change(format!("onChange {} ({})", value, ctx.source));
        })
        .on_open_change(move |open, ctx| on_open_change(format!("onOpenChange {} ({})", open, ctx.source)))
        .on_clear(move || on_clear("onClear".into()))
        .on_navigate(move |event| on_navigate(format!("onNavigate {}", event.month_iso)))
        .on_invalid_selection(move |iso, reason| {
            on_invalid(format!("onInvalidSelection {} ({})", iso, reason))
        })
        .on_focus(move || on_focus("onFocus".into()))
        .on_blur(move || on_blur("onBlur".into()))
}
