//! Command parsing for the command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → quit
//! - `:h` or `:help` → help overlay
//! - `:mask [n]` → mask mode, optionally setting the placeholder width
//! - `:remove` → remove mode
//! - `:width n` → set the placeholder width
//! - `:paste`, `:copy`, `:auto`, `:reset`, `:sample` → clipboard and
//!   buffer actions
//! - `@path` → load a file (txt, md, pdf, epub)
//! - `@@` → load the clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Mask(Option<usize>),
    Remove,
    Width(usize),
    Paste,
    Copy,
    Auto,
    Reset,
    Sample,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        let head = parts.next().unwrap_or("");
        let arg = parts.next();
        match (head, arg) {
            ("q", None) | ("quit", None) => Command::Quit,
            ("h", None) | ("help", None) => Command::Help,
            ("remove", None) => Command::Remove,
            ("mask", None) => Command::Mask(None),
            ("mask", Some(n)) => match n.parse() {
                Ok(width) => Command::Mask(Some(width)),
                Err(_) => Command::Unknown(input.to_string()),
            },
            ("width", Some(n)) => match n.parse() {
                Ok(width) => Command::Width(width),
                Err(_) => Command::Unknown(input.to_string()),
            },
            ("paste", None) => Command::Paste,
            ("copy", None) => Command::Copy,
            ("auto", None) => Command::Auto,
            ("reset", None) => Command::Reset,
            ("sample", None) => Command::Sample,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Mask(width) => AppEvent::UseMask(width),
        Command::Remove => AppEvent::UseRemove,
        Command::Width(width) => AppEvent::SetWidth(width),
        Command::Paste => AppEvent::PasteClipboard,
        Command::Copy => AppEvent::CopyOutput,
        Command::Auto => AppEvent::AutoClipboard,
        Command::Reset => AppEvent::Reset,
        Command::Sample => AppEvent::InsertSample,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::PasteClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
