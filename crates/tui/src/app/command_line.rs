//! The `:` command line.
//!
//! Responsibilities:
//! - Hold the prompt's text field and open/closed state (`CommandLine`)
//! - Parse command text (`Command`)
//! - Execute commands against `App`
//!
//! Does NOT handle:
//! - Rendering the prompt (see render.rs)
//!
//! Invariants:
//! - While the prompt is open every key goes to it; the dispatcher only sees
//!   text-input events, which it ignores.

use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent};
use termfolio_config::resolve_theme;
use thiserror::Error;

use crate::action::Action;
use crate::app::input::components::SingleLineInput;
use crate::app::structs::App;
use crate::ui::Toast;

/// A parsed command-line command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    /// `theme` alone opens the switcher; with an argument it applies a theme.
    Theme(Option<String>),
    Open(String),
    NextTheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Not an editor command: {0}")]
    Unknown(String),
    #[error("Usage: open <link id>")]
    MissingLinkId,
    #[error("No link with id '{0}'")]
    UnknownLink(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(':').unwrap_or(s).trim_start();
        let (name, arg) = match s.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim()).filter(|r| !r.is_empty())),
            None => (s, None),
        };

        match name {
            "q" | "quit" | "q!" | "qa" => Ok(Self::Quit),
            "h" | "help" => Ok(Self::Help),
            "theme" | "colorscheme" | "colo" => Ok(Self::Theme(arg.map(str::to_string))),
            "open" | "o" => arg
                .map(|id| Self::Open(id.to_string()))
                .ok_or(CommandError::MissingLinkId),
            "next-theme" | "bn" => Ok(Self::NextTheme),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Open/closed state and text of the prompt.
#[derive(Debug, Clone, Default)]
pub struct CommandLine {
    input: SingleLineInput,
    active: bool,
}

impl CommandLine {
    pub fn open(&mut self) {
        self.input.clear();
        self.active = true;
    }

    pub fn close(&mut self) {
        self.input.clear();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn cursor_position(&self) -> usize {
        self.input.cursor_position()
    }
}

impl App {
    pub fn open_command_line(&mut self) {
        self.command_line.open();
        tracing::debug!("Command line opened");
    }

    /// Handle a key while the prompt is open.
    pub(crate) fn handle_command_line_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.command_line.close();
                None
            }
            KeyCode::Enter => {
                let text = self.command_line.value().to_string();
                self.command_line.close();
                self.execute_command(&text)
            }
            // Backspace on an empty prompt leaves it, as in vim.
            KeyCode::Backspace if self.command_line.input.is_empty() => {
                self.command_line.close();
                None
            }
            _ => {
                self.command_line.input.handle_key(key);
                None
            }
        }
    }

    /// Run command `text`. Errors become toasts.
    pub fn execute_command(&mut self, text: &str) -> Option<Action> {
        if text.trim().trim_start_matches(':').trim().is_empty() {
            return None;
        }

        let command = match text.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(command = %text, error = %e, "Command rejected");
                self.toasts.push(Toast::error(e.to_string()));
                return None;
            }
        };
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Quit => Some(Action::Quit),
            Command::Help => {
                if !self.modals.help_open() {
                    self.toggle_help();
                }
                None
            }
            Command::Theme(None) => {
                if !self.modals.theme_open() {
                    self.toggle_theme();
                }
                None
            }
            Command::Theme(Some(selector)) => {
                match resolve_theme(&selector, self.themes.themes()) {
                    Ok(index) => {
                        self.set_theme(index);
                        self.toasts
                            .push(Toast::info(format!("Theme: {}", self.theme().name)));
                    }
                    Err(e) => self.toasts.push(Toast::error(e.to_string())),
                }
                None
            }
            Command::Open(id) => match self.site.link(&id).cloned() {
                Some(link) => Some(self.activate_link(&link)),
                None => {
                    self.toasts
                        .push(Toast::error(CommandError::UnknownLink(id).to_string()));
                    None
                }
            },
            Command::NextTheme => {
                self.themes.cycle();
                self.theme_focus = self.themes.index();
                None
            }
        }
    }
}
