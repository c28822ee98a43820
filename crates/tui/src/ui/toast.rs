//! Toast notification widgets for transient feedback messages.
//!
//! Toasts stack in the bottom-right corner above the status line and expire
//! after a level-dependent TTL.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::{Duration, Instant};
use termfolio_config::Palette;

use crate::ui::theme::ThemeExt;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info => Duration::from_secs(3),
            Self::Error => Duration::from_secs(8),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts to display at once (prevents screen overflow).
const MAX_TOASTS: usize = 3;
const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 48;

/// Renders the most recent active toasts in the bottom-right corner of `area`.
pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast], palette: &Palette) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let active = &active[active.len().saturating_sub(MAX_TOASTS)..];

    let total_height = active.len() as u16 * TOAST_HEIGHT;
    if area.height < total_height + 1 || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let toast_area = Rect {
        x: area.x + area.width - TOAST_WIDTH - 1,
        y: area.y + area.height - total_height,
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TOAST_HEIGHT); active.len()])
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, palette);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, palette: &Palette) {
    let accent = match toast.level {
        ToastLevel::Info => palette.accent(),
        ToastLevel::Error => palette.error(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent)
        .style(palette.base());
    let line = Line::from(vec![
        Span::styled(format!("{} ", toast.level.label()), accent),
        Span::styled(toast.message.as_str(), palette.text()),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
