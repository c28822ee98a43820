//! Termfolio - a Neovim-styled portfolio page in the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Key handling or rendering (see `termfolio::app`).
//! - Configuration parsing (see `termfolio-config`).
//!
//! Invariants:
//! - `--print-config` never touches the terminal or the log directory.
//! - Logs go to a file, never stdout, while the TUI owns the terminal.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::event::EventStream;
use ratatui::{Terminal, backend::CrosstermBackend};
use termfolio::action::Action;
use termfolio::app::App;
use termfolio::cli::Cli;
use termfolio::runtime::{
    config::{config_json, load_config},
    listener::InputListener,
    side_effects::{SharedOpener, SystemOpener, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};
use termfolio_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        let config = load_config(&cli)?;
        println!("{}", config_json(&config)?);
        return Ok(());
    }

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "termfolio.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // _guard must live for the whole of main() so buffered logs are flushed.

    let config = load_config(&cli)?;
    let mouse = !cli.no_mouse;
    let mut app = App::new(config).with_mouse(mouse);

    let task_tracker = TaskTracker::new();
    let terminal_guard = TerminalGuard::enter(mouse, &app.site.page_title)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let mut listener = InputListener::new(task_tracker.clone());
    listener.attach(EventStream::new(), tx.clone());

    let opener: SharedOpener = Arc::new(SystemOpener);
    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    tracing::info!(mouse, theme = %app.theme().name, "Termfolio started");

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else { continue };
                if action == Action::Quit {
                    break;
                }
                app.update(action.clone());
                handle_side_effects(action, tx.clone(), opener.clone(), task_tracker.clone()).await;
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    listener.detach();
    app.unmount();

    task_tracker.close();
    task_tracker.wait().await;

    drop(terminal_guard);
    terminal.show_cursor()?;
    tracing::info!("Termfolio exited");

    Ok(())
}
