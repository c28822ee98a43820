//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Open link targets with the system handler without blocking the UI.
//! - Report failures back via the action channel.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//!
//! Invariants:
//! - Every spawned task is tracked by the `TaskTracker` so shutdown can wait for it.

use std::io;
use std::sync::Arc;

use tokio::sync::mpsc::Sender;
pub use tokio_util::task::TaskTracker;

use crate::action::Action;

/// Opens a URL outside the TUI.
pub trait LinkOpener: Send + Sync + 'static {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform handler (`open`, `xdg-open`, `start`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

pub type SharedOpener = Arc<dyn LinkOpener>;

/// Run the side effect for `action`, if it has one.
pub async fn handle_side_effects(
    action: Action,
    tx: Sender<Action>,
    opener: SharedOpener,
    task_tracker: TaskTracker,
) {
    if let Action::OpenLink { title, url } = action {
        task_tracker.spawn(async move {
            let target = url.clone();
            let result = tokio::task::spawn_blocking(move || opener.open(&target)).await;
            let error = match result {
                Ok(Ok(())) => {
                    tracing::info!(%url, "Opened link");
                    return;
                }
                Ok(Err(e)) => e.to_string(),
                Err(e) => e.to_string(),
            };
            tracing::error!(%url, %error, "Failed to open link");
            let _ = tx.send(Action::LinkOpenFailed { title, error }).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::sync::mpsc::channel;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> io::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn opens_url_on_blocking_task() {
        let opener = Arc::new(RecordingOpener::default());
        let (tx, mut rx) = channel(4);
        let tracker = TaskTracker::new();

        handle_side_effects(
            Action::OpenLink {
                title: "GitHub".to_string(),
                url: "https://github.com/eersnington".to_string(),
            },
            tx,
            opener.clone(),
            tracker.clone(),
        )
        .await;
        tracker.close();
        tracker.wait().await;

        assert_eq!(
            *opener.opened.lock().unwrap(),
            ["https://github.com/eersnington"]
        );
        assert!(rx.recv().await.is_none());
    }

    struct FailingOpener;

    impl LinkOpener for FailingOpener {
        fn open(&self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no handler"))
        }
    }

    #[tokio::test]
    async fn failure_comes_back_as_action() {
        let (tx, mut rx) = channel(4);
        let tracker = TaskTracker::new();

        handle_side_effects(
            Action::OpenLink {
                title: "Contact Me".to_string(),
                url: "mailto:someone@example.com".to_string(),
            },
            tx,
            Arc::new(FailingOpener),
            tracker.clone(),
        )
        .await;

        assert_eq!(
            rx.recv().await,
            Some(Action::LinkOpenFailed {
                title: "Contact Me".to_string(),
                error: "no handler".to_string(),
            })
        );
        tracker.close();
        tracker.wait().await;
    }

    #[tokio::test]
    async fn other_actions_spawn_nothing() {
        let (tx, _rx) = channel(4);
        let tracker = TaskTracker::new();
        handle_side_effects(Action::Tick, tx, Arc::new(SystemOpener), tracker.clone()).await;
        assert!(tracker.is_empty());
    }
}
