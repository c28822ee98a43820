//! Tests for the input listener lifecycle and event forwarding.
//!
//! Responsibilities:
//! - Verify attach happens at most once and detach is idempotent.
//! - Verify which terminal events become actions.
//! - Verify mouse events are dropped under backpressure while keys are kept.

use std::io;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use futures_util::stream;
use termfolio::action::Action;
use termfolio::runtime::listener::{InputListener, event_to_action};
use tokio::sync::mpsc;
use tokio_util::task::TaskTracker;

fn press(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn release(c: char) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char(c),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}

fn moved(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

async fn drain(rx: &mut mpsc::Receiver<Action>) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Some(action) = rx.recv().await {
        actions.push(action);
    }
    actions
}

#[test]
fn test_event_to_action_filters_events() {
    assert!(matches!(event_to_action(press('g')), Some(Action::Input(_))));
    assert_eq!(event_to_action(release('g')), None);
    assert_eq!(event_to_action(Event::Resize(80, 24)), Some(Action::Resize(80, 24)));
    assert!(matches!(event_to_action(moved(1, 2)), Some(Action::Mouse(_))));
    assert_eq!(event_to_action(Event::FocusGained), None);
}

#[tokio::test]
async fn test_forwards_events_in_order() {
    let tracker = TaskTracker::new();
    let mut listener = InputListener::new(tracker.clone());
    let (tx, mut rx) = mpsc::channel(16);
    let events: Vec<io::Result<Event>> = vec![
        Ok(press('g')),
        Ok(release('g')),
        Ok(Event::FocusLost),
        Ok(press('h')),
        Ok(Event::Resize(120, 40)),
    ];

    assert!(listener.attach(stream::iter(events), tx));

    let actions = drain(&mut rx).await;
    let expected_keys: Vec<_> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Input(key) => Some(key.code),
            _ => None,
        })
        .collect();
    assert_eq!(expected_keys, [KeyCode::Char('g'), KeyCode::Char('h')]);
    assert_eq!(actions.last(), Some(&Action::Resize(120, 40)));
    assert_eq!(actions.len(), 3);

    tracker.close();
    tracker.wait().await;
}

#[tokio::test]
async fn test_attach_is_idempotent() {
    let tracker = TaskTracker::new();
    let mut listener = InputListener::new(tracker.clone());
    let (tx, _rx) = mpsc::channel(4);

    assert!(listener.attach(stream::pending::<io::Result<Event>>(), tx.clone()));
    assert!(!listener.attach(stream::pending::<io::Result<Event>>(), tx));
    assert!(listener.is_attached());
    assert_eq!(tracker.len(), 1);

    listener.detach();
    tracker.close();
    tracker.wait().await;
}

#[tokio::test]
async fn test_detach_is_idempotent_and_stops_task() {
    let tracker = TaskTracker::new();
    let mut listener = InputListener::new(tracker.clone());
    let (tx, mut rx) = mpsc::channel(4);

    assert!(!listener.detach());
    listener.attach(stream::pending::<io::Result<Event>>(), tx);

    assert!(listener.detach());
    assert!(!listener.detach());
    assert!(!listener.is_attached());

    tracker.close();
    tracker.wait().await;
    assert!(tracker.is_empty());
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn test_can_reattach_after_detach() {
    let tracker = TaskTracker::new();
    let mut listener = InputListener::new(tracker.clone());
    let (tx, mut rx) = mpsc::channel(4);

    listener.attach(stream::pending::<io::Result<Event>>(), tx.clone());
    listener.detach();
    assert!(listener.attach(stream::iter(vec![io::Result::Ok(press('q'))]), tx));

    let first = rx.recv().await;
    assert!(matches!(first, Some(Action::Input(key)) if key.code == KeyCode::Char('q')));

    listener.detach();
    tracker.close();
    tracker.wait().await;
}

#[tokio::test]
async fn test_mouse_events_dropped_when_channel_full() {
    let tracker = TaskTracker::new();
    let mut listener = InputListener::new(tracker.clone());
    let (tx, mut rx) = mpsc::channel(1);
    let events: Vec<io::Result<Event>> = vec![Ok(press('j')), Ok(moved(1, 1)), Ok(moved(2, 2))];

    listener.attach(stream::iter(events), tx);
    tracker.close();
    tracker.wait().await;

    let actions = drain(&mut rx).await;
    assert_eq!(actions.len(), 1);
    assert!(matches!(actions[0], Action::Input(_)));
}

#[tokio::test]
async fn test_stream_error_stops_listener() {
    let tracker = TaskTracker::new();
    let mut listener = InputListener::new(tracker.clone());
    let (tx, mut rx) = mpsc::channel(4);
    let events: Vec<io::Result<Event>> = vec![
        Ok(press('a')),
        Err(io::Error::other("terminal went away")),
        Ok(press('b')),
    ];

    listener.attach(stream::iter(events), tx);

    let actions = drain(&mut rx).await;
    assert_eq!(actions.len(), 1);

    tracker.close();
    tracker.wait().await;
}
