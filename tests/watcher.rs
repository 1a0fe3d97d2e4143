//! Tests for the directory watcher state machine and change detection.

use fanlog::{DirectoryEvent, DirectoryWatcher};
use std::fs;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

const POLL: Duration = Duration::from_millis(25);
const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn detects_a_new_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (watcher, events) = DirectoryWatcher::new(tmp.path());
    let mut watcher = watcher.poll_interval(POLL);
    watcher.start();
    assert!(watcher.is_watching());

    fs::write(tmp.path().join("new.log"), "line").unwrap();

    assert_eq!(events.recv_timeout(EVENT_TIMEOUT), Ok(DirectoryEvent::Changed));
    watcher.stop();
}

#[test]
fn detects_an_extended_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("grow.log"), "one").unwrap();

    let (watcher, events) = DirectoryWatcher::new(tmp.path());
    let mut watcher = watcher.poll_interval(POLL);
    watcher.start();

    fs::write(tmp.path().join("grow.log"), "one\ntwo-longer").unwrap();

    assert_eq!(events.recv_timeout(EVENT_TIMEOUT), Ok(DirectoryEvent::Changed));
    watcher.stop();
}

#[test]
fn stop_is_idempotent() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (watcher, _events) = DirectoryWatcher::new(tmp.path());
    let mut watcher = watcher.poll_interval(POLL);

    // Stopping before starting is a no-op.
    watcher.stop();
    assert!(!watcher.is_watching());

    watcher.start();
    assert!(watcher.is_watching());

    watcher.stop();
    watcher.stop();
    assert!(!watcher.is_watching());
}

#[test]
fn start_when_already_watching_is_a_no_op() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (watcher, events) = DirectoryWatcher::new(tmp.path());
    let mut watcher = watcher.poll_interval(POLL);

    watcher.start();
    watcher.start();

    fs::write(tmp.path().join("once.log"), "x").unwrap();
    assert_eq!(events.recv_timeout(EVENT_TIMEOUT), Ok(DirectoryEvent::Changed));

    watcher.stop();
}

#[test]
fn restart_after_stop_watches_again() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (watcher, events) = DirectoryWatcher::new(tmp.path());
    let mut watcher = watcher.poll_interval(POLL);

    watcher.start();
    watcher.stop();
    watcher.start();

    fs::write(tmp.path().join("again.log"), "x").unwrap();
    assert_eq!(events.recv_timeout(EVENT_TIMEOUT), Ok(DirectoryEvent::Changed));

    watcher.stop();
}

#[test]
fn drop_stops_the_watcher() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (watcher, events) = DirectoryWatcher::new(tmp.path());
    let mut watcher = watcher.poll_interval(POLL);
    watcher.start();

    drop(watcher);

    // Both sender clones are gone once the worker has joined.
    assert_eq!(
        events.recv_timeout(Duration::from_secs(1)),
        Err(RecvTimeoutError::Disconnected)
    );
}

#[test]
fn quiet_directory_emits_no_events() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (watcher, events) = DirectoryWatcher::new(tmp.path());
    let mut watcher = watcher.poll_interval(POLL);
    watcher.start();

    assert_eq!(
        events.recv_timeout(Duration::from_millis(200)),
        Err(RecvTimeoutError::Timeout)
    );

    watcher.stop();
}
