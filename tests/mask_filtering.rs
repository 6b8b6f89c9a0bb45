// tests/mask_filtering.rs

mod common;

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;

use tempfile::tempdir;

use common::{listen_within, TIMEOUT};
use dirnotify::{EventKind, ListenOutcome, Notifier, NotifierOptions};
use dirnotify_test_utils::{init_tracing, EventRecorder};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn kinds_outside_the_mask_are_never_dispatched() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let recorder = EventRecorder::new();
    let options = NotifierOptions {
        mask: EventKind::MODIFY,
        ..NotifierOptions::default()
    };
    let notifier = Notifier::with_options(dir.path(), recorder.callback(), options)?;
    assert_eq!(notifier.mask(), EventKind::MODIFY);

    let file = dir.path().join("data.log");
    fs::File::create(&file)?;
    let mut handle = OpenOptions::new().append(true).open(&file)?;
    handle.write_all(b"hello")?;
    drop(handle);

    let (_notifier, outcome) = listen_within(notifier, TIMEOUT);

    assert_eq!(outcome.dispatched(), 1);
    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].file, "data.log");
    assert_eq!(events[0].kind, EventKind::MODIFY);
    Ok(())
}

#[test]
fn create_only_mask_ignores_deletes() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let existing = dir.path().join("old");
    fs::File::create(&existing)?;

    let recorder = EventRecorder::new();
    let options = NotifierOptions {
        mask: EventKind::CREATE,
        blocking: false,
    };
    let mut notifier = Notifier::with_options(dir.path(), recorder.callback(), options)?;

    fs::remove_file(&existing)?;
    let outcome = notifier.listen();
    assert!(matches!(outcome, ListenOutcome::WouldBlock), "got {outcome:?}");

    fs::File::create(dir.path().join("new"))?;
    let outcome = notifier.listen();
    assert_eq!(outcome.dispatched(), 1);
    assert_eq!(recorder.files(), vec!["new"]);
    Ok(())
}
