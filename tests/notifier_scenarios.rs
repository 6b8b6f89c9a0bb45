// tests/notifier_scenarios.rs

mod common;

use std::error::Error;
use std::fs;
use std::thread;
use std::time::Duration;

use tempfile::tempdir;

use common::{listen_within, TIMEOUT};
use dirnotify::{Event, EventKind, ListenOutcome, Notifier, NotifierOptions};
use dirnotify_test_utils::{init_tracing, EventRecorder};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn blocking_listen_reports_file_created_from_another_thread() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let recorder = EventRecorder::new();
    let notifier = Notifier::new(dir.path(), recorder.callback())?;

    let target = dir.path().join("foo.txt");
    let writer = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        fs::File::create(target).map(drop)
    });

    let (_notifier, outcome) = listen_within(notifier, TIMEOUT);
    writer.join().expect("writer thread panicked")?;

    assert_eq!(outcome.dispatched(), 1);
    assert_eq!(
        recorder.events(),
        vec![Event {
            path: dir.path().to_path_buf(),
            file: "foo.txt".to_string(),
            kind: EventKind::CREATE,
        }]
    );
    Ok(())
}

#[test]
fn non_blocking_listen_without_activity_returns_immediately() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let recorder = EventRecorder::new();
    let options = NotifierOptions {
        blocking: false,
        ..NotifierOptions::default()
    };
    let mut notifier = Notifier::with_options(dir.path(), recorder.callback(), options)?;

    let outcome = notifier.listen();

    assert!(matches!(outcome, ListenOutcome::WouldBlock), "got {outcome:?}");
    assert!(recorder.is_empty());
    Ok(())
}

#[test]
fn trailing_separators_are_stripped_from_reported_path() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let recorder = EventRecorder::new();
    let with_slashes = format!("{}///", dir.path().display());
    let notifier = Notifier::new(&with_slashes, recorder.callback())?;
    assert_eq!(notifier.path().as_os_str(), dir.path().as_os_str());

    fs::File::create(dir.path().join("a"))?;
    let (_notifier, _) = listen_within(notifier, TIMEOUT);

    let events = recorder.events();
    assert!(!events.is_empty());
    for event in events {
        assert_eq!(event.path.as_os_str(), dir.path().as_os_str());
    }
    Ok(())
}

#[test]
fn one_listen_dispatches_queued_events_in_order() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let recorder = EventRecorder::new();
    let notifier = Notifier::new(dir.path(), recorder.callback())?;

    fs::File::create(dir.path().join("first"))?;
    fs::File::create(dir.path().join("second"))?;

    let (_notifier, outcome) = listen_within(notifier, TIMEOUT);

    assert_eq!(outcome.dispatched(), 2);
    assert_eq!(recorder.files(), vec!["first", "second"]);
    assert!(recorder.events().iter().all(|e| e.kind == EventKind::CREATE));
    Ok(())
}

#[test]
fn delete_is_reported_with_default_mask() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let victim = dir.path().join("victim");
    fs::File::create(&victim)?;

    let recorder = EventRecorder::new();
    let notifier = Notifier::new(dir.path(), recorder.callback())?;
    fs::remove_file(&victim)?;

    let (_notifier, _) = listen_within(notifier, TIMEOUT);

    assert_eq!(recorder.files(), vec!["victim"]);
    assert_eq!(recorder.events()[0].kind, EventKind::DELETE);
    Ok(())
}

#[test]
fn combined_kernel_bits_are_passed_through() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let recorder = EventRecorder::new();
    let notifier = Notifier::new(dir.path(), recorder.callback())?;

    // A directory entry carries IN_ISDIR alongside IN_CREATE.
    fs::create_dir(dir.path().join("sub"))?;
    let (_notifier, _) = listen_within(notifier, TIMEOUT);

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    let kind = events[0].kind;
    assert!(kind.contains(EventKind::CREATE));
    assert_eq!(kind.unknown_bits(), 0x4000_0000);
    assert_ne!(kind, EventKind::CREATE);
    Ok(())
}

#[test]
fn listen_can_be_called_repeatedly() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let recorder = EventRecorder::new();
    let notifier = Notifier::new(dir.path(), recorder.callback())?;

    fs::File::create(dir.path().join("one"))?;
    let (notifier, first) = listen_within(notifier, TIMEOUT);
    fs::File::create(dir.path().join("two"))?;
    let (_notifier, second) = listen_within(notifier, TIMEOUT);

    assert_eq!(first.dispatched(), 1);
    assert_eq!(second.dispatched(), 1);
    assert_eq!(recorder.files(), vec!["one", "two"]);
    Ok(())
}

#[test]
#[should_panic(expected = "callback failed")]
fn callback_panic_escapes_listen() {
    let dir = tempdir().unwrap();
    let mut notifier = Notifier::new(dir.path(), |_event| panic!("callback failed")).unwrap();
    fs::File::create(dir.path().join("x")).unwrap();
    notifier.listen();
}
