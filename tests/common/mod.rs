#![allow(dead_code)]

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use dirnotify::{ListenOutcome, Notifier};

pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Run one blocking `listen` on a helper thread and give up after `timeout`.
///
/// Returns the notifier so the test can keep using it. Panics if the call did
/// not return in time.
pub fn listen_within(mut notifier: Notifier, timeout: Duration) -> (Notifier, ListenOutcome) {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = notifier.listen();
        let _ = tx.send((notifier, outcome));
    });
    rx.recv_timeout(timeout)
        .expect("listen did not return before the timeout")
}
