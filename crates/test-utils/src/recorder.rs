use std::sync::{Arc, Mutex};

use dirnotify::Event;

/// Shared sink for events delivered to a notifier callback.
///
/// Clone it, move one clone into the callback via [`EventRecorder::callback`],
/// and inspect the other after `listen` returns.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends every event it receives.
    pub fn callback(&self) -> impl FnMut(Event) + Send + 'static {
        let events = Arc::clone(&self.events);
        move |event| events.lock().expect("recorder poisoned").push(event)
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("recorder poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("recorder poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// File names in delivery order.
    pub fn files(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.file).collect()
    }
}
