//! Records the level of every event emitted while installed.

use std::sync::{Arc, Mutex};
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, prelude::*, Layer, Registry};

#[derive(Clone, Default)]
pub struct CapturedLevels(Arc<Mutex<Vec<Level>>>);

impl CapturedLevels {
    /// Thread-local; keep the guard alive for the duration of the test.
    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(Registry::default().with(self.clone()))
    }

    pub fn count(&self, level: Level) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|l| **l == level)
            .count()
    }
}

impl<S: Subscriber> Layer<S> for CapturedLevels {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}
