use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use planfact_core::{mock_outcome, DashboardService, LoadOutcome, PayloadSource};

pub type DynSource = Box<dyn PayloadSource + Send + Sync>;

/// Where dashboard data comes from for this run.
pub enum Loader {
    Service(DashboardService<DynSource>),
    MockOnly,
}

impl Loader {
    pub fn load(&self, fallback_year: i32) -> LoadOutcome {
        match self {
            Loader::Service(service) => service.load(fallback_year),
            Loader::MockOnly => mock_outcome(fallback_year),
        }
    }
}

/// Runs one load on a background thread. If the receiver is dropped first,
/// the result is discarded.
pub fn spawn_load(loader: Arc<Loader>, fallback_year: i32) -> Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = loader.load(fallback_year);
        let _ = tx.send(outcome);
    });
    rx
}
