use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

use planfact_core::{DashboardState, Direction, Month};
use ratatui::widgets::TableState;
use tracing::{debug, warn};

use crate::loader::{spawn_load, Loader};

pub struct App {
    pub state: DashboardState,
    pub table_state: TableState,
    loader: Arc<Loader>,
    pending: Option<Receiver<planfact_core::LoadOutcome>>,
    fallback_year: i32,
}

impl App {
    pub fn new(loader: Arc<Loader>, current_month: Month, fallback_year: i32) -> App {
        let mut app = App {
            state: DashboardState::initialize(current_month),
            table_state: TableState::default(),
            loader,
            pending: None,
            fallback_year,
        };
        app.start_load();
        app
    }

    fn start_load(&mut self) {
        self.state = self.state.set_loading();
        self.pending = Some(spawn_load(Arc::clone(&self.loader), self.fallback_year));
    }

    /// Picks up a finished load, if any. Called once per frame.
    pub fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                debug!(origin = ?outcome.origin, "load finished");
                self.state = self.state.set_loaded(outcome);
                self.pending = None;
                self.clamp_selection();
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("load thread exited without a result");
                self.pending = None;
            }
        }
    }

    /// Ignored while a load is already in flight.
    pub fn reload(&mut self) {
        if self.pending.is_none() {
            self.start_load();
        }
    }

    pub fn shift(&mut self, direction: Direction) {
        self.state = self.state.shift(direction);
    }

    fn manager_count(&self) -> usize {
        self.state.view.as_ref().map(|v| v.managers.len()).unwrap_or(0)
    }

    pub fn next(&mut self) {
        let len = self.manager_count();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.manager_count();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Selected manager index.
    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    fn clamp_selection(&mut self) {
        let len = self.manager_count();
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            _ => {}
        }
    }
}
