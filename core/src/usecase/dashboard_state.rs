use std::sync::Arc;

use crate::model::month::Month;
use crate::model::view::AggregateView;
use crate::service::dashboard_service::{DataOrigin, LoadOutcome};
use crate::usecase::window::{Direction, VisibleWindow};

/// Everything the presentation layer observes. Transitions return a new
/// state; the view itself is only ever replaced, never patched.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub window: VisibleWindow,
    pub loading: bool,
    pub view: Option<Arc<AggregateView>>,
    pub origin: Option<DataOrigin>,
}

impl DashboardState {
    pub fn initialize(current: Month) -> Self {
        Self {
            window: VisibleWindow::initialize(current),
            loading: true,
            view: None,
            origin: None,
        }
    }

    pub fn shift(&self, direction: Direction) -> Self {
        Self {
            window: self.window.shift(direction),
            ..self.clone()
        }
    }

    /// Marks a reload in progress; the previous view stays visible.
    pub fn set_loading(&self) -> Self {
        Self {
            loading: true,
            ..self.clone()
        }
    }

    pub fn set_loaded(&self, outcome: LoadOutcome) -> Self {
        Self {
            window: self.window,
            loading: false,
            view: Some(outcome.view),
            origin: Some(outcome.origin),
        }
    }

    /// The view, once loading has finished.
    pub fn ready_view(&self) -> Option<&AggregateView> {
        if self.loading {
            return None;
        }
        self.view.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::dashboard_service::mock_outcome;

    #[test]
    fn test_initial_state_is_loading() {
        let state = DashboardState::initialize(Month::March);
        assert!(state.loading);
        assert!(state.ready_view().is_none());
        assert_eq!(state.window.first(), Month::March);
    }

    #[test]
    fn test_set_loaded_replaces_view_wholesale() {
        let state = DashboardState::initialize(Month::March);
        let first = mock_outcome(2024);
        let loaded = state.set_loaded(first.clone());
        assert!(!loaded.loading);
        assert_eq!(loaded.origin, Some(DataOrigin::Mock));
        assert!(Arc::ptr_eq(loaded.view.as_ref().unwrap(), &first.view));

        let second = mock_outcome(2025);
        let reloaded = loaded.set_loading().set_loaded(second.clone());
        assert!(Arc::ptr_eq(reloaded.view.as_ref().unwrap(), &second.view));
        assert_eq!(reloaded.ready_view().map(|v| v.year), Some(2025));
        // The earlier state still holds the old view.
        assert_eq!(loaded.ready_view().map(|v| v.year), Some(2024));
    }

    #[test]
    fn test_set_loading_keeps_previous_view() {
        let loaded = DashboardState::initialize(Month::March).set_loaded(mock_outcome(2024));
        let reloading = loaded.set_loading();
        assert!(reloading.loading);
        assert!(reloading.view.is_some());
        assert!(reloading.ready_view().is_none());
    }

    #[test]
    fn test_shift_only_moves_window() {
        let loaded = DashboardState::initialize(Month::January).set_loaded(mock_outcome(2024));
        let shifted = loaded.shift(Direction::Left);
        assert_eq!(shifted.window.first(), Month::December);
        assert_eq!(loaded.window.first(), Month::January);
        assert!(Arc::ptr_eq(shifted.view.as_ref().unwrap(), loaded.view.as_ref().unwrap()));
        assert!(!shifted.loading);
    }
}
