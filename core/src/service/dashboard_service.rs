use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::LoadError;
use crate::model::raw::{RawApiResponse, RawData};
use crate::model::view::AggregateView;
use crate::repository::PayloadSource;
use crate::service::mock::mock_view;
use crate::service::transform::{transform, transform_checked};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Live,
    Mock,
}

/// Result of one load attempt. Always carries a usable view.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub view: Arc<AggregateView>,
    pub origin: DataOrigin,
}

pub struct DashboardService<S: PayloadSource> {
    source: S,
    strict_months: bool,
}

impl<S: PayloadSource> DashboardService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            strict_months: false,
        }
    }

    /// Reject payloads whose months arrays are not exactly 12 long.
    pub fn with_strict_months(mut self, strict: bool) -> Self {
        self.strict_months = strict;
        self
    }

    /// Fetches and transforms live data, falling back to mock data on any
    /// failure.
    pub fn load(&self, fallback_year: i32) -> LoadOutcome {
        match self.load_raw(fallback_year) {
            Ok(view) => {
                info!(
                    source = %self.source.describe(),
                    managers = view.managers.len(),
                    year = view.year,
                    "loaded live dashboard data"
                );
                LoadOutcome {
                    view: Arc::new(view),
                    origin: DataOrigin::Live,
                }
            }
            Err(err) => {
                warn!(
                    source = %self.source.describe(),
                    error = %err,
                    "load failed, using mock data"
                );
                LoadOutcome {
                    view: Arc::new(mock_view(fallback_year)),
                    origin: DataOrigin::Mock,
                }
            }
        }
    }

    /// Same as [`load`](Self::load) without the fallback.
    pub fn load_raw(&self, fallback_year: i32) -> Result<AggregateView, LoadError> {
        let raw = self.source.fetch()?;
        let data = validate_shape(&raw)?;
        if self.strict_months {
            Ok(transform_checked(data, fallback_year)?)
        } else {
            Ok(transform(data, fallback_year))
        }
    }
}

/// Mock-only outcome, for running without any source.
pub fn mock_outcome(year: i32) -> LoadOutcome {
    LoadOutcome {
        view: Arc::new(mock_view(year)),
        origin: DataOrigin::Mock,
    }
}

fn validate_shape(raw: &RawApiResponse) -> Result<&RawData, LoadError> {
    if raw.success != Some(true) {
        return Err(LoadError::Shape("success flag is not set"));
    }
    let data = raw.data.as_ref().ok_or(LoadError::Shape("missing data"))?;
    if data.table.is_none() {
        return Err(LoadError::Shape("missing data.table"));
    }
    Ok(data)
}
