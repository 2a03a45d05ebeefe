pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod settings;
pub mod time;
pub mod usecase;

pub use error::{LoadError, ParseMonthError, ShapeError};
pub use model::metric::{MonthMap, MonthlyMetric};
pub use model::month::Month;
pub use model::raw::{RawApiResponse, RawData, RawManager, RawMonthData};
pub use model::view::{AggregateView, ManagerRecord};
pub use repository::{FilePayloadSource, HttpPayloadSource, PayloadSource};
pub use service::dashboard_service::{mock_outcome, DashboardService, DataOrigin, LoadOutcome};
pub use service::format::{format_count, format_currency, render_cell, PLACEHOLDER};
pub use service::mock::{generate_mock, mock_view};
pub use service::transform::{transform, transform_checked};
pub use settings::{load_settings, Settings};
pub use time::{current_month, current_year};
pub use usecase::dashboard_state::DashboardState;
pub use usecase::window::{Direction, VisibleWindow, WINDOW_LEN};
