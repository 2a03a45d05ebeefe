pub mod dashboard_service;
pub mod format;
pub mod mock;
pub mod transform;
