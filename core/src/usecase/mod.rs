pub mod dashboard_state;
pub mod window;
