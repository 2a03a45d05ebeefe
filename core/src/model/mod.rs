pub mod metric;
pub mod month;
pub mod raw;
pub mod view;
