pub mod file;
pub mod http;
pub mod traits;

// Re-export
pub use file::FilePayloadSource;
pub use http::{HttpPayloadSource, DEFAULT_ENDPOINT};
pub use traits::PayloadSource;
