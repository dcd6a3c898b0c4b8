pub mod app;
pub mod domain;
pub mod errors;

pub use app::StreamingApp;
pub use errors::CoreError;
