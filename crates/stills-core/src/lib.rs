// Viewer core modules
pub mod config;
pub mod controller;
pub mod fetch;
pub mod frame;
pub mod schedule;


// Re-exports
pub use config::{DEFAULT_FEED_URL, ReloadBounds, ViewerConfig};
pub use controller::{ControlEvent, Controller, SaveError, Update};
pub use fetch::{FetchError, FrameSource, HttpFrameSource};
pub use frame::StillFrame;
