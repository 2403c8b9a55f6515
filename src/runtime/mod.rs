//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management for `linkchord listen`

pub mod app;

pub use app::run;
