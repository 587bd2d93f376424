//! Browser session management
//!
//! Launching a headless Chrome/Chromium instance via CDP, navigating it to a
//! URL, and guaranteeing teardown on every exit path.

pub mod config;
pub mod session;

pub use config::LaunchOptions;
pub use session::BrowserSession;
