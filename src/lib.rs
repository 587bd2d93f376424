//! # doc-fetch
//!
//! Extract readable plain text from web pages by simulating a browser
//! "select all", via Chrome DevTools Protocol (CDP).
//!
//! The pipeline is strictly sequential: launch a headless Chromium, navigate
//! to the URL and wait for the page to settle, run the selection serializer
//! inside the page, normalize whitespace, and tear the browser down. The
//! browser is released on every exit path, success or failure.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doc_fetch::{LaunchOptions, fetch_page_text};
//!
//! # fn main() -> doc_fetch::Result<()> {
//! let text = fetch_page_text("https://example.com", LaunchOptions::default())?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and launch configuration
//! - [`extract`]: Selection serialization and whitespace normalization
//! - [`error`]: Error types and result alias
//! - [`url`]: Scheme fill-in for CLI input

pub mod browser;
pub mod error;
pub mod extract;
pub mod url;

pub use browser::{BrowserSession, LaunchOptions};
pub use error::{FetchError, Result};

/// Fetch a URL and return the page's selected content as normalized text.
///
/// A page with nothing selectable yields `Ok` with an empty string. Any
/// launch, navigation, or extraction failure is returned as-is; no partial
/// output is produced.
pub fn fetch_page_text(url: &str, options: LaunchOptions) -> Result<String> {
    let session = BrowserSession::launch(options)?;

    let result = session
        .navigate(url)
        .and_then(|()| extract::selected_text(&session));

    if let Err(e) = session.close() {
        log::warn!("browser teardown reported an error: {}", e);
    }

    result
}
