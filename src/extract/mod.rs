//! Selection-based text extraction
//!
//! The core of the tool: a JavaScript snippet evaluated in the page selects
//! the whole document, clones the selection's ranges, rebuilds them with
//! explicit linebreak/bullet markers, and reads the rendered text back.
//! The raw text is then whitespace-normalized host-side ([`text::normalize`]).
//!
//! The script never mutates the live DOM content; all structural rewriting
//! happens on cloned nodes.

pub mod text;

use crate::browser::BrowserSession;
use crate::error::{FetchError, Result};
use serde::Deserialize;

/// In-page script implementing the select-all serialization
const SELECT_ALL_JS: &str = include_str!("select_all.js");

/// Payload returned by the in-page script as a JSON string
#[derive(Debug, Deserialize)]
struct SelectionCapture {
    /// Rendered text of the rebuilt selection, before normalization
    text: String,

    /// Number of ranges the selection held (usually 1; 0 when nothing was
    /// selectable, which is an empty result rather than an error)
    range_count: usize,
}

/// Select the whole rendered document and serialize the selection to
/// normalized plain text.
pub fn selected_text(session: &BrowserSession) -> Result<String> {
    // headless_chrome has no network-idle wait; give dynamic content a
    // moment to settle after navigation
    std::thread::sleep(std::time::Duration::from_millis(1000));

    let raw = session.evaluate_to_string(SELECT_ALL_JS)?;

    let capture: SelectionCapture = serde_json::from_str(&raw)
        .map_err(|e| FetchError::EvaluationFailed(format!("malformed selection payload: {}", e)))?;

    log::debug!(
        "captured {} selection range(s), {} raw chars",
        capture.range_count,
        capture.text.len()
    );

    Ok(text::normalize(&capture.text))
}
