use crate::browser::config::LaunchOptions;
use crate::error::{FetchError, Result};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

/// A single-tab browser session that owns a Chrome/Chromium instance.
///
/// The session is released on every exit path: [`close`](Self::close) can be
/// called explicitly, and `Drop` closes any remaining tabs before the
/// underlying `Browser` kills the Chrome process.
pub struct BrowserSession {
    browser: Browser,

    /// The one tab this invocation works with
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        // The default idle timeout is 30 seconds; slow pages can outlive it
        // while we are still waiting for navigation to settle
        launch_opts.idle_browser_timeout = Duration::from_secs(5 * 60);

        // Some sites serve degraded markup to pages flagged as automated
        launch_opts
            .args
            .push(OsStr::new("--disable-blink-features=AutomationControlled"));

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        let browser =
            Browser::new(launch_opts).map_err(|e| FetchError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| FetchError::LaunchFailed(format!("failed to open tab: {}", e)))?;

        log::debug!("browser launched (headless: {})", options.headless);

        Ok(Self { browser, tab })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// Get the session's tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Navigate to a URL and block until the navigation has settled
    pub fn navigate(&self, url: &str) -> Result<()> {
        log::info!("navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| FetchError::NavigationFailed(format!("failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| FetchError::NavigationFailed(format!("page did not settle: {}", e)))?;

        Ok(())
    }

    /// Evaluate a script in the page and require a string result
    pub fn evaluate_to_string(&self, js: &str) -> Result<String> {
        let result = self
            .tab
            .evaluate(js, false)
            .map_err(|e| FetchError::EvaluationFailed(e.to_string()))?;

        let value = result
            .value
            .ok_or_else(|| FetchError::EvaluationFailed("script returned no value".to_string()))?;

        serde_json::from_value(value)
            .map_err(|e| FetchError::EvaluationFailed(format!("expected a string result: {}", e)))
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close all tabs, shutting the browser down
    pub fn close(&self) -> Result<()> {
        let tabs = self
            .browser
            .get_tabs()
            .lock()
            .map_err(|e| FetchError::TabOperationFailed(format!("failed to list tabs: {}", e)))?
            .clone();

        for tab in tabs {
            let _ = tab.close(false); // Ignore errors on individual tab closes
        }

        log::debug!("browser session closed");
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // Covers error paths that return before the explicit close; the
        // Chrome process itself dies with the Browser value.
        let _ = self.close();
    }
}
