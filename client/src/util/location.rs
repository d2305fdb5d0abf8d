//! Full-page navigation.

/// Replace the current document with `path`, discarding all in-memory state.
/// No-op outside the browser.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::warn!("navigation to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
