//! Opening links outside the app.

/// Open `url` in a new tab without giving it access to this window.
pub fn open_in_new_tab(url: &str) {
    let window = gloo_utils::window();
    if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        log::error!("❌ Failed to open {}: {:?}", url, e);
    }
}
