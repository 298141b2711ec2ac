//! Blocking user notifications.

use web_sys::window;

/// Shows `message` in a modal browser alert.
pub fn alert(message: &str) {
    log::debug!("Notifying user: {}", message);
    let shown = window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::error!("Could not display alert: {}", message);
    }
}
