//! Browser alert for the "Shop Now" call-to-action buttons.
//!
//! Requires a browser environment; outside hydrate builds the message is only
//! logged so server rendering stays side-effect free.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Message shown when any "Shop Now" button is clicked.
pub const SHOP_NOW_MESSAGE: &str = "Shop Now button clicked!";

/// Show `message` in a blocking `window.alert`.
pub fn show(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Click handler body shared by every "Shop Now" button.
pub fn shop_now_clicked() {
    show(SHOP_NOW_MESSAGE);
}
