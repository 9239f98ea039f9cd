//! Browser bindings for analytics and navigation
//!
//! Outside the browser bundle both fall back to tracing, so components can
//! be rendered on the server and in tests.

use site_core::{Analytics, AnalyticsEvent, Navigator};

/// Forwards analytics events to `window.gtag`
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagAnalytics;

impl Analytics for GtagAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        #[cfg(feature = "hydrate")]
        send_to_gtag(&event);

        #[cfg(not(feature = "hydrate"))]
        site_core::TracingAnalytics.track(event);
    }
}

#[cfg(feature = "hydrate")]
fn send_to_gtag(event: &AnalyticsEvent) {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };

    let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")).unwrap_or(JsValue::UNDEFINED);
    let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
        // Blocked or not yet loaded.
        tracing::debug!("gtag unavailable, dropping {} event", event.name());
        return;
    };

    let params = js_sys::JSON::parse(&event.params().to_string()).unwrap_or(JsValue::UNDEFINED);
    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.name()),
        &params,
    ) {
        tracing::warn!("gtag call failed: {:?}", e);
    }
}

/// Full page navigation through `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.location().set_href(path) {
                tracing::warn!("Navigation to {} failed: {:?}", path, e);
            }
        }

        #[cfg(not(feature = "hydrate"))]
        tracing::debug!("Navigation to {} requested outside the browser", path);
    }
}
