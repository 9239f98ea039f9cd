//! Quote launcher
//!
//! Call-to-action that records a quote request and sends the visitor to the
//! contact page.

use crate::analytics::Analytics;
use crate::SiteConfig;

/// Performs a full page navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}

pub struct QuoteLauncher<A, N> {
    analytics: A,
    navigator: N,
    source: String,
    path: String,
}

impl<A: Analytics, N: Navigator> QuoteLauncher<A, N> {
    pub fn new(analytics: A, navigator: N, config: &SiteConfig) -> Self {
        Self {
            analytics,
            navigator,
            source: config.launcher_source.clone(),
            path: config.contact_path.clone(),
        }
    }

    /// Track the click, then navigate. Every call does both.
    pub fn launch(&self) {
        self.analytics.track_quote_request(&self.source, Vec::new());
        self.navigator.navigate(&self.path);
    }
}
