//! Main application component

use leptos::*;
use leptos_router::*;
use site_core::SiteConfig;
use crate::pages::*;
use crate::components::*;

/// Config provided by the server, or the defaults when hydrating.
///
/// The server validates its config at startup; the browser bundle is built
/// with the same defaults.
pub fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(site_config());
    Toaster::provide();

    view! {
        <Router>
            <div class="min-h-screen bg-white overflow-x-hidden">
                <MarketingNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/contact" view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
            <ToastViewport/>
        </Router>
    }
}
