//! Contact section with the free quote launcher

use leptos::*;
use site_core::{QuoteLauncher, SiteConfig};

use crate::browser::{GtagAnalytics, WindowNavigator};
use crate::components::WhatsAppIcon;

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = store_value(expect_context::<SiteConfig>());

    let on_quote_click = move |_: leptos::ev::MouseEvent| {
        config.with_value(|config| {
            QuoteLauncher::new(GtagAnalytics, WindowNavigator, config).launch();
        });
    };

    view! {
        <section id="contact-form" class="py-20 px-4 sm:px-6 lg:px-8 bg-[hsl(var(--muted))] overflow-x-hidden">
            <div class="container mx-auto max-w-4xl w-full">
                <div class="text-center space-y-8">
                    <div class="space-y-4">
                        <h2 class="font-display text-3xl sm:text-4xl lg:text-5xl font-bold text-[hsl(var(--asphalt-grey))]">
                            "Contact Us"
                        </h2>
                        <p class="text-lg sm:text-xl text-[hsl(var(--asphalt-grey))] max-w-2xl mx-auto">
                            "Ready to transform your home? Get in touch for your free, no-obligation quote today."
                        </p>
                    </div>
                    <button
                        type="button"
                        on:click=on_quote_click
                        class="inline-flex items-center justify-center gap-3 bg-green-600 hover:bg-green-700 text-white font-bold py-6 sm:py-8 px-8 sm:px-12 rounded-lg text-lg sm:text-xl md:text-2xl shadow-xl hover:shadow-2xl transition-all duration-300 hover:scale-105"
                    >
                        <WhatsAppIcon class="w-6 h-6 sm:w-8 sm:h-8"/>
                        "Get A Free Quote"
                    </button>
                </div>
            </div>
        </section>
    }
}
