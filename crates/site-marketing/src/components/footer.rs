//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-[hsl(var(--asphalt-grey))] text-gray-300">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-white font-display text-xl font-bold mb-3">"Greenline Surfacing"</h3>
                        <p class="text-sm">
                            "Driveways, patios and paving across the county. "
                            "Free, no-obligation quotes."
                        </p>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-3">"Pages"</h4>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/" class="hover:text-white transition">"Home"</a></li>
                            <li><a href="/contact" class="hover:text-white transition">"Contact"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-white font-semibold mb-3">"Get in touch"</h4>
                        <p class="text-sm">"Phone / WhatsApp: 07927 726622"</p>
                    </div>
                </div>
                <div class="border-t border-gray-600 mt-8 pt-6 text-sm text-center">
                    "© Greenline Surfacing. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
