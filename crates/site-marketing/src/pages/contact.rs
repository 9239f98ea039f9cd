//! Contact page

use leptos::*;
use crate::components::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-[hsl(var(--asphalt-grey))] text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="font-display text-4xl md:text-5xl font-bold mb-6">"Get Your Free Quote"</h1>
                        <p class="text-xl text-gray-300">
                            "Tell us about your project and we'll get back to you, usually the same day."
                        </p>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                        <div class="bg-white rounded-xl shadow-lg p-8">
                            <ContactForm/>
                        </div>

                        // Contact Info
                        <div class="space-y-8">
                            <div>
                                <h2 class="text-2xl font-bold text-[hsl(var(--asphalt-grey))] mb-4">"Prefer to Talk?"</h2>
                                <p class="text-gray-600">
                                    "Call or message us on WhatsApp with a few photos of the area "
                                    "and we can often give you a rough price straight away."
                                </p>
                            </div>

                            <div class="flex items-start">
                                <div class="flex-shrink-0 w-12 h-12 bg-green-100 rounded-lg flex items-center justify-center text-green-700">
                                    <WhatsAppIcon class="w-6 h-6"/>
                                </div>
                                <div class="ml-4">
                                    <h3 class="font-semibold text-gray-900">"Phone / WhatsApp"</h3>
                                    <a href="tel:07927726622" class="text-gray-600 hover:text-gray-900">"07927 726622"</a>
                                </div>
                            </div>

                            <div class="bg-gray-100 rounded-lg p-6">
                                <h3 class="font-semibold text-gray-900 mb-2">"Response Time"</h3>
                                <p class="text-gray-600">"We respond to every enquiry within 24 hours."</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
