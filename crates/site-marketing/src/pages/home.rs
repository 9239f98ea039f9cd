//! Home page

use leptos::*;
use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="bg-[hsl(var(--asphalt-grey))] text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="font-display text-5xl md:text-6xl font-bold mb-6">
                            "Driveways and Patios "
                            <span class="text-green-400">"Built to Last"</span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8">
                            "Block paving, resin, tarmac and natural stone, "
                            "laid by a local team that answers the phone."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="#contact-form" class="px-8 py-4 bg-green-600 hover:bg-green-700 text-white font-semibold rounded-lg transition">
                                "Get A Free Quote"
                            </a>
                            <a href="/contact" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "Send Us a Message"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Services
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="font-display text-3xl md:text-4xl font-bold text-[hsl(var(--asphalt-grey))] mb-4">
                            "What We Do"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Every job starts with a free site visit and a written, fixed-price quote."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        <ServiceCard
                            title="Block Paving"
                            description="Hard-wearing driveways in a range of colours and patterns, on a properly compacted sub-base."
                        />
                        <ServiceCard
                            title="Resin Driveways"
                            description="Permeable, smooth resin-bound surfaces that drain well and need little upkeep."
                        />
                        <ServiceCard
                            title="Patios"
                            description="Natural stone and porcelain patios, with edging, steps and drainage done right."
                        />
                    </div>
                </div>
            </section>

            <ContactSection/>
        </div>
    }
}

#[component]
fn ServiceCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-50 rounded-xl p-8 shadow-sm hover:shadow-md transition-shadow">
            <h3 class="text-xl font-semibold text-[hsl(var(--asphalt-grey))] mb-3">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
