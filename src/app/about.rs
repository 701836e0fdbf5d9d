use leptos::prelude::*;

use crate::content::{FOCUS_AREAS, PROFILE};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="section-title scroll-reveal">"About Me"</h2>
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="scroll-reveal">
                        <p class="text-lg leading-relaxed mb-6">{PROFILE.about}</p>
                        <ul class="space-y-2 text-sm">
                            <li>"📍 " {PROFILE.location}</li>
                            <li>"🎓 " {PROFILE.degree}</li>
                            <li>"✉️ " <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a></li>
                        </ul>
                    </div>
                    <div class="scroll-reveal">
                        <h3 class="text-xl font-bold mb-4">"What I focus on"</h3>
                        <ul class="space-y-2">
                            {FOCUS_AREAS
                                .iter()
                                .map(|area| view! { <li class="focus-item">{*area}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
