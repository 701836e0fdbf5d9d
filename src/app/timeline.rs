use leptos::prelude::*;

use crate::content::{Experience, EDUCATION, EXPERIENCE};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20">
            <div class="max-w-4xl mx-auto px-4">
                <h2 class="section-title scroll-reveal">"Experience"</h2>
                <ol class="timeline relative border-l-2 border-cyan-500 ml-3">
                    {EXPERIENCE.iter().map(|job| view! { <TimelineItem job /> }).collect_view()}
                </ol>
                <div class="mt-12 p-6 rounded-lg education-card scroll-reveal">
                    <h3 class="text-xl font-bold">"🎓 " {EDUCATION.degree}</h3>
                    <p class="text-gray-500 mt-1">{EDUCATION.focus}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(job: &'static Experience) -> impl IntoView {
    view! {
        <li class="timeline-item mb-12 ml-6 scroll-reveal">
            <span class="timeline-dot absolute -left-2 w-4 h-4 rounded-full bg-cyan-500"></span>
            <div class="flex flex-wrap justify-between gap-2">
                <h3 class="text-xl font-bold">{job.role} " · " {job.company}</h3>
                <span class="text-sm text-gray-500">{job.period} " · " {job.location}</span>
            </div>
            <p class="mt-2">{job.description}</p>
            <ul class="mt-3 list-disc list-inside space-y-1">
                {job.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2 mt-3">
                {job.tech.iter().map(|t| view! { <span class="tech-chip">{*t}</span> }).collect_view()}
            </div>
        </li>
    }
}
