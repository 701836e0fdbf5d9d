use leptos::prelude::*;

use crate::content::{projects, LinkKind, Project};

use super::context::use_portfolio;
use super::effects::{Magnetic, TiltCard};

const CARD_ARCHITECTURE_ITEMS: usize = 3;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="section-title scroll-reveal">"Featured Projects"</h2>
                <div class="space-y-16">
                    {projects()
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let ctx = use_portfolio();
    let demo = project
        .links()
        .into_iter()
        .find(|l| l.kind == LinkKind::Demo)
        .map(|l| l.href);

    view! {
        <article class="project-card grid md:grid-cols-2 gap-8 items-center scroll-reveal">
            <LayeredVisual project />
            <div>
                <h3 class="text-2xl font-bold mb-3">{project.title.clone()}</h3>
                <p class="mb-4">{project.summary.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .impact
                        .iter()
                        .map(|item| view! { <span class="impact-badge">{item.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech
                        .iter()
                        .map(|t| view! { <span class="tech-chip">{t.clone()}</span> })
                        .collect_view()}
                </div>
                <ul class="text-sm list-disc list-inside mb-6">
                    {project
                        .architecture
                        .iter()
                        .take(CARD_ARCHITECTURE_ITEMS)
                        .map(|a| view! { <li>{a.clone()}</li> })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-3">
                    <Magnetic>
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| ctx.overlay.open(&project.id)
                        >
                            "View Details"
                        </button>
                    </Magnetic>
                    {demo
                        .map(|href| {
                            view! {
                                <Magnetic>
                                    <a
                                        href=href
                                        class=LinkKind::Demo.class()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {LinkKind::Demo.label()}
                                    </a>
                                </Magnetic>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

/// Stacked screenshots that tilt toward the pointer. A gradient panel sits
/// underneath and shows through when the images fail to load.
#[component]
pub fn LayeredVisual(project: &'static Project) -> impl IntoView {
    view! {
        <TiltCard class="project-visual relative">
            <div class="project-fallback absolute inset-0 flex items-center justify-center rounded-lg bg-gradient-to-br from-cyan-500 to-blue-700 text-white text-xl font-semibold">
                {project.workflow_label()}
            </div>
            {(0..project.image_layers.len())
                .filter_map(|i| project.layer_src(i).map(|src| (i, src)))
                .map(|(i, src)| {
                    view! {
                        <img
                            class="project-layer"
                            style:z-index=(i + 1).to_string()
                            src=src
                            alt=project.layer_alt(i)
                            loading="lazy"
                            onerror="this.style.display='none'"
                        />
                    }
                })
                .collect_view()}
        </TiltCard>
    }
}
