use leptos::prelude::*;
use leptos_router::components::A;

use crate::behavior::overlay::CloseTrigger;
use crate::content::{find_project, Project};

use super::context::use_portfolio;

/// The page's single overlay. Hidden until a card asks for it.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let overlay = use_portfolio().overlay;
    let project = move || overlay.content.get().and_then(|id| find_project(&id));

    view! {
        <div
            id="project-modal"
            class="modal"
            role="dialog"
            aria-modal="true"
            aria-hidden="true"
            aria-labelledby="modal-title"
            node_ref=overlay.root
        >
            <div class="modal-backdrop" on:click=move |_| overlay.close_via(CloseTrigger::Backdrop)></div>
            <div class="modal-content">
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Close project details"
                    on:click=move |_| overlay.close_via(CloseTrigger::CloseButton)
                >
                    "×"
                </button>
                <div id="modal-body">
                    {move || {
                        project()
                            .map(|project| {
                                view! {
                                    <ProjectDetails project />
                                    <A
                                        href=project.detail_path()
                                        attr:class="inline-block mt-4 text-cyan-600 hover:underline"
                                    >
                                        "Open full page →"
                                    </A>
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectDetails(project: &'static Project) -> impl IntoView {
    view! {
        <h2 id="modal-title" class="text-2xl font-bold mb-4">{project.title.clone()}</h2>
        <p class="mb-6">{project.summary.clone()}</p>
        <ImpactBadges impact=project.impact.as_slice() />
        <DetailBlock title="Problem" body=project.problem.clone() />
        <DetailBlock title="Approach" body=project.approach.clone() />
        <DetailBlock title="Outcome" body=project.outcome.clone() />
        <ArchitectureList items=project.architecture.as_slice() />
        <TechStack tech=project.tech.as_slice() />
        <ProjectLinks project />
    }
}

#[component]
pub fn ImpactBadges(impact: &'static [String]) -> impl IntoView {
    (!impact.is_empty())
        .then(|| {
            view! {
                <div class="mb-4">
                    <h3 class="font-semibold mb-1">"Key Impact"</h3>
                    <div class="flex flex-wrap gap-2">
                        {impact
                            .iter()
                            .map(|item| view! { <span class="impact-badge">{item.clone()}</span> })
                            .collect_view()}
                    </div>
                </div>
            }
        })
}

#[component]
pub fn DetailBlock(title: &'static str, body: Option<String>) -> impl IntoView {
    body.map(|body| {
        view! {
            <div class="mb-4">
                <h3 class="font-semibold mb-1">{title}</h3>
                <p>{body}</p>
            </div>
        }
    })
}

#[component]
pub fn ArchitectureList(items: &'static [String]) -> impl IntoView {
    (!items.is_empty())
        .then(|| {
            view! {
                <div class="mb-4">
                    <h3 class="font-semibold mb-1">"Architecture"</h3>
                    <ul class="list-disc list-inside">
                        {items.iter().map(|a| view! { <li>{a.clone()}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
}

#[component]
pub fn TechStack(tech: &'static [String]) -> impl IntoView {
    (!tech.is_empty())
        .then(|| {
            view! {
                <div class="mb-4">
                    <h3 class="font-semibold mb-1">"Tech Stack"</h3>
                    <div class="flex flex-wrap gap-2">
                        {tech
                            .iter()
                            .map(|t| view! { <span class="tech-chip">{t.clone()}</span> })
                            .collect_view()}
                    </div>
                </div>
            }
        })
}

/// One button per link the project actually has.
#[component]
pub fn ProjectLinks(project: &'static Project) -> impl IntoView {
    let links = project.links();
    (!links.is_empty())
        .then(|| {
            view! {
                <div>
                    <h3 class="font-semibold mb-2">"Links"</h3>
                    <div class="flex flex-wrap gap-3">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class=link.kind.class()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {link.kind.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::fallback_projects;

    fn render(project: &'static Project) -> String {
        Owner::new().with(|| view! { <ProjectDetails project /> }.to_html())
    }

    #[test]
    fn test_details_show_every_block() {
        let html = render(find_project("audit-buddy").unwrap());
        assert!(html.contains("Key Impact"));
        assert!(html.contains("Automated document parsing"));
        assert!(html.contains("Architecture"));
        assert!(html.contains("Tech Stack"));
        assert!(html.contains("FastAPI"));
        assert!(html.contains("Links"));
    }

    #[test]
    fn test_details_skip_empty_blocks() {
        let project: &'static Project = Box::leak(Box::new(Project {
            impact: Vec::new(),
            tech: Vec::new(),
            demo_url: None,
            repo_url: None,
            case_study_url: None,
            ..fallback_projects().remove(0)
        }));
        let html = render(project);
        assert!(!html.contains("Key Impact"));
        assert!(!html.contains("Tech Stack"));
        assert!(!html.contains("Links"));
        assert!(html.contains(&project.title));
    }
}
