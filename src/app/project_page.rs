use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::{Meta, Title};
use leptos_router::{components::A, hooks::use_params_map};

#[cfg(feature = "ssr")]
use crate::case_study::get_case_study;
use crate::case_study::{CaseStudy, GLOBAL_CASE_STUDY_CACHE};
use crate::content::{find_project, Project};

use super::modal::ProjectDetails;
use super::projects::LayeredVisual;
use super::NotFound;

#[server(input = GetUrl)]
pub async fn get_case_study_server(slug: String) -> Result<CaseStudy, ServerFnError> {
    get_case_study(&slug).map_err(|e| {
        tracing::debug!("no case study served for {slug}: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || match find_project(&slug()) {
        Some(project) => view! { <ProjectArticle project /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn ProjectArticle(project: &'static Project) -> impl IntoView {
    let study = Resource::new(
        move || project.id.clone(),
        move |id| async move {
            let cache = &*GLOBAL_CASE_STUDY_CACHE;
            if let Some(s) = cache.get(&id) {
                return Some((*s).clone());
            }
            let study = get_case_study_server(id.clone()).await.ok();
            // the server keeps its own cache
            #[cfg(feature = "hydrate")]
            if let Some(s) = &study {
                cache.insert(id, s.clone());
            }
            study
        },
    );

    view! {
        <Title text=project.title.clone() />
        <Meta name="description" content=project.summary.clone() />
        <main class="max-w-4xl mx-auto px-4 py-16">
            <A href="/" attr:class="text-cyan-600 hover:underline">
                "← Back to portfolio"
            </A>
            <article class="mt-8">
                <div class="mb-8">
                    <LayeredVisual project />
                </div>
                <ProjectDetails project />
            </article>
            <Suspense>
                {move || Suspend::new(async move {
                    study.await.map(|s| view! { <CaseStudyBody study=s /> })
                })}
            </Suspense>
        </main>
    }
}

#[component]
fn CaseStudyBody(study: CaseStudy) -> impl IntoView {
    view! {
        <section class="case-study mt-12 pt-8 border-t">
            <h2 class="text-2xl font-bold">{study.title}</h2>
            <p class="text-sm text-gray-500 mt-1 mb-6">
                "Updated " {study.updated.format("%b %e, %Y").to_string()} " · "
                {study.reading_minutes} " min read"
            </p>
            <div class="prose max-w-none" inner_html=study.html></div>
        </section>
    }
}
