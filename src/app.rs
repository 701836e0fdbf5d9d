mod about;
mod contact;
mod context;
mod dom;
mod effects;
mod homepage;
mod modal;
mod nav;
mod project_page;
mod projects;
mod skills;
mod timeline;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;

pub use context::{use_portfolio, OverlayHandle, PortfolioContext};
use homepage::HomePage;
use project_page::ProjectPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <meta name="description" content=PROFILE.tagline />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    PortfolioContext::new().provide();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/projects/:slug") view=ProjectPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-3xl font-bold">"Page not found"</h1>
            <A href="/" attr:class="btn btn-primary">
                "Back home"
            </A>
        </main>
    }
}
