use chrono::{DateTime, Datelike, FixedOffset};
use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_debounce_fn, use_event_listener, use_window};

use crate::behavior::scroll::RESIZE_DEBOUNCE_MS;
use crate::content::PROFILE;

use super::about::About;
use super::contact::{ContactSection, Toaster};
use super::context::use_portfolio;
use super::dom::{scroll_to_section, ScrollReveal};
use super::effects::Magnetic;
use super::modal::ProjectModal;
use super::nav::Nav;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;
use super::timeline::ExperienceSection;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_portfolio();
    let reveal = StoredValue::new_local(None::<ScrollReveal>);

    // runs once the sections are in the document
    Effect::new(move |_| {
        let r = ScrollReveal::collect();
        r.activate(ctx.motion);
        reveal.set_value(Some(r));
    });

    let on_resize = use_debounce_fn(
        move || {
            reveal.with_value(|r| {
                if let Some(r) = r {
                    r.reactivate();
                }
            });
        },
        RESIZE_DEBOUNCE_MS,
    );
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        on_resize();
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        ctx.overlay.handle_key(&ev);
    });

    on_cleanup(move || {
        ctx.overlay.close();
        reveal.try_with_value(|r| {
            if let Some(r) = r {
                r.disconnect();
            }
        });
    });

    view! {
        <Title text=PROFILE.title />
        <Nav />
        <main>
            <Hero />
            <About />
            <ProjectsSection />
            <SkillsSection />
            <ExperienceSection />
            <ContactSection />
        </main>
        <Footer />
        <ProjectModal />
        <Toaster />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero min-h-screen flex items-center">
            <div class="max-w-6xl mx-auto px-4 scroll-reveal">
                <p class="text-cyan-600 font-medium mb-2">"Hi, I'm"</p>
                <h1 class="text-4xl md:text-6xl font-bold mb-4">{PROFILE.name}</h1>
                <h2 class="text-2xl md:text-3xl text-gray-500 mb-6">{PROFILE.title}</h2>
                <p class="text-lg max-w-2xl mb-8">{PROFILE.tagline}</p>
                <div class="flex flex-wrap gap-4">
                    <Magnetic>
                        <a
                            href="#projects"
                            class="btn btn-primary"
                            on:click=move |ev| {
                                ev.prevent_default();
                                scroll_to_section("projects");
                            }
                        >
                            "View Projects"
                        </a>
                    </Magnetic>
                    <Magnetic>
                        <a href=PROFILE.resume_url class="btn btn-ghost" download="">
                            "Download Resume"
                        </a>
                    </Magnetic>
                </div>
            </div>
        </section>
    }
}

fn build_date() -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok()
}

#[component]
fn Footer() -> impl IntoView {
    let built = build_date();
    let year = built.map(|d| d.year().to_string()).unwrap_or_default();
    view! {
        <footer class="py-8 text-center text-sm text-gray-500">
            <p>"© " {year} " " {PROFILE.name}</p>
            {built
                .map(|d| {
                    view! { <p class="mt-1">"Last built " {d.format("%b %e, %Y").to_string()}</p> }
                })}
        </footer>
    }
}
