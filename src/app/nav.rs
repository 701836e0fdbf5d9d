use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_preferred_dark, use_throttle_fn, use_window};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::behavior::scroll::{
    is_scrolled, scroll_progress, NavHighlighter, NAV_THROTTLE_MS, PROGRESS_THROTTLE_MS,
    SECTIONS,
};
#[cfg(feature = "hydrate")]
use crate::behavior::theme::THEME_STORAGE_KEY;
use crate::behavior::theme::Theme;
use crate::content::PROFILE;

use super::dom::{page_scroll_metrics, scroll_to_section, section_bounds};

/// Classes for the section list; when open on small screens it drops below the bar.
pub fn nav_menu_class(open: bool) -> &'static str {
    if open {
        "flex flex-col absolute top-full inset-x-0 gap-6 p-4 bg-white dark:bg-gray-950 \
         md:static md:flex-row md:p-0 md:bg-transparent"
    } else {
        "hidden md:flex gap-6"
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let highlighter = RwSignal::new(NavHighlighter::default());
    let (scrolled, set_scrolled) = signal(false);
    let (progress, set_progress) = signal(0.0_f64);
    let (menu_open, set_menu_open) = signal(false);

    let update_nav = use_throttle_fn(
        move || {
            let sections = section_bounds();
            highlighter.maybe_update(|h| h.update(&sections));
            if let Ok(y) = window().scroll_y() {
                set_scrolled.set(is_scrolled(y));
            }
        },
        NAV_THROTTLE_MS,
    );
    let update_progress = use_throttle_fn(
        move || {
            if let Some((top, height, viewport)) = page_scroll_metrics() {
                set_progress.set(scroll_progress(top, height, viewport));
            }
        },
        PROGRESS_THROTTLE_MS,
    );
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        update_nav();
        update_progress();
    });

    let jump = move |id: &'static str| {
        move |ev: ev::MouseEvent| {
            ev.prevent_default();
            set_menu_open.set(false);
            scroll_to_section(id);
        }
    };

    let links = SECTIONS
        .iter()
        .map(|&(id, label)| {
            view! {
                <li>
                    <a
                        href=format!("#{id}")
                        class="nav-link"
                        class:active=move || highlighter.with(|h| h.is_active(id))
                        on:click=jump(id)
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div
            class="scroll-progress fixed top-0 left-0 h-1 bg-cyan-500 z-50"
            style:width=move || format!("{:.1}%", progress.get())
        ></div>
        <nav class="navbar fixed top-0 inset-x-0 z-40" class:scrolled=move || scrolled.get()>
            <div class="max-w-6xl mx-auto flex items-center justify-between px-4 py-3">
                <a href="#hero" class="font-bold text-lg" on:click=jump("hero")>
                    {PROFILE.name}
                </a>
                <ul class=move || nav_menu_class(menu_open.get())>
                    {links}
                </ul>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        class="md:hidden p-2"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Light/dark switch. The saved choice lives in local storage under `theme`.
#[component]
fn ThemeToggle() -> impl IntoView {
    let prefers_dark = use_preferred_dark();

    #[cfg(feature = "hydrate")]
    let (saved, set_saved, _) =
        use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (saved, set_saved) = signal(None::<Theme>);

    let theme = Memo::new(move |_| Theme::resolve(saved.get(), prefers_dark.get()));

    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        if let Some(root) = document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", dark);
        }
    });

    view! {
        <button
            class="theme-toggle p-2 rounded-full"
            aria-label=move || theme.get().toggle_label()
            on:click=move |_| set_saved.set(Some(theme.get_untracked().toggled()))
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
