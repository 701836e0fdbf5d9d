use leptos::prelude::*;

use crate::behavior::contact::{ContactField, ContactForm};
use crate::behavior::notify::ToastId;
use crate::content::PROFILE;

use super::context::use_portfolio;
use super::effects::Magnetic;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_portfolio();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(note) = form.try_update(ContactForm::submit) {
            ctx.notify(note);
        }
    };

    view! {
        <section id="contact" class="py-20">
            <div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-12">
                <div class="scroll-reveal">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="mb-6">
                        "Have a project in mind or want to talk data and AI? Drop me a message."
                    </p>
                    <ul class="space-y-3">
                        <li>
                            "✉️ " <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
                        </li>
                        <li>"📞 " {PROFILE.phone}</li>
                        <li>
                            <a href=PROFILE.github target="_blank" rel="noopener noreferrer">
                                "GitHub"
                            </a>
                            " · "
                            <a href=PROFILE.linkedin target="_blank" rel="noopener noreferrer">
                                "LinkedIn"
                            </a>
                        </li>
                    </ul>
                </div>
                <form id="contact-form" class="space-y-4 scroll-reveal" on:submit=on_submit>
                    <Field form field=ContactField::Name label="Name" kind="text" />
                    <Field form field=ContactField::Email label="Email" kind="email" />
                    <Field form field=ContactField::Message label="Message" kind="textarea" />
                    <Magnetic>
                        <button type="submit" class="btn btn-primary">
                            "Send Message"
                        </button>
                    </Magnetic>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Field(
    form: RwSignal<ContactForm>,
    field: ContactField,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    let id = format!("contact-{}", field.name());
    let value = move || form.with(|f| f.field(field).to_string());
    let on_input =
        move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = if kind == "textarea" {
        view! {
            <textarea
                id=id.clone()
                name=field.name()
                rows="5"
                class="form-input"
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=field.name()
                type=kind
                class="form-input"
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="flex flex-col gap-1">
            <label for=id class="text-sm font-medium">
                {label}
            </label>
            {control}
        </div>
    }
}

/// Stack of on-screen notifications in the corner of the page.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_portfolio().toasts;
    let ids = move || {
        toasts.with(|t| t.items().iter().map(|toast| toast.id).collect::<Vec<_>>())
    };

    view! {
        <div class="toaster fixed top-20 right-4 z-50 space-y-2" aria-live="polite">
            <For each=ids key=|id| *id let:id>
                <Toast id />
            </For>
        </div>
    }
}

#[component]
fn Toast(id: ToastId) -> impl IntoView {
    let toasts = use_portfolio().toasts;
    let notification = toasts
        .with_untracked(|t| t.get(id).map(|toast| toast.notification.clone()))
        .unwrap_or_default();
    let kind = notification.kind;
    let transform = move || {
        toasts.with(|t| t.get(id).map_or("translateX(100%)", |toast| toast.transform()))
    };

    view! {
        <div
            class=kind.class()
            role="status"
            style:background=kind.background()
            style:transform=transform
        >
            {notification.message}
        </div>
    }
}
