use leptos::{html, prelude::*};

use crate::behavior::pointer::HoverEffect;

use super::context::use_portfolio;
use super::dom::{bounds_of, pointer_of};

#[component]
fn PointerFollow(
    effect: HoverEffect,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(String::new());

    view! {
        <div
            class=class
            node_ref=node
            style:transform=move || transform.get()
            on:mousemove=move |ev| {
                let Some(el) = node.get_untracked() else {
                    return;
                };
                if let Some(t) = effect.pointer_move(pointer_of(&ev), bounds_of(&el)) {
                    set_transform.set(t.to_string());
                }
            }
            on:mouseleave=move |_| {
                if let Some(t) = effect.pointer_leave() {
                    set_transform.set(t.to_string());
                }
            }
        >
            {children()}
        </div>
    }
}

/// Drifts its children toward the pointer while it hovers near the centre.
#[component]
pub fn Magnetic(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let effect = HoverEffect::magnetic(use_portfolio().motion);
    view! {
        <PointerFollow effect class=format!("magnetic-btn inline-block {class}")>
            {children()}
        </PointerFollow>
    }
}

/// Rotates its children in 3D to face the pointer.
#[component]
pub fn TiltCard(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let effect = HoverEffect::tilt(use_portfolio().motion);
    view! {
        <PointerFollow effect class=format!("tilt-card {class}")>
            {children()}
        </PointerFollow>
    }
}
