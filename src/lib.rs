#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod behavior;
pub mod case_study;
pub mod content;
#[cfg(feature = "ssr")]
mod highlight;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
