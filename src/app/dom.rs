//! web-sys implementations of the behaviour traits.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::behavior::overlay::{OverlayHost, FOCUSABLE_SELECTOR};
use crate::behavior::pointer::{Point, Rect};
use crate::behavior::reveal::{Intersection, RevealObserver, ViewportWatcher, WatchOptions};
use crate::behavior::scroll::{section_scroll_target, SectionBounds, SECTIONS};
use crate::behavior::MotionPreference;

const REVEAL_SELECTOR: &str = ".scroll-reveal";
const REVEALED_CLASS: &str = "revealed";

/// Reads the reduced-motion media query. Only meaningful in the browser.
pub fn read_motion_preference() -> MotionPreference {
    #[cfg(feature = "hydrate")]
    {
        let reduced = window()
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        MotionPreference::from_reduced(reduced)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MotionPreference::NoPreference
    }
}

pub fn bounds_of(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn pointer_of(ev: &web_sys::MouseEvent) -> Point {
    Point {
        x: ev.client_x() as f64,
        y: ev.client_y() as f64,
    }
}

pub fn section_bounds() -> Vec<SectionBounds> {
    let doc = document();
    SECTIONS
        .iter()
        .filter_map(|(id, _)| {
            let el = doc.get_element_by_id(id)?;
            let r = el.get_bounding_client_rect();
            Some(SectionBounds {
                id: id.to_string(),
                top: r.top(),
                bottom: r.bottom(),
            })
        })
        .collect()
}

/// `(scroll_top, scroll_height, viewport_height)` of the page.
pub fn page_scroll_metrics() -> Option<(f64, f64, f64)> {
    let win = window();
    let scroll_top = win.scroll_y().ok()?;
    let viewport = win.inner_height().ok()?.as_f64()?;
    let height = document().document_element()?.scroll_height() as f64;
    Some((scroll_top, height, viewport))
}

/// Smoothly scrolls so the section sits just below the fixed nav. Missing sections are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(section) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(section_scroll_target(section.offset_top() as f64));
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// The overlay as it exists in the document.
pub struct DomOverlay {
    root: Option<HtmlElement>,
    content: RwSignal<Option<String>>,
}

impl DomOverlay {
    pub fn new(root: Option<HtmlElement>, content: RwSignal<Option<String>>) -> Self {
        Self { root, content }
    }
}

impl OverlayHost for DomOverlay {
    type Element = HtmlElement;

    fn has_root(&self) -> bool {
        self.root.is_some()
    }

    fn render_content(&mut self, content_id: &str) {
        self.content.set(Some(content_id.to_string()));
    }

    fn set_visible(&mut self, visible: bool) {
        if let Some(root) = &self.root {
            let _ = root.class_list().toggle_with_force("active", visible);
        }
    }

    fn set_aria_hidden(&mut self, hidden: bool) {
        if let Some(root) = &self.root {
            let _ = root.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        let res = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if res.is_err() {
            log::warn!("couldn't change body scroll lock");
        }
    }

    fn focusable_elements(&self) -> Vec<HtmlElement> {
        let Some(nodes) = self
            .root
            .as_ref()
            .and_then(|root| root.query_selector_all(FOCUSABLE_SELECTOR).ok())
        else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn active_element(&self) -> Option<HtmlElement> {
        document()
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn focus(&mut self, element: &HtmlElement) {
        let _ = element.focus();
    }
}

/// An `IntersectionObserver` feeding batches of entries to a callback.
///
/// `observer` is `None` when the browser refused to build one; the page then
/// simply never reveals.
pub struct DomRevealWatcher {
    observer: Option<IntersectionObserver>,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl DomRevealWatcher {
    pub fn new<F>(opts: &WatchOptions, mut on_entries: F) -> Self
    where
        F: FnMut(Vec<Intersection<HtmlElement>>) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let batch = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target().dyn_into::<HtmlElement>().ok()?;
                    Some(Intersection {
                        target,
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            on_entries(batch);
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(opts.threshold));
        init.set_root_margin(opts.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| log::warn!("IntersectionObserver unavailable: {e:?}"))
                .ok();

        Self {
            observer,
            _callback: callback,
        }
    }
}

impl ViewportWatcher for DomRevealWatcher {
    type Target = HtmlElement;

    fn observe(&mut self, target: &HtmlElement) {
        if let Some(observer) = &self.observer {
            observer.observe(target);
        }
    }

    fn disconnect(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

impl Drop for DomRevealWatcher {
    fn drop(&mut self) {
        self.disconnect();
    }
}

type SharedReveal = Rc<RefCell<RevealObserver<DomRevealWatcher>>>;

/// The page's scroll-reveal set, wired to a live `IntersectionObserver`.
pub struct ScrollReveal {
    inner: SharedReveal,
}

impl ScrollReveal {
    /// Collects every `.scroll-reveal` element currently in the document.
    pub fn collect() -> Self {
        let mut elements = Vec::new();
        if let Ok(nodes) = document().query_selector_all(REVEAL_SELECTOR) {
            elements.extend(
                (0..nodes.length())
                    .filter_map(|i| nodes.item(i))
                    .filter_map(|node| node.dyn_into::<HtmlElement>().ok()),
            );
        }
        log::debug!("collected {} reveal targets", elements.len());
        Self {
            inner: Rc::new(RefCell::new(RevealObserver::new(elements))),
        }
    }

    pub fn activate(&self, motion: MotionPreference) -> bool {
        let connect = connector(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().activate(motion, connect)
    }

    pub fn reactivate(&self) -> bool {
        let connect = connector(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().reactivate(connect)
    }

    pub fn disconnect(&self) {
        self.inner.borrow_mut().disconnect();
    }
}

fn connector(
    weak: Weak<RefCell<RevealObserver<DomRevealWatcher>>>,
) -> impl FnOnce(&WatchOptions) -> DomRevealWatcher {
    move |opts| {
        DomRevealWatcher::new(opts, move |batch| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let Ok(mut reveal) = shared.try_borrow_mut() else {
                return;
            };
            for el in reveal.record(batch) {
                let _ = el.class_list().add_1(REVEALED_CLASS);
            }
        })
    }
}
