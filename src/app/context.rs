use leptos::{ev::KeyboardEvent, html, prelude::*};

use crate::behavior::notify::{Notification, Toasts, ENTER_DELAY, EXIT_DURATION, VISIBLE_FOR};
use crate::behavior::overlay::{CloseTrigger, Key, KeyOutcome, OverlayController};
use crate::behavior::MotionPreference;

use super::dom::{read_motion_preference, DomOverlay};

/// Page-wide state shared by every section. Built once in [`App`](super::App).
#[derive(Clone, Copy)]
pub struct PortfolioContext {
    pub motion: MotionPreference,
    pub overlay: OverlayHandle,
    pub toasts: RwSignal<Toasts>,
}

impl PortfolioContext {
    pub fn new() -> Self {
        let motion = read_motion_preference();
        log::debug!("motion preference: {motion:?}");
        Self {
            motion,
            overlay: OverlayHandle::new(),
            toasts: RwSignal::new(Toasts::default()),
        }
    }

    pub fn provide(self) -> Self {
        provide_context(self);
        self
    }

    /// Queues a toast and schedules its enter, dismiss and removal steps.
    pub fn notify(&self, notification: Notification) {
        let toasts = self.toasts;
        let Some(id) = toasts.try_update(|t| t.push(notification)) else {
            return;
        };
        set_timeout(move || toasts.update(|t| t.show(id)), ENTER_DELAY);
        set_timeout(move || toasts.update(|t| t.dismiss(id)), VISIBLE_FOR);
        set_timeout(
            move || toasts.update(|t| t.remove(id)),
            VISIBLE_FOR + EXIT_DURATION,
        );
    }
}

impl Default for PortfolioContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_portfolio() -> PortfolioContext {
    expect_context::<PortfolioContext>()
}

/// The project modal: its controller, root element and the project it shows.
#[derive(Clone, Copy)]
pub struct OverlayHandle {
    controller: StoredValue<OverlayController>,
    pub root: NodeRef<html::Div>,
    pub content: RwSignal<Option<String>>,
}

impl OverlayHandle {
    fn new() -> Self {
        Self {
            controller: StoredValue::new(OverlayController::new()),
            root: NodeRef::new(),
            content: RwSignal::new(None),
        }
    }

    fn host(&self) -> DomOverlay {
        let root = self.root.get_untracked().map(Into::into);
        DomOverlay::new(root, self.content)
    }

    pub fn open(&self, project_id: &str) {
        let mut host = self.host();
        let opened = self
            .controller
            .try_update_value(|c| c.open(&mut host, project_id))
            .unwrap_or(false);
        if !opened {
            log::debug!("no overlay on this page, ignoring open of {project_id}");
        }
    }

    pub fn close_via(&self, trigger: CloseTrigger) {
        let mut host = self.host();
        self.controller.update_value(|c| {
            c.close_via(&mut host, trigger);
        });
    }

    /// Closes without a user trigger, e.g. when the page is torn down.
    pub fn close(&self) {
        let mut host = self.host();
        self.controller.try_update_value(|c| c.close(&mut host));
    }

    pub fn handle_key(&self, ev: &KeyboardEvent) {
        let mut host = self.host();
        let key = Key::from_dom(&ev.key(), ev.shift_key());
        let outcome = self
            .controller
            .try_update_value(|c| c.handle_key(&mut host, key))
            .unwrap_or(KeyOutcome::PassThrough);
        if outcome.prevents_default() {
            ev.prevent_default();
        }
    }
}
