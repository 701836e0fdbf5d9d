/// Elements that take part in keyboard focus order inside the overlay.
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// The page-side effects the overlay controller drives.
///
/// The browser binding talks to the DOM; tests use an in-memory page.
pub trait OverlayHost {
    type Element: Clone + PartialEq;

    /// False when the overlay root is missing from the page.
    fn has_root(&self) -> bool;
    fn render_content(&mut self, content_id: &str);
    fn set_visible(&mut self, visible: bool);
    fn set_aria_hidden(&mut self, hidden: bool);
    fn set_scroll_locked(&mut self, locked: bool);
    /// Focusable elements inside the overlay, in document order.
    fn focusable_elements(&self) -> Vec<Self::Element>;
    fn active_element(&self) -> Option<Self::Element>;
    fn focus(&mut self, element: &Self::Element);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub is_open: bool,
    pub active_content_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab { shift: bool },
    Escape,
    Other,
}

impl Key {
    pub fn from_dom(key: &str, shift: bool) -> Self {
        match key {
            "Tab" => Self::Tab { shift },
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// What the caller should do with the key event after the controller saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the browser handle it.
    PassThrough,
    /// Focus was moved by the controller; suppress the default action.
    Wrapped,
    Closed,
}

impl KeyOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Wrapped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Debug, Default)]
pub struct OverlayController {
    state: OverlayState,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Shows `content_id` in the overlay. Returns false if the page has no overlay.
    ///
    /// Opening an already open overlay swaps its content.
    pub fn open<H: OverlayHost>(&mut self, host: &mut H, content_id: &str) -> bool {
        if !host.has_root() {
            return false;
        }
        host.render_content(content_id);
        host.set_visible(true);
        host.set_aria_hidden(false);
        host.set_scroll_locked(true);

        self.state.is_open = true;
        self.state.active_content_id = Some(content_id.to_string());

        if let Some(first) = host.focusable_elements().into_iter().next() {
            host.focus(&first);
        }
        true
    }

    /// Undoes every side effect of [`open`](Self::open).
    ///
    /// Focus is left where it is; the element focused before opening is not restored.
    pub fn close<H: OverlayHost>(&mut self, host: &mut H) -> bool {
        if !host.has_root() || !self.state.is_open {
            return false;
        }
        host.set_visible(false);
        host.set_aria_hidden(true);
        host.set_scroll_locked(false);
        self.state = OverlayState::default();
        true
    }

    pub fn close_via<H: OverlayHost>(&mut self, host: &mut H, trigger: CloseTrigger) -> bool {
        log::trace!("overlay close requested by {trigger:?}");
        self.close(host)
    }

    pub fn handle_key<H: OverlayHost>(&mut self, host: &mut H, key: Key) -> KeyOutcome {
        if !self.state.is_open {
            return KeyOutcome::PassThrough;
        }
        match key {
            Key::Escape => {
                self.close_via(host, CloseTrigger::Escape);
                KeyOutcome::Closed
            }
            Key::Tab { shift } => self.trap_focus(host, shift),
            Key::Other => KeyOutcome::PassThrough,
        }
    }

    // the set is rebuilt on every press since content changes between openings
    fn trap_focus<H: OverlayHost>(&self, host: &mut H, shift: bool) -> KeyOutcome {
        let focusable = host.focusable_elements();
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return KeyOutcome::PassThrough;
        };
        let active = host.active_element();
        let (from, to) = if shift { (first, last) } else { (last, first) };
        if active.as_ref() == Some(from) {
            let to = to.clone();
            host.focus(&to);
            KeyOutcome::Wrapped
        } else {
            KeyOutcome::PassThrough
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory page: element ids stand in for DOM nodes.
    struct FakePage {
        root: bool,
        content: Option<String>,
        visible: bool,
        aria_hidden: bool,
        scroll_locked: bool,
        focusable: Vec<&'static str>,
        active: Option<&'static str>,
    }

    impl FakePage {
        fn new(focusable: Vec<&'static str>) -> Self {
            Self {
                root: true,
                content: None,
                visible: false,
                aria_hidden: true,
                scroll_locked: false,
                focusable,
                active: Some("page-link"),
            }
        }

        /// What the browser does for a Tab the controller let through.
        fn native_tab(&mut self, shift: bool) {
            let Some(active) = self.active else { return };
            let Some(i) = self.focusable.iter().position(|e| *e == active) else {
                return;
            };
            let next = if shift { i - 1 } else { i + 1 };
            self.active = Some(self.focusable[next]);
        }

        fn press_tab(&mut self, overlay: &mut OverlayController, shift: bool) {
            let outcome = overlay.handle_key(self, Key::Tab { shift });
            if outcome == KeyOutcome::PassThrough {
                self.native_tab(shift);
            }
        }
    }

    impl OverlayHost for FakePage {
        type Element = &'static str;

        fn has_root(&self) -> bool {
            self.root
        }

        fn render_content(&mut self, content_id: &str) {
            self.content = Some(content_id.to_string());
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn set_aria_hidden(&mut self, hidden: bool) {
            self.aria_hidden = hidden;
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.scroll_locked = locked;
        }

        fn focusable_elements(&self) -> Vec<&'static str> {
            self.focusable.clone()
        }

        fn active_element(&self) -> Option<&'static str> {
            self.active
        }

        fn focus(&mut self, element: &&'static str) {
            self.active = Some(*element);
        }
    }

    #[test]
    fn test_open_applies_side_effects() {
        let mut page = FakePage::new(vec!["close", "demo", "repo"]);
        let mut overlay = OverlayController::new();

        assert!(overlay.open(&mut page, "audit-buddy"));
        assert!(overlay.is_open());
        assert_eq!(
            overlay.state().active_content_id.as_deref(),
            Some("audit-buddy")
        );
        assert_eq!(page.content.as_deref(), Some("audit-buddy"));
        assert!(page.visible);
        assert!(!page.aria_hidden);
        assert!(page.scroll_locked);
        assert_eq!(page.active, Some("close"));
    }

    #[test]
    fn test_open_without_root_is_noop() {
        let mut page = FakePage::new(vec!["close"]);
        page.root = false;
        let mut overlay = OverlayController::new();

        assert!(!overlay.open(&mut page, "audit-buddy"));
        assert!(!overlay.is_open());
        assert!(page.content.is_none());
        assert!(!page.scroll_locked);
        assert_eq!(page.active, Some("page-link"));
    }

    #[test]
    fn test_open_then_close_restores_page() {
        for id in ["audit-buddy", "", "<script>alert(1)</script>"] {
            let mut page = FakePage::new(vec!["close", "demo"]);
            let (aria_before, scroll_before) = (page.aria_hidden, page.scroll_locked);
            let mut overlay = OverlayController::new();

            overlay.open(&mut page, id);
            assert!(overlay.close(&mut page));

            assert_eq!(page.aria_hidden, aria_before);
            assert_eq!(page.scroll_locked, scroll_before);
            assert!(!page.visible);
            assert_eq!(*overlay.state(), OverlayState::default());
        }
    }

    #[test]
    fn test_open_while_open_swaps_content() {
        let mut page = FakePage::new(vec!["close", "demo"]);
        let mut overlay = OverlayController::new();

        assert!(overlay.open(&mut page, "a"));
        assert!(overlay.open(&mut page, "b"));

        assert!(overlay.is_open());
        assert_eq!(overlay.state().active_content_id.as_deref(), Some("b"));
        assert_eq!(page.content.as_deref(), Some("b"));
        assert!(page.visible);
        assert!(page.scroll_locked);

        // one close undoes both openings
        assert!(overlay.close(&mut page));
        assert!(!page.scroll_locked);
        assert!(page.aria_hidden);
    }

    #[test]
    fn test_close_keeps_focus_inside_former_overlay() {
        let mut page = FakePage::new(vec!["close", "demo"]);
        let mut overlay = OverlayController::new();
        overlay.open(&mut page, "p");
        overlay.close(&mut page);
        // previous focus is intentionally not restored
        assert_eq!(page.active, Some("close"));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut page = FakePage::new(vec!["close"]);
        let mut overlay = OverlayController::new();
        assert!(!overlay.close(&mut page));
        assert!(page.aria_hidden);
    }

    #[test]
    fn test_all_close_triggers_agree() {
        for trigger in [
            CloseTrigger::CloseButton,
            CloseTrigger::Backdrop,
            CloseTrigger::Escape,
        ] {
            let mut page = FakePage::new(vec!["close"]);
            let mut overlay = OverlayController::new();
            overlay.open(&mut page, "p");
            assert!(overlay.close_via(&mut page, trigger));
            assert!(!overlay.is_open());
            assert!(!page.scroll_locked);
            assert!(page.aria_hidden);
        }
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let mut page = FakePage::new(vec!["close"]);
        let mut overlay = OverlayController::new();
        assert_eq!(
            overlay.handle_key(&mut page, Key::Escape),
            KeyOutcome::PassThrough
        );

        overlay.open(&mut page, "p");
        assert_eq!(overlay.handle_key(&mut page, Key::Escape), KeyOutcome::Closed);
        assert!(!overlay.is_open());
        assert!(!page.visible);
    }

    #[test]
    fn test_tab_wraps_at_edges() {
        let mut page = FakePage::new(vec!["close", "demo", "repo"]);
        let mut overlay = OverlayController::new();
        overlay.open(&mut page, "p");

        let outcome = overlay.handle_key(&mut page, Key::Tab { shift: true });
        assert_eq!(outcome, KeyOutcome::Wrapped);
        assert!(outcome.prevents_default());
        assert_eq!(page.active, Some("repo"));

        let outcome = overlay.handle_key(&mut page, Key::Tab { shift: false });
        assert_eq!(outcome, KeyOutcome::Wrapped);
        assert_eq!(page.active, Some("close"));

        // middle elements are left to the browser
        page.active = Some("demo");
        let outcome = overlay.handle_key(&mut page, Key::Tab { shift: false });
        assert_eq!(outcome, KeyOutcome::PassThrough);
        assert!(!outcome.prevents_default());
        assert_eq!(page.active, Some("demo"));
    }

    #[test]
    fn test_shift_tab_cycle_is_closed() {
        let focusable = vec!["close", "demo", "repo", "case-study"];
        let mut page = FakePage::new(focusable.clone());
        let mut overlay = OverlayController::new();
        overlay.open(&mut page, "p");
        assert_eq!(page.active, Some("close"));

        let mut visited = Vec::new();
        for _ in 0..focusable.len() {
            page.press_tab(&mut overlay, true);
            visited.push(page.active.expect("focus should stay inside"));
        }
        assert_eq!(visited, vec!["case-study", "repo", "demo", "close"]);

        // and forwards
        let mut visited = Vec::new();
        for _ in 0..focusable.len() {
            page.press_tab(&mut overlay, false);
            visited.push(page.active.expect("focus should stay inside"));
        }
        assert_eq!(visited, vec!["demo", "repo", "case-study", "close"]);
    }

    #[test]
    fn test_focus_set_recomputed_between_presses() {
        let mut page = FakePage::new(vec!["close"]);
        let mut overlay = OverlayController::new();
        overlay.open(&mut page, "p");

        page.focusable = vec!["close", "demo"];
        page.active = Some("demo");
        overlay.handle_key(&mut page, Key::Tab { shift: false });
        assert_eq!(page.active, Some("close"));
    }

    #[test]
    fn test_single_focusable_wraps_to_itself() {
        let mut page = FakePage::new(vec!["close"]);
        let mut overlay = OverlayController::new();
        overlay.open(&mut page, "p");

        assert_eq!(
            overlay.handle_key(&mut page, Key::Tab { shift: false }),
            KeyOutcome::Wrapped
        );
        assert_eq!(page.active, Some("close"));
    }

    #[test]
    fn test_no_focusables_passes_through() {
        let mut page = FakePage::new(Vec::new());
        let mut overlay = OverlayController::new();
        overlay.open(&mut page, "p");
        assert_eq!(page.active, Some("page-link"));
        assert_eq!(
            overlay.handle_key(&mut page, Key::Tab { shift: true }),
            KeyOutcome::PassThrough
        );
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("Tab", true), Key::Tab { shift: true });
        assert_eq!(Key::from_dom("Escape", false), Key::Escape);
        assert_eq!(Key::from_dom("a", false), Key::Other);
    }
}
