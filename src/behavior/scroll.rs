/// Page sections in navigation order: `(element id, nav label)`.
pub const SECTIONS: [(&str, &str); 6] = [
    ("hero", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

/// Height of the fixed nav bar; in-page jumps land this far above a section.
pub const NAV_OFFSET: f64 = 80.0;
/// Viewport line a section must span to count as the one being read.
pub const ACTIVE_MARKER: f64 = 100.0;
/// Past this scroll offset the nav switches to its compact style.
pub const SCROLLED_AFTER: f64 = 50.0;

pub const NAV_THROTTLE_MS: f64 = 100.0;
pub const PROGRESS_THROTTLE_MS: f64 = 16.0;
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;

/// How far the reader is through the page, in percent.
///
/// A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Target scroll position for jumping to a section at `section_top`.
pub fn section_scroll_target(section_top: f64) -> f64 {
    (section_top - NAV_OFFSET).max(0.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// A section's vertical extent relative to the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Tracks which section the nav should mark as current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHighlighter {
    active: String,
}

impl Default for NavHighlighter {
    fn default() -> Self {
        Self {
            active: SECTIONS[0].0.to_string(),
        }
    }
}

impl NavHighlighter {
    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// Picks the first section spanning the marker line. Keeps the current one
    /// when nothing does (e.g. in a gap between sections). Returns whether it changed.
    pub fn update(&mut self, sections: &[SectionBounds]) -> bool {
        let Some(current) = sections
            .iter()
            .find(|s| s.top <= ACTIVE_MARKER && s.bottom >= ACTIVE_MARKER)
        else {
            return false;
        };
        if current.id == self.active {
            return false;
        }
        self.active = current.id.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: &str, top: f64, bottom: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            bottom,
        }
    }

    #[test]
    fn test_progress_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // overscroll bounce
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-20.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_unscrollable_page() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_scroll_target_accounts_for_nav() {
        assert_eq!(section_scroll_target(1000.0), 920.0);
        assert_eq!(section_scroll_target(40.0), 0.0);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn test_highlighter_tracks_marker_line() {
        let mut nav = NavHighlighter::default();
        assert_eq!(nav.active(), "hero");

        let changed = nav.update(&[
            bounds("hero", -900.0, -100.0),
            bounds("about", -100.0, 600.0),
            bounds("projects", 600.0, 2000.0),
        ]);
        assert!(changed);
        assert!(nav.is_active("about"));

        // same section again is not a change
        assert!(!nav.update(&[bounds("about", 0.0, 700.0)]));
    }

    #[test]
    fn test_highlighter_keeps_previous_in_gaps() {
        let mut nav = NavHighlighter::default();
        nav.update(&[bounds("skills", 0.0, 500.0)]);
        assert!(!nav.update(&[bounds("skills", -600.0, 50.0), bounds("experience", 150.0, 900.0)]));
        assert_eq!(nav.active(), "skills");
    }

    #[test]
    fn test_first_matching_section_wins() {
        let mut nav = NavHighlighter::default();
        nav.update(&[bounds("about", 0.0, 100.0), bounds("projects", 100.0, 900.0)]);
        assert_eq!(nav.active(), "about");
    }
}
