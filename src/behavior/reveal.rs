use super::motion::MotionPreference;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Pulls the bottom edge of the viewport up so reveals start slightly early.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// browsers occasionally report a ratio just under the threshold that fired the callback
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

/// Something that reports when observed targets cross into the viewport.
///
/// In the browser this wraps an `IntersectionObserver`; tests use a recorder.
pub trait ViewportWatcher {
    type Target;

    fn observe(&mut self, target: &Self::Target);
    fn disconnect(&mut self);
}

/// One visibility notification for one target.
#[derive(Debug, Clone)]
pub struct Intersection<T> {
    pub target: T,
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
struct RevealTarget<T> {
    element: T,
    revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Watching,
    Disabled,
}

pub struct RevealObserver<W: ViewportWatcher> {
    targets: Vec<RevealTarget<W::Target>>,
    watcher: Option<W>,
    options: WatchOptions,
    phase: Phase,
}

impl<W> RevealObserver<W>
where
    W: ViewportWatcher,
    W::Target: PartialEq + Clone,
{
    pub fn new(elements: impl IntoIterator<Item = W::Target>) -> Self {
        let targets = elements
            .into_iter()
            .map(|element| RevealTarget {
                element,
                revealed: false,
            })
            .collect();
        Self {
            targets,
            watcher: None,
            options: WatchOptions::default(),
            phase: Phase::Idle,
        }
    }

    /// Starts watching every target. Returns whether a watcher was created.
    ///
    /// Reduced motion disables the observer for the rest of the session.
    pub fn activate<F>(&mut self, motion: MotionPreference, connect: F) -> bool
    where
        F: FnOnce(&WatchOptions) -> W,
    {
        if self.phase == Phase::Disabled {
            return false;
        }
        if !motion.allows_animation() {
            log::debug!("reduced motion requested, scroll reveal disabled");
            self.phase = Phase::Disabled;
            return false;
        }
        if self.targets.is_empty() {
            return false;
        }
        self.connect(connect);
        true
    }

    /// Throws the current watcher away and builds a fresh one over the same targets.
    pub fn reactivate<F>(&mut self, connect: F) -> bool
    where
        F: FnOnce(&WatchOptions) -> W,
    {
        if self.phase != Phase::Watching {
            return false;
        }
        if let Some(mut old) = self.watcher.take() {
            old.disconnect();
        }
        self.connect(connect);
        true
    }

    fn connect<F>(&mut self, connect: F)
    where
        F: FnOnce(&WatchOptions) -> W,
    {
        let mut watcher = connect(&self.options);
        for target in &self.targets {
            watcher.observe(&target.element);
        }
        self.watcher = Some(watcher);
        self.phase = Phase::Watching;
    }

    /// Applies a batch of visibility notifications and returns the targets
    /// that became revealed because of it.
    pub fn record<I>(&mut self, entries: I) -> Vec<W::Target>
    where
        I: IntoIterator<Item = Intersection<W::Target>>,
    {
        if self.phase != Phase::Watching {
            return Vec::new();
        }
        let threshold = self.options.threshold - RATIO_TOLERANCE;
        let mut newly = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || entry.ratio < threshold {
                continue;
            }
            if let Some(target) = self
                .targets
                .iter_mut()
                .find(|t| t.element == entry.target)
            {
                if !target.revealed {
                    target.revealed = true;
                    newly.push(target.element.clone());
                }
            }
        }
        newly
    }

    #[cfg(test)]
    pub fn is_revealed(&self, element: &W::Target) -> bool {
        self.targets
            .iter()
            .any(|t| &t.element == element && t.revealed)
    }

    #[cfg(test)]
    pub fn is_watching(&self) -> bool {
        self.phase == Phase::Watching
    }

    #[cfg(test)]
    pub fn is_disabled(&self) -> bool {
        self.phase == Phase::Disabled
    }

    pub fn disconnect(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.disconnect();
        }
        if self.phase == Phase::Watching {
            self.phase = Phase::Idle;
        }
    }
}
