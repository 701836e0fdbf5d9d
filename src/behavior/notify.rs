use std::time::Duration;

/// Delay before a freshly pushed toast slides in.
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// How long a toast stays on screen.
pub const VISIBLE_FOR: Duration = Duration::from_millis(3000);
/// Length of the slide-out transition before removal.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
            Self::Info => "notification notification-info",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }
}

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted off-screen, waiting to slide in.
    Entering,
    Shown,
    /// Sliding out, removed once the transition ends.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn transform(&self) -> &'static str {
        match self.phase {
            ToastPhase::Shown => "translateX(0)",
            ToastPhase::Entering | ToastPhase::Leaving => "translateX(100%)",
        }
    }
}

/// On-screen notifications, oldest first. Timers live in the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toasts {
    next_id: ToastId,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            notification,
            phase: ToastPhase::Entering,
        });
        id
    }

    pub fn show(&mut self, id: ToastId) {
        self.advance(id, ToastPhase::Entering, ToastPhase::Shown);
    }

    pub fn dismiss(&mut self, id: ToastId) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.phase = ToastPhase::Leaving;
        }
    }

    pub fn remove(&mut self, id: ToastId) {
        self.items.retain(|t| t.id != id);
    }

    fn advance(&mut self, id: ToastId, from: ToastPhase, to: ToastPhase) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id && t.phase == from) {
            toast.phase = to;
        }
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut toasts = Toasts::default();
        let id = toasts.push(Notification::success("sent"));
        assert_eq!(toasts.items()[0].phase, ToastPhase::Entering);
        assert_eq!(toasts.items()[0].transform(), "translateX(100%)");

        toasts.show(id);
        assert_eq!(toasts.items()[0].phase, ToastPhase::Shown);
        assert_eq!(toasts.items()[0].transform(), "translateX(0)");

        toasts.dismiss(id);
        assert_eq!(toasts.items()[0].phase, ToastPhase::Leaving);

        toasts.remove(id);
        assert!(toasts.is_empty());
        assert!(toasts.get(id).is_none());
    }

    #[test]
    fn test_late_show_does_not_resurrect() {
        let mut toasts = Toasts::default();
        let id = toasts.push(Notification::error("oops"));
        toasts.dismiss(id);
        toasts.show(id);
        assert_eq!(toasts.items()[0].phase, ToastPhase::Leaving);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut toasts = Toasts::default();
        let a = toasts.push(Notification::error("a"));
        let b = toasts.push(Notification::error("b"));
        assert_ne!(a, b);
        toasts.remove(a);
        let c = toasts.push(Notification::error("c"));
        assert!(c > b);
        let order: Vec<_> = toasts.items().iter().map(|t| t.id).collect();
        assert_eq!(order, vec![b, c]);
    }

    #[test]
    fn test_kind_colours() {
        assert_eq!(NotificationKind::Success.background(), "#10b981");
        assert_eq!(NotificationKind::Error.background(), "#ef4444");
        assert_eq!(NotificationKind::default().background(), "#3b82f6");
    }
}
