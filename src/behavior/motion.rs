/// The user's system-level animation preference, read once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Self::Reduce
        } else {
            Self::NoPreference
        }
    }

    /// Whether non-essential animation (reveals, hover transforms) may run.
    pub fn allows_animation(self) -> bool {
        matches!(self, Self::NoPreference)
    }
}
