use serde::{Deserialize, Serialize};

/// Local storage key holding the visitor's explicit choice.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// A saved choice wins over the system preference.
    pub fn resolve(saved: Option<Theme>, prefers_dark: bool) -> Self {
        saved.unwrap_or(if prefers_dark { Self::Dark } else { Self::Light })
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_choice_wins() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn test_system_preference_fallback() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_toggle_and_storage_format() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let back: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, Theme::Light);
    }
}
