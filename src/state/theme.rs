// Light/dark theme preference, persisted in localStorage under "theme".

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Load the saved preference; falls back to Light when storage is
    /// unavailable or the key is absent.
    pub fn load() -> Theme {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item("theme") {
                    if let Some(theme) = Theme::from_str(&raw) {
                        return theme;
                    }
                }
            }
        }
        Theme::default()
    }

    /// Persist the preference; storage failures are ignored.
    pub fn store(self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                let _ = store.set_item("theme", self.as_str());
            }
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Inline-style color palette derived from the active theme. Components
/// build their style strings from these instead of re-deciding colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page_bg: &'static str,
    pub surface: &'static str,
    pub surface_alt: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                page_bg: "#f9fafb",
                surface: "#ffffff",
                surface_alt: "#f3f4f6",
                border: "#e5e7eb",
                text: "#111827",
                text_muted: "#6b7280",
                accent: "#3b82f6",
            },
            Theme::Dark => Palette {
                page_bg: "#0f172a",
                surface: "#1e293b",
                surface_alt: "#334155",
                border: "#334155",
                text: "#f1f5f9",
                text_muted: "#94a3b8",
                accent: "#3b82f6",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_string_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
