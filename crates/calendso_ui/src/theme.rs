//! Theme resolution and the first-paint gate.
//!
//! A page starts out with a pending theme and only renders its body once the
//! theme is ready, so a dark-mode user never sees a light flash. The document
//! head is rendered either way.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the visitor's system preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Parses a stored preference. Anything but "light" or "dark" means system.
    pub fn from_preference(preference: Option<&str>) -> Self {
        match preference.map(str::trim) {
            Some(p) if p.eq_ignore_ascii_case("light") => ThemeMode::Light,
            Some(p) if p.eq_ignore_ascii_case("dark") => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }

    /// Class for the `<html>` element; tailwind's `dark:` variants key off it.
    pub fn html_class(&self) -> Option<&'static str> {
        match self {
            ThemeMode::Light => Some("light"),
            ThemeMode::Dark => Some("dark"),
            ThemeMode::System => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    mode: ThemeMode,
    ready: bool,
}

impl Theme {
    /// Initial state before the preference has been applied.
    pub fn pending() -> Self {
        Self {
            mode: ThemeMode::System,
            ready: false,
        }
    }

    /// Resolves a stored preference into a ready theme.
    pub fn resolve(preference: Option<&str>) -> Self {
        Self {
            mode: ThemeMode::from_preference(preference),
            ready: true,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::pending()
    }
}
