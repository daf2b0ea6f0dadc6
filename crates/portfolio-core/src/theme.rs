use std::fmt;
use std::str::FromStr;

pub const THEME_STORAGE_KEY: &str = "theme";
/// Class on the root element that enables the dark palette.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct ThemeParseError(pub String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Font Awesome icon shown on the toggle button for this theme.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fa-moon",
            Theme::Light => "fa-sun",
        }
    }

    /// Theme for a stored value. Missing or unrecognised values fall back to dark.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored.map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                log::warn!("[theme] ignoring stored value: {}", e);
                Theme::default()
            }
            None => Theme::default(),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value backing for the persisted theme flag.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    /// Returns false when the value could not be persisted.
    fn save(&mut self, value: &str) -> bool;
}

/// Current theme plus where it is persisted.
pub struct ThemeState<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeState<S> {
    pub fn load(store: S) -> Self {
        let current = Theme::from_stored(store.load().as_deref());
        Self { store, current }
    }

    #[inline]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. The in-memory theme changes even when
    /// the store refuses the write.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if !self.store.save(self.current.as_str()) {
            log::warn!("[theme] could not persist theme={}", self.current);
        }
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
