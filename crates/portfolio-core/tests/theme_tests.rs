// Host-side tests for theme resolution and persistence.

use portfolio_core::*;

#[derive(Default)]
struct MemoryStore {
    value: Option<String>,
    writes: usize,
    read_only: bool,
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> bool {
        if self.read_only {
            return false;
        }
        self.value = Some(value.to_string());
        self.writes += 1;
        true
    }
}

fn store_with(value: &str) -> MemoryStore {
    MemoryStore {
        value: Some(value.to_string()),
        ..MemoryStore::default()
    }
}

#[test]
fn missing_value_defaults_to_dark() {
    let state = ThemeState::load(MemoryStore::default());
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(state.store().writes, 0);
}

#[test]
fn stored_light_is_restored() {
    let state = ThemeState::load(store_with("light"));
    assert_eq!(state.current(), Theme::Light);
}

#[test]
fn unknown_stored_value_falls_back_to_dark() {
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(
        "Light".parse::<Theme>(),
        Err(ThemeParseError("Light".to_string()))
    );
}

#[test]
fn toggle_flips_and_persists() {
    let mut state = ThemeState::load(MemoryStore::default());
    assert_eq!(state.toggle(), Theme::Light);
    assert_eq!(state.store().value.as_deref(), Some("light"));
    assert_eq!(state.toggle(), Theme::Dark);
    assert_eq!(state.store().value.as_deref(), Some("dark"));
    assert_eq!(state.store().writes, 2);
}

#[test]
fn toggle_still_flips_when_store_refuses_write() {
    let mut state = ThemeState::load(MemoryStore {
        read_only: true,
        ..store_with("light")
    });
    assert_eq!(state.toggle(), Theme::Dark);
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(state.store().value.as_deref(), Some("light"));
}

#[test]
fn icon_and_storage_strings() {
    assert_eq!(Theme::Dark.icon_class(), "fa-moon");
    assert_eq!(Theme::Light.icon_class(), "fa-sun");
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(THEME_STORAGE_KEY, "theme");
}
