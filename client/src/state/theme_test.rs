use super::*;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory stand-in for `localStorage`. Clones share the same map.
#[derive(Clone, Default)]
struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStorage {
    fn with(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

fn manager(storage: MemoryStorage, system_dark: bool) -> ThemeManager<MemoryStorage> {
    ThemeManager::load(ThemeConfig::default(), storage, system_dark)
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_parse_accepts_known_values() {
    assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
    assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::parse("system"), Some(ThemePreference::System));
    assert_eq!(ThemePreference::parse(" dark\n"), Some(ThemePreference::Dark));
}

#[test]
fn preference_parse_rejects_unknown_values() {
    assert_eq!(ThemePreference::parse(""), None);
    assert_eq!(ThemePreference::parse("Dark"), None);
    assert_eq!(ThemePreference::parse("true"), None);
    assert_eq!(ThemePreference::parse("midnight"), None);
}

#[test]
fn preference_string_form_round_trips() {
    for pref in ThemePreference::ALL {
        assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
        assert_eq!(pref.to_string(), pref.as_str());
    }
}

#[test]
fn preference_next_cycles_through_all_values() {
    assert_eq!(ThemePreference::Light.next(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.next(), ThemePreference::System);
    assert_eq!(ThemePreference::System.next(), ThemePreference::Light);
}

// =============================================================
// EffectiveTheme
// =============================================================

#[test]
fn effective_theme_never_system() {
    for pref in ThemePreference::ALL {
        for dark in [false, true] {
            let theme = EffectiveTheme::resolve(pref, dark);
            assert!(matches!(theme, EffectiveTheme::Light | EffectiveTheme::Dark));
        }
    }
}

#[test]
fn effective_theme_explicit_preference_ignores_os_signal() {
    assert_eq!(EffectiveTheme::resolve(ThemePreference::Light, true), EffectiveTheme::Light);
    assert_eq!(EffectiveTheme::resolve(ThemePreference::Dark, false), EffectiveTheme::Dark);
}

#[test]
fn effective_theme_class_names_are_opposites() {
    assert_eq!(EffectiveTheme::Light.class_name(), "light");
    assert_eq!(EffectiveTheme::Dark.class_name(), "dark");
    assert_eq!(EffectiveTheme::Light.other(), EffectiveTheme::Dark);
    assert_eq!(EffectiveTheme::Dark.other(), EffectiveTheme::Light);
}

// =============================================================
// ThemeManager
// =============================================================

#[test]
fn manager_defaults_to_system_when_storage_empty() {
    let m = manager(MemoryStorage::default(), false);
    assert_eq!(m.preference(), ThemePreference::System);
    assert!(m.follows_system());
}

#[test]
fn manager_set_then_get_returns_value_for_all_preferences() {
    for pref in ThemePreference::ALL {
        let storage = MemoryStorage::default();
        let mut m = manager(storage.clone(), false);
        m.set_preference(pref);
        assert_eq!(m.preference(), pref);
        assert_eq!(storage.get(DEFAULT_STORAGE_KEY).as_deref(), Some(pref.as_str()));
    }
}

#[test]
fn manager_preference_survives_reload_from_storage() {
    let storage = MemoryStorage::default();
    let mut first = manager(storage.clone(), false);
    first.set_preference(ThemePreference::Dark);

    let second = manager(storage, false);
    assert_eq!(second.preference(), ThemePreference::Dark);
}

#[test]
fn manager_unrecognized_stored_value_falls_back_to_default() {
    let m = manager(MemoryStorage::with(DEFAULT_STORAGE_KEY, "solarized"), true);
    assert_eq!(m.preference(), ThemePreference::System);

    let config = ThemeConfig { storage_key: "k".to_owned(), default_preference: ThemePreference::Light };
    let m = ThemeManager::load(config, MemoryStorage::with("k", "true"), true);
    assert_eq!(m.preference(), ThemePreference::Light);
    assert_eq!(m.effective_theme(), EffectiveTheme::Light);
}

#[test]
fn manager_uses_configured_storage_key() {
    let storage = MemoryStorage::with(DEFAULT_STORAGE_KEY, "dark");
    let config = ThemeConfig { storage_key: "other-app".to_owned(), ..ThemeConfig::default() };
    let mut m = ThemeManager::load(config, storage.clone(), false);
    assert_eq!(m.preference(), ThemePreference::System);

    m.set_preference(ThemePreference::Light);
    assert_eq!(storage.get("other-app").as_deref(), Some("light"));
    assert_eq!(storage.get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn manager_set_preference_str_validates_input() {
    let storage = MemoryStorage::default();
    let mut m = manager(storage.clone(), false);

    assert_eq!(m.set_preference_str("dark"), Ok(()));
    assert_eq!(m.preference(), ThemePreference::Dark);

    assert_eq!(m.set_preference_str("sepia"), Err(ThemeError::InvalidPreference("sepia".to_owned())));
    assert_eq!(m.preference(), ThemePreference::Dark);
    assert_eq!(storage.get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn manager_system_preference_tracks_os_signal() {
    let mut m = manager(MemoryStorage::default(), true);
    assert_eq!(m.effective_theme(), EffectiveTheme::Dark);

    assert_eq!(m.set_system_dark(false), EffectiveTheme::Light);
    assert_eq!(m.effective_theme(), EffectiveTheme::Light);
    assert_eq!(m.preference(), ThemePreference::System);
}

#[test]
fn manager_light_preference_ignores_os_signal() {
    let mut m = manager(MemoryStorage::default(), false);
    m.set_preference(ThemePreference::Light);

    m.set_system_dark(true);
    assert_eq!(m.effective_theme(), EffectiveTheme::Light);
    assert!(!m.follows_system());
}

#[test]
fn manager_new_ignores_storage_until_reload() {
    let storage = MemoryStorage::with(DEFAULT_STORAGE_KEY, "dark");
    let mut m = ThemeManager::new(ThemeConfig::default(), storage);
    assert_eq!(m.preference(), ThemePreference::System);
    assert!(!m.system_dark());

    m.reload();
    assert_eq!(m.preference(), ThemePreference::Dark);
}

#[test]
fn manager_reload_picks_up_external_writes() {
    let storage = MemoryStorage::default();
    let mut m = manager(storage.clone(), false);
    storage.save(DEFAULT_STORAGE_KEY, "dark");

    m.reload();
    assert_eq!(m.preference(), ThemePreference::Dark);
}

#[test]
fn theme_error_messages_are_descriptive() {
    assert!(ThemeError::MissingProvider.to_string().contains("ThemeProvider"));
    assert!(ThemeError::InvalidPreference("x".to_owned()).to_string().contains("'x'"));
}
