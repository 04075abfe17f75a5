//! Settings persistence coordination.
//!
//! Every persisted value is stored as a JSON string under its own key in
//! eframe's storage. Missing or unreadable values fall back to defaults, so
//! a settings format change never prevents the demo from starting.

use crate::state::{Page, ThemeChoice};
use rellipsis::EllipsisProps;
use serde::{Deserialize, Serialize};

pub const PLAYGROUND_KEY: &str = "playground_props";
pub const PAGE_KEY: &str = "current_page";
pub const THEME_KEY: &str = "theme_preference";

/// Everything restored at startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoSettings {
    pub playground: EllipsisProps,
    pub page: Page,
    pub theme: ThemeChoice,
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Restores all demo settings.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface, absent when persistence is off
    pub fn load_settings(storage: Option<&dyn eframe::Storage>) -> DemoSettings {
        DemoSettings {
            playground: Self::load_setting_or(storage, PLAYGROUND_KEY, EllipsisProps::default()),
            page: Self::load_setting_or(storage, PAGE_KEY, Page::default()),
            theme: Self::load_setting_or(storage, THEME_KEY, ThemeChoice::default()),
        }
    }

    /// Loads a setting, falling back to `default` if it is missing or does
    /// not parse.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value used when loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Loads a setting, returning None if it is missing or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring stored setting {key}: {err}");
                None
            }
        }
    }

    /// Saves a setting without flushing; eframe flushes on its own schedule.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(err) => log::warn!("could not store setting {key}: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use eframe::Storage;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_defaults_without_storage() {
        assert_eq!(SettingsCoordinator::load_settings(None), DemoSettings::default());
    }

    #[test]
    fn test_round_trip_settings() {
        let mut storage = MockStorage::new();
        let props = EllipsisProps::html("<i>hi</i>").with_rows(2).with_expand_label("more");
        SettingsCoordinator::save_setting(&mut storage, PLAYGROUND_KEY, &props);
        SettingsCoordinator::save_setting(&mut storage, PAGE_KEY, &Page::Report);
        SettingsCoordinator::save_setting(&mut storage, THEME_KEY, &ThemeChoice::Light);

        let settings = SettingsCoordinator::load_settings(Some(&storage));
        assert_eq!(settings.playground, props);
        assert_eq!(settings.page, Page::Report);
        assert_eq!(settings.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string(PAGE_KEY, "\"Nowhere\"".to_string());
        storage.set_string(THEME_KEY, "not json".to_string());

        let settings = SettingsCoordinator::load_settings(Some(&storage));
        assert_eq!(settings.page, Page::Home);
        assert_eq!(settings.theme, ThemeChoice::Dark);
        let missing: Option<u32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(missing, None);
    }
}
