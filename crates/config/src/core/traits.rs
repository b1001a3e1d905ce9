//! Core traits for settings lookup

use std::sync::Arc;

use super::ConfigResult;

/// Host capability for looking up a named setting.
///
/// `Ok(None)` means the setting is not configured. `Err` is reserved for a
/// provider that could not answer at all (for example a remote store that
/// is unreachable); callers surface it unchanged.
pub trait SettingsProvider: Send + Sync {
    /// Look up `key`.
    fn get_setting(&self, key: &str) -> ConfigResult<Option<String>>;
}

/// Key-value view of the process environment.
///
/// Injected instead of reading `std::env` directly so callers can pin the
/// environment in tests.
pub trait EnvLookup: Send + Sync {
    /// Read the variable named `key`.
    fn var(&self, key: &str) -> ConfigResult<Option<String>>;
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for &T {
    fn get_setting(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).get_setting(key)
    }
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for Box<T> {
    fn get_setting(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).get_setting(key)
    }
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for Arc<T> {
    fn get_setting(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).get_setting(key)
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).var(key)
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for Box<T> {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).var(key)
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for Arc<T> {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        (**self).var(key)
    }
}
