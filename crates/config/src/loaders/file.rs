//! Flat TOML settings file

use std::collections::BTreeMap;
use std::path::Path;

use crate::core::{ConfigError, ConfigResult, SettingsProvider};

/// Settings read once from a flat TOML document.
///
/// Every top-level key must hold a string:
///
/// ```toml
/// CRONOSZKEVM_ADDRESS = "0xABC"
/// CRONOSZKEVM_PRIVATE_KEY = "..."
/// ```
///
/// Tables, arrays and non-string scalars are rejected at load time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TomlSettings {
    values: BTreeMap<String, String>,
}

impl TomlSettings {
    /// Load settings from a file
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&content, &path.display().to_string())?;
        cronoszkevm_log::debug!(
            path = %path.display(),
            keys = settings.values.len(),
            "loaded settings file"
        );
        Ok(settings)
    }

    /// Parse settings from a TOML string; `origin` names the document in errors
    pub fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| ConfigError::parse(origin, e.to_string()))?;

        let mut values = BTreeMap::new();
        for (key, value) in table {
            match value {
                toml::Value::String(s) => {
                    values.insert(key, s);
                }
                other => {
                    return Err(ConfigError::parse(
                        origin,
                        format!("setting '{key}' must be a string, found {}", other.type_str()),
                    ));
                }
            }
        }

        Ok(Self { values })
    }

    /// Keys present in the document
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl IntoIterator for TomlSettings {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl SettingsProvider for TomlSettings {
    fn get_setting(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }
}

// Values are secrets more often than not.
impl std::fmt::Debug for TomlSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TomlSettings")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_flat_strings() {
        let settings = TomlSettings::parse(
            "CRONOSZKEVM_ADDRESS = \"0xABC\"\nCRONOSZKEVM_PRIVATE_KEY = \"k\"\n",
            "inline",
        )
        .unwrap();

        assert_eq!(
            settings.get_setting("CRONOSZKEVM_ADDRESS").unwrap().as_deref(),
            Some("0xABC")
        );
        assert_eq!(settings.keys().count(), 2);
    }

    #[test]
    fn rejects_non_string_values() {
        let err = TomlSettings::parse("PORT = 8080", "inline").unwrap_err();
        match err {
            ConfigError::Parse { origin, message } => {
                assert_eq!(origin, "inline");
                assert!(message.contains("PORT"), "{message}");
                assert!(message.contains("integer"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_documents() {
        let err = TomlSettings::parse("KEY = ", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn into_iter_yields_sorted_pairs() {
        let settings = TomlSettings::parse("B = \"2\"\nA = \"1\"", "inline").unwrap();
        let pairs: Vec<(String, String)> = settings.into_iter().collect();
        assert_eq!(
            pairs,
            [("A".to_owned(), "1".to_owned()), ("B".to_owned(), "2".to_owned())]
        );
    }

    #[test]
    fn debug_hides_values() {
        let settings = TomlSettings::parse("SECRET = \"hunter2\"", "inline").unwrap();
        let debug = format!("{settings:?}");
        assert!(debug.contains("SECRET"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CRONOSZKEVM_ADDRESS = \"0x1\"").unwrap();

        let settings = TomlSettings::from_path(file.path()).unwrap();
        assert_eq!(
            settings.get_setting("CRONOSZKEVM_ADDRESS").unwrap().as_deref(),
            Some("0x1")
        );
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TomlSettings::from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
