//! Environment-driven configuration

use super::Config;

impl Config {
    /// Create configuration from environment variables
    ///
    /// - `CRONOSZKEVM_LOG`, then `RUST_LOG`: filter directive
    /// - `CRONOSZKEVM_LOG_FORMAT`: `compact`, `pretty` or `json`
    /// - `NO_COLOR`: disables ANSI colors when set
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading through `lookup`.
    ///
    /// An unknown format name keeps the default format.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("CRONOSZKEVM_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("CRONOSZKEVM_LOG_FORMAT")
            && let Ok(format) = format.parse()
        {
            config.format = format;
        }

        if lookup("NO_COLOR").is_some() {
            config.ansi = false;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Format;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn crate_variable_beats_rust_log() {
        let config = Config::from_lookup(lookup(&[
            ("CRONOSZKEVM_LOG", "debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn rust_log_is_fallback() {
        let config = Config::from_lookup(lookup(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn format_and_no_color() {
        let config = Config::from_lookup(lookup(&[
            ("CRONOSZKEVM_LOG_FORMAT", "json"),
            ("NO_COLOR", "1"),
        ]));
        assert_eq!(config.format, Format::Json);
        assert!(!config.ansi);
    }

    #[test]
    fn unknown_format_keeps_default() {
        let config = Config::from_lookup(lookup(&[("CRONOSZKEVM_LOG_FORMAT", "xml")]));
        assert_eq!(config.format, Format::Compact);
    }
}
