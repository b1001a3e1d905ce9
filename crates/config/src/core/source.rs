//! Configuration source definitions

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSource {
    /// The host runtime's settings provider
    Settings,

    /// Process environment variables
    Env,
}

impl ConfigSource {
    /// Get the source name for display
    pub fn name(&self) -> &'static str {
        match self {
            ConfigSource::Settings => "settings",
            ConfigSource::Env => "environment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(ConfigSource::Settings.name(), "settings");
        assert_eq!(ConfigSource::Env.name(), "environment");
    }
}
