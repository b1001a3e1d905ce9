//! Validated configuration record

use secrecy::{ExposeSecret, SecretString};

/// Validated Cronos zkEVM configuration.
///
/// Only produced by validation, so both values are always non-empty.
/// The private key is held as a [`SecretString`] and never shows up in
/// `Debug` output.
pub struct CronosZkEvmConfig {
    address: String,
    private_key: SecretString,
}

impl CronosZkEvmConfig {
    pub(crate) fn new(address: String, private_key: String) -> Self {
        Self {
            address,
            private_key: SecretString::from(private_key),
        }
    }

    /// The account address, exactly as configured.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The account private key.
    pub fn private_key(&self) -> &SecretString {
        &self.private_key
    }
}

impl Clone for CronosZkEvmConfig {
    fn clone(&self) -> Self {
        Self::new(
            self.address.clone(),
            self.private_key.expose_secret().to_owned(),
        )
    }
}

impl PartialEq for CronosZkEvmConfig {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
            && self.private_key.expose_secret() == other.private_key.expose_secret()
    }
}

impl Eq for CronosZkEvmConfig {}

impl std::fmt::Debug for CronosZkEvmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronosZkEvmConfig")
            .field("address", &self.address)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
