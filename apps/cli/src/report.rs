//! Check report rendering

use std::io::Write;

use clap::ValueEnum;
use cronoszkevm_plugin::{CronosZkEvmConfig, CronosZkEvmConfigError};
use serde::Serialize;

const REDACTED: &str = "[REDACTED]";

/// How `check` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document
    Json,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Report<'a> {
    Valid {
        address: &'a str,
        private_key: &'static str,
    },
    Invalid {
        errors: Vec<FieldFailure<'a>>,
    },
}

#[derive(Serialize)]
struct FieldFailure<'a> {
    field: Option<&'a str>,
    code: &'a str,
    message: &'a str,
}

pub fn write_valid(
    out: &mut impl Write,
    format: OutputFormat,
    config: &CronosZkEvmConfig,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Cronos zkEVM configuration is valid")?;
            writeln!(out, "  address:     {}", config.address())?;
            writeln!(out, "  private key: {REDACTED}")?;
        }
        OutputFormat::Json => {
            let report = Report::Valid {
                address: config.address(),
                private_key: REDACTED,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_invalid(
    out: &mut impl Write,
    format: OutputFormat,
    err: &CronosZkEvmConfigError,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{err}")?,
        OutputFormat::Json => {
            let errors = err
                .validation_errors()
                .map(|errors| {
                    errors
                        .errors()
                        .iter()
                        .map(|e| FieldFailure {
                            field: e.field.as_deref(),
                            code: &e.code,
                            message: &e.message,
                        })
                        .collect()
                })
                .unwrap_or_default();
            serde_json::to_writer_pretty(&mut *out, &Report::Invalid { errors })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cronoszkevm_config::{MapEnv, MapSettings};
    use cronoszkevm_plugin::validate_cronos_zkevm_config;
    use pretty_assertions::assert_eq;

    fn render(write: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn valid_config() -> CronosZkEvmConfig {
        let settings = MapSettings::new()
            .with("CRONOSZKEVM_ADDRESS", "0xABC")
            .with("CRONOSZKEVM_PRIVATE_KEY", "top-secret");
        validate_cronos_zkevm_config(&settings, &MapEnv::new()).unwrap()
    }

    #[test]
    fn text_valid_report_redacts_key() {
        let config = valid_config();
        let text = render(|out| write_valid(out, OutputFormat::Text, &config));

        assert!(text.contains("0xABC"));
        assert!(text.contains(REDACTED));
        assert!(!text.contains("top-secret"));
    }

    #[test]
    fn json_valid_report_shape() {
        let config = valid_config();
        let json = render(|out| write_valid(out, OutputFormat::Json, &config));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "status": "valid",
                "address": "0xABC",
                "private_key": "[REDACTED]",
            })
        );
    }

    #[test]
    fn json_invalid_report_lists_fields_in_order() {
        let err = validate_cronos_zkevm_config(&MapSettings::new(), &MapEnv::new()).unwrap_err();
        let json = render(|out| write_invalid(out, OutputFormat::Json, &err));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "invalid");
        assert_eq!(value["errors"][0]["field"], "CRONOSZKEVM_ADDRESS");
        assert_eq!(value["errors"][0]["code"], "required");
        assert_eq!(value["errors"][1]["field"], "CRONOSZKEVM_PRIVATE_KEY");
    }

    #[test]
    fn text_invalid_report_is_error_display() {
        let err = validate_cronos_zkevm_config(&MapSettings::new(), &MapEnv::new()).unwrap_err();
        let text = render(|out| write_invalid(out, OutputFormat::Text, &err));

        assert_eq!(text, format!("{err}\n"));
    }
}
