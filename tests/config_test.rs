//! Integration tests for configuration loading and report rendering

use kernel32_abi::config::{
    validate_config, Config, ConfigError, ConfigLoader, OutputConfig, OutputFormat,
};
use kernel32_abi::inspect::{Group, Report};
use kernel32_abi::AbiError;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> ConfigLoader {
    let path = dir.path().join("kernel32-abi.toml");
    fs::write(&path, contents).unwrap();
    ConfigLoader::new(path)
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let loader = write_config(
        &dir,
        r#"
[report]
layouts = false
groups = ["page_protection", "memory-allocation"]
"#,
    );

    let config = loader.load().unwrap();
    assert!(!config.report.layouts);
    assert!(config.report.constants);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.pretty);
    assert_eq!(config.logging.level, "warn");
    assert!(validate_config(&config).is_ok());

    let report = Report::build(&config.report).unwrap();
    assert!(report.layouts.is_empty());
    assert!(report
        .constants
        .iter()
        .all(|c| matches!(c.group, Group::PageProtection | Group::MemoryAllocation)));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new(dir.path().join("saved.toml"));

    let mut config = Config::default();
    config.output.format = OutputFormat::Toml;
    config.output.pretty = false;
    config.logging.level = "debug".to_string();
    loader.save(&config).unwrap();

    let loaded = loader.load().unwrap();
    assert_eq!(loaded.output.format, OutputFormat::Toml);
    assert!(!loaded.output.pretty);
    assert_eq!(loaded.logging.level, "debug");
}

#[test]
fn test_missing_and_broken_files() {
    let dir = TempDir::new().unwrap();
    let missing = ConfigLoader::new(dir.path().join("absent.toml"));
    assert!(matches!(missing.load(), Err(ConfigError::FileNotFound(_))));
    assert!(missing.load_or_default().report.layouts);

    let broken = write_config(&dir, "[report\nlayouts = ");
    assert!(matches!(broken.load(), Err(ConfigError::TomlParse(_))));
    assert_eq!(broken.load_or_default().logging.level, "warn");
}

#[test]
fn test_invalid_settings_are_rejected() {
    let dir = TempDir::new().unwrap();

    let loader = write_config(&dir, "[logging]\nlevel = \"loud\"\n");
    let config = loader.load().unwrap();
    assert!(matches!(validate_config(&config), Err(ConfigError::Invalid(_))));

    let loader = write_config(&dir, "[report]\ngroups = [\"colors\"]\n");
    let config = loader.load().unwrap();
    assert!(validate_config(&config).is_err());
    assert!(matches!(
        Report::build(&config.report),
        Err(AbiError::UnknownGroup(name)) if name == "colors"
    ));
}

#[test]
fn test_report_renders_both_formats() {
    let config = Config::default();
    let report = Report::build(&config.report).unwrap();

    let json = report
        .render(&OutputConfig {
            format: OutputFormat::Json,
            pretty: false,
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["layouts"][0]["name"], "THREADENTRY32");
    assert_eq!(value["layouts"][0]["size"], 28);
    assert!(value["constants"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["name"] == "KEY_ALL_ACCESS" && c["value"] == 0xF003F));

    let toml_text = report
        .render(&OutputConfig {
            format: OutputFormat::Toml,
            pretty: true,
        })
        .unwrap();
    let parsed: toml::Value = toml::from_str(&toml_text).unwrap();
    assert_eq!(
        parsed["pointer_width"].as_integer(),
        Some(usize::BITS as i64)
    );
    assert_eq!(parsed["layouts"].as_array().unwrap().len(), 6);
}
