#![allow(non_snake_case)]

use super::*;

#[test]
fn ConfigError___invalid_log_level___displays_correctly() {
    let err = ConfigError::InvalidLogLevel("loud".into());

    let display = err.to_string();

    assert_eq!(display, "invalid log level: loud");
}

#[test]
fn ConfigError___from_serde_error___converts_to_json_variant() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: ConfigError = json_err.into();

    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn ConfigError___from_toml_error___converts_to_toml_variant() {
    let toml_err = toml::from_str::<toml::Table>("pretty = ").unwrap_err();

    let err: ConfigError = toml_err.into();

    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn ConfigError___io___includes_path_in_message() {
    let err = ConfigError::Io {
        path: "/etc/iotwire.toml".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };

    let display = err.to_string();

    assert!(display.contains("/etc/iotwire.toml"));
    assert!(display.contains("missing"));
}
