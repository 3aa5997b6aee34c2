#![allow(non_snake_case)]

use super::*;
use iotwire_json::{Codec, JsonCodec};
use test_case::test_case;

#[test_case(LogLevel::Debug, "DEBUG")]
#[test_case(LogLevel::Info, "INFO")]
#[test_case(LogLevel::Error, "ERROR")]
#[test_case(LogLevel::Warn, "WARN")]
#[test_case(LogLevel::Disabled, "DISABLED")]
fn LogLevel___display___matches_wire_value(level: LogLevel, wire: &str) {
    assert_eq!(level.to_string(), wire);
    assert_eq!(wire.parse::<LogLevel>().unwrap(), level);
}

#[test]
fn SetLoggingOptionsRequest___marshal___nests_payload() {
    let request = SetLoggingOptionsRequest {
        logging_options_payload: Some(LoggingOptionsPayload::new(
            "arn:aws:iam::123456789012:role/iot-logging",
            LogLevel::Warn,
        )),
    };

    let json = JsonCodec::new().marshal_to_string(&request).unwrap();

    assert_eq!(
        json,
        r#"{"loggingOptionsPayload":{"roleArn":"arn:aws:iam::123456789012:role/iot-logging","logLevel":"WARN"}}"#
    );
}

#[test]
fn GetLoggingOptionsRequest___marshal___writes_empty_object() {
    let json = JsonCodec::new()
        .marshal_to_string(&GetLoggingOptionsRequest {})
        .unwrap();

    assert_eq!(json, "{}");
}

#[test]
fn GetLoggingOptionsResult___unmarshal___reads_level() {
    let result: GetLoggingOptionsResult = JsonCodec::new()
        .unmarshal(br#"{"roleArn": "r", "logLevel": "DISABLED"}"#)
        .unwrap()
        .unwrap();

    assert_eq!(result.log_level.as_deref(), Some("DISABLED"));
}
