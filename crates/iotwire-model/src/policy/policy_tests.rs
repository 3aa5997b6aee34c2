#![allow(non_snake_case)]

use super::*;
use iotwire_json::{Codec, JsonCodec};

const POLICY_DOCUMENT: &str =
    r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Action":"iot:*","Resource":"*"}]}"#;

#[test]
fn CreatePolicyRequest___marshal___keeps_document_as_string() {
    let request = CreatePolicyRequest {
        policy_name: Some("AllowAll".to_string()),
        policy_document: Some(POLICY_DOCUMENT.to_string()),
    };

    let value = JsonCodec::new().to_value(&request).unwrap();

    assert_eq!(value["policyName"], "AllowAll");
    assert_eq!(value["policyDocument"], POLICY_DOCUMENT);
}

#[test]
fn GetPolicyResult___unmarshal___reads_fields() {
    let body = br#"{
        "policyName": "AllowAll",
        "policyArn": "arn:aws:iot:us-east-1:123456789012:policy/AllowAll",
        "policyDocument": "{}",
        "defaultVersionId": "3"
    }"#;

    let result: GetPolicyResult = JsonCodec::new().unmarshal(body).unwrap().unwrap();

    assert_eq!(result.default_version_id.as_deref(), Some("3"));
    assert_eq!(result.policy_document.as_deref(), Some("{}"));
}

#[test]
fn ListPolicyVersionsResult___default_version___finds_flagged_version() {
    let body = br#"{"policyVersions": [
        {"versionId": "1", "isDefaultVersion": false, "createDate": 1446049600},
        {"versionId": "2", "isDefaultVersion": true, "createDate": 1446053200.5}
    ]}"#;

    let result: ListPolicyVersionsResult = JsonCodec::new().unmarshal(body).unwrap().unwrap();

    let default = result.default_version().unwrap();
    assert_eq!(default.version_id.as_deref(), Some("2"));
    assert_eq!(default.create_date.unwrap().timestamp_millis(), 1_446_053_200_500);
}

#[test]
fn ListPolicyVersionsResult___default_version___none_without_versions() {
    assert!(ListPolicyVersionsResult::default().default_version().is_none());
}

#[test]
fn ListPrincipalPoliciesResult___unmarshal___skips_null_entries() {
    let body = br#"{"policies": [null, {"policyName": "p1"}], "nextMarker": null}"#;

    let result: ListPrincipalPoliciesResult = JsonCodec::new().unmarshal(body).unwrap().unwrap();

    assert_eq!(
        result.policies,
        Some(vec![Policy {
            policy_name: Some("p1".to_string()),
            policy_arn: None,
        }])
    );
    assert_eq!(result.next_marker, None);
}

#[test]
fn ListPoliciesRequest___marshal___writes_paging_fields() {
    let request = ListPoliciesRequest {
        marker: Some("m-1".to_string()),
        page_size: Some(50),
        ascending_order: Some(true),
    };

    let json = JsonCodec::new().marshal_to_string(&request).unwrap();

    assert_eq!(json, r#"{"marker":"m-1","pageSize":50,"ascendingOrder":true}"#);
}

#[test]
fn CreatePolicyVersionResult___roundtrip___preserves_fields() {
    let result = CreatePolicyVersionResult {
        policy_arn: Some("arn:aws:iot:us-east-1:123456789012:policy/AllowAll".to_string()),
        policy_document: Some(POLICY_DOCUMENT.to_string()),
        policy_version_id: Some("4".to_string()),
        is_default_version: Some(true),
    };

    let codec = JsonCodec::new();
    let bytes = codec.marshal(&result).unwrap();
    let decoded: CreatePolicyVersionResult = codec.unmarshal(&bytes).unwrap().unwrap();

    assert_eq!(decoded, result);
}

#[test]
fn SetDefaultPolicyVersionRequest___wrong_typed_version___is_error() {
    let result = JsonCodec::new()
        .unmarshal::<SetDefaultPolicyVersionRequest>(br#"{"policyVersionId": 3}"#);

    assert!(result.is_err());
}
