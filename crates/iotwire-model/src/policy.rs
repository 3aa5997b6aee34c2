//! Policies, policy versions and their attachment to principals

use chrono::{DateTime, Utc};
use iotwire_macros::Model;

/// A policy name and its ARN
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct Policy {
    pub policy_name: Option<String>,
    pub policy_arn: Option<String>,
}

/// One version of a policy document
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct PolicyVersion {
    pub version_id: Option<String>,
    pub is_default_version: Option<bool>,
    pub create_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreatePolicyRequest {
    pub policy_name: Option<String>,
    /// JSON policy document, carried as an opaque string
    pub policy_document: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreatePolicyResult {
    pub policy_name: Option<String>,
    pub policy_arn: Option<String>,
    pub policy_document: Option<String>,
    pub policy_version_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreatePolicyVersionRequest {
    pub policy_name: Option<String>,
    pub policy_document: Option<String>,
    pub set_as_default: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreatePolicyVersionResult {
    pub policy_arn: Option<String>,
    pub policy_document: Option<String>,
    pub policy_version_id: Option<String>,
    pub is_default_version: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DeletePolicyRequest {
    pub policy_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DeletePolicyVersionRequest {
    pub policy_name: Option<String>,
    pub policy_version_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct GetPolicyRequest {
    pub policy_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct GetPolicyResult {
    pub policy_name: Option<String>,
    pub policy_arn: Option<String>,
    pub policy_document: Option<String>,
    pub default_version_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct GetPolicyVersionRequest {
    pub policy_name: Option<String>,
    pub policy_version_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct GetPolicyVersionResult {
    pub policy_arn: Option<String>,
    pub policy_name: Option<String>,
    pub policy_document: Option<String>,
    pub policy_version_id: Option<String>,
    pub is_default_version: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListPoliciesRequest {
    pub marker: Option<String>,
    pub page_size: Option<i32>,
    pub ascending_order: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListPoliciesResult {
    pub policies: Option<Vec<Policy>>,
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListPolicyVersionsRequest {
    pub policy_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListPolicyVersionsResult {
    pub policy_versions: Option<Vec<PolicyVersion>>,
}

impl ListPolicyVersionsResult {
    /// The version currently marked as default, if any
    pub fn default_version(&self) -> Option<&PolicyVersion> {
        self.policy_versions
            .as_deref()?
            .iter()
            .find(|v| v.is_default_version == Some(true))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListPrincipalPoliciesRequest {
    pub principal: Option<String>,
    pub marker: Option<String>,
    pub page_size: Option<i32>,
    pub ascending_order: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListPrincipalPoliciesResult {
    pub policies: Option<Vec<Policy>>,
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct AttachPrincipalPolicyRequest {
    pub policy_name: Option<String>,
    pub principal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DetachPrincipalPolicyRequest {
    pub policy_name: Option<String>,
    pub principal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct SetDefaultPolicyVersionRequest {
    pub policy_name: Option<String>,
    pub policy_version_id: Option<String>,
}

#[cfg(test)]
#[path = "policy/policy_tests.rs"]
mod policy_tests;
