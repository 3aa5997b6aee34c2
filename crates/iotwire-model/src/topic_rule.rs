//! Topic rules: SQL filters over MQTT topics with a list of actions

use crate::actions::Action;
use chrono::{DateTime, Utc};
use iotwire_macros::Model;

/// Rule definition sent when creating or replacing a rule
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct TopicRulePayload {
    /// SQL statement selecting the messages the rule applies to
    pub sql: Option<String>,
    pub description: Option<String>,
    pub actions: Option<Vec<Action>>,
    pub rule_disabled: Option<bool>,
}

/// Rule definition as stored by the service
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct TopicRule {
    pub rule_name: Option<String>,
    pub sql: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub actions: Option<Vec<Action>>,
    pub rule_disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct TopicRuleListItem {
    pub rule_arn: Option<String>,
    pub rule_name: Option<String>,
    pub topic_pattern: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub rule_disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreateTopicRuleRequest {
    pub rule_name: Option<String>,
    pub topic_rule_payload: Option<TopicRulePayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ReplaceTopicRuleRequest {
    pub rule_name: Option<String>,
    pub topic_rule_payload: Option<TopicRulePayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DeleteTopicRuleRequest {
    pub rule_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DisableTopicRuleRequest {
    pub rule_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct EnableTopicRuleRequest {
    pub rule_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct GetTopicRuleRequest {
    pub rule_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct GetTopicRuleResult {
    pub rule_arn: Option<String>,
    pub rule: Option<TopicRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListTopicRulesRequest {
    /// Only rules whose topic pattern matches this topic
    pub topic: Option<String>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub rule_disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListTopicRulesResult {
    pub rules: Option<Vec<TopicRuleListItem>>,
    pub next_token: Option<String>,
}
