//! Things, their attributes and the principals attached to them

use iotwire_macros::Model;
use std::collections::HashMap;

/// Attributes to set on a thing
///
/// An empty map clears nothing and sets nothing; it is still written as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct AttributePayload {
    pub attributes: Option<HashMap<String, String>>,
}

impl AttributePayload {
    /// Payload holding the given attributes
    pub fn new<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: Some(
                attributes
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

/// A thing and its attributes, as returned by listings
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ThingAttribute {
    pub thing_name: Option<String>,
    pub attributes: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreateThingRequest {
    pub thing_name: Option<String>,
    pub attribute_payload: Option<AttributePayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreateThingResult {
    pub thing_name: Option<String>,
    pub thing_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DeleteThingRequest {
    pub thing_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DeleteThingResult {}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DescribeThingRequest {
    pub thing_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DescribeThingResult {
    pub thing_name: Option<String>,
    /// Client id to use when the thing connects over MQTT
    pub default_client_id: Option<String>,
    pub attributes: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct UpdateThingRequest {
    pub thing_name: Option<String>,
    pub attribute_payload: Option<AttributePayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct UpdateThingResult {}

/// Lists things, optionally filtered by one attribute
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListThingsRequest {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
    pub attribute_name: Option<String>,
    pub attribute_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListThingsResult {
    pub things: Option<Vec<ThingAttribute>>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct AttachThingPrincipalRequest {
    pub thing_name: Option<String>,
    /// Certificate ARN or Cognito identity
    pub principal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct AttachThingPrincipalResult {}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DetachThingPrincipalRequest {
    pub thing_name: Option<String>,
    pub principal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DetachThingPrincipalResult {}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListThingPrincipalsRequest {
    pub thing_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListThingPrincipalsResult {
    pub principals: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListPrincipalThingsRequest {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
    pub principal: Option<String>,
}

/// Names of the things a principal is attached to
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListPrincipalThingsResult {
    pub things: Option<Vec<String>>,
    pub next_token: Option<String>,
}
