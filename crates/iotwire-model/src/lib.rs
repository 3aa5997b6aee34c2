//! iotwire-model - IoT control plane data model
//!
//! This crate provides:
//! - Data structures shared across operations ([`Certificate`], [`Policy`], [`TopicRule`], ...)
//! - One request type per operation and one result type per operation that returns data
//! - Known values of string enumerations ([`CertificateStatus`], [`LogLevel`], ...)
//! - [`Catalog`] - lookup of every modeled type by name
//!
//! Every type derives [`Model`](iotwire_json::Model), so any of them can be handed to a
//! [`JsonCodec`](iotwire_json::JsonCodec). Every field is optional: a request field
//! the transport places in the URI path or query string is still modeled here.

#[macro_use]
mod macros;

pub mod actions;
pub mod catalog;
pub mod certificate;
pub mod endpoint;
mod error;
pub mod logging;
pub mod policy;
pub mod thing;
pub mod topic_rule;

pub use actions::{
    Action, CloudwatchAlarmAction, CloudwatchMetricAction, DynamoDBAction, DynamoKeyType,
    ElasticsearchAction, FirehoseAction, KinesisAction, LambdaAction, MessageFormat,
    RepublishAction, S3Action, SnsAction, SqsAction,
};
pub use catalog::{Catalog, CatalogEntry};
pub use certificate::{Certificate, CertificateDescription, CertificateStatus, KeyPair};
pub use error::UnknownValueError;
pub use logging::{LogLevel, LoggingOptionsPayload};
pub use policy::{Policy, PolicyVersion};
pub use thing::{AttributePayload, ThingAttribute};
pub use topic_rule::{TopicRule, TopicRuleListItem, TopicRulePayload};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::actions::*;
    pub use crate::catalog::{Catalog, CatalogEntry};
    pub use crate::certificate::*;
    pub use crate::endpoint::*;
    pub use crate::logging::*;
    pub use crate::policy::*;
    pub use crate::thing::*;
    pub use crate::topic_rule::*;
}
