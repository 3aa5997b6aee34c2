//! Lookup of modeled types by name

use crate::actions::*;
use crate::certificate::*;
use crate::endpoint::*;
use crate::logging::*;
use crate::policy::*;
use crate::thing::*;
use crate::topic_rule::*;
use iotwire_json::{Codec, CodecError, CodecResult, JsonCodec, Model, ModelSchema};
use once_cell::sync::OnceCell;
use std::collections::HashMap;

/// Global catalog
static CATALOG: OnceCell<Catalog> = OnceCell::new();

type NormalizeFn = fn(&JsonCodec, &[u8]) -> CodecResult<Option<Vec<u8>>>;

/// A modeled type reachable by name
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    name: &'static str,
    schema: fn() -> &'static ModelSchema,
    normalize: NormalizeFn,
}

impl CatalogEntry {
    /// Entry for the modeled type `T`
    pub fn of<T: Model>() -> Self {
        Self {
            name: T::model_name(),
            schema: T::schema,
            normalize: normalize_as::<T>,
        }
    }

    /// Model name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field layout of the type
    pub fn schema(&self) -> &'static ModelSchema {
        (self.schema)()
    }

    /// Read `data` as this type and write it back out
    ///
    /// The output drops unknown fields, `null` values and anything a container could
    /// not read. Returns `None` when the document is not a JSON object.
    pub fn normalize(&self, codec: &JsonCodec, data: &[u8]) -> CodecResult<Option<Vec<u8>>> {
        (self.normalize)(codec, data)
    }
}

impl std::fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn normalize_as<T: Model>(codec: &JsonCodec, data: &[u8]) -> CodecResult<Option<Vec<u8>>> {
    match codec.unmarshal::<T>(data)? {
        Some(value) => codec.marshal(&value).map(Some),
        None => {
            tracing::warn!(model = T::model_name(), "document is not a JSON object");
            Ok(None)
        }
    }
}

/// Every modeled type of the service, in a fixed order
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<&'static str, usize>,
}

macro_rules! entries {
    ($($ty:ty),* $(,)?) => {
        vec![$(CatalogEntry::of::<$ty>()),*]
    };
}

impl Catalog {
    /// Build a catalog from the given entries
    ///
    /// A later entry with the same name replaces an earlier one.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for entry in entries {
            match index.get(entry.name) {
                Some(&slot) => unique[slot] = entry,
                None => {
                    index.insert(entry.name, unique.len());
                    unique.push(entry);
                }
            }
        }
        Self {
            entries: unique,
            index,
        }
    }

    /// Get the catalog of the IoT service model
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(Catalog::service)
    }

    fn service() -> Self {
        let catalog = Self::new(entries![
            // Shared structures
            AttributePayload,
            ThingAttribute,
            Certificate,
            CertificateDescription,
            KeyPair,
            Policy,
            PolicyVersion,
            LoggingOptionsPayload,
            TopicRulePayload,
            TopicRule,
            TopicRuleListItem,
            Action,
            DynamoDBAction,
            LambdaAction,
            SnsAction,
            SqsAction,
            KinesisAction,
            RepublishAction,
            S3Action,
            FirehoseAction,
            CloudwatchMetricAction,
            CloudwatchAlarmAction,
            ElasticsearchAction,
            // Operations
            AcceptCertificateTransferRequest,
            AttachPrincipalPolicyRequest,
            AttachThingPrincipalRequest,
            AttachThingPrincipalResult,
            CancelCertificateTransferRequest,
            CreateCertificateFromCsrRequest,
            CreateCertificateFromCsrResult,
            CreateKeysAndCertificateRequest,
            CreateKeysAndCertificateResult,
            CreatePolicyRequest,
            CreatePolicyResult,
            CreatePolicyVersionRequest,
            CreatePolicyVersionResult,
            CreateThingRequest,
            CreateThingResult,
            CreateTopicRuleRequest,
            DeleteCertificateRequest,
            DeletePolicyRequest,
            DeletePolicyVersionRequest,
            DeleteThingRequest,
            DeleteThingResult,
            DeleteTopicRuleRequest,
            DescribeCertificateRequest,
            DescribeCertificateResult,
            DescribeEndpointRequest,
            DescribeEndpointResult,
            DescribeThingRequest,
            DescribeThingResult,
            DetachPrincipalPolicyRequest,
            DetachThingPrincipalRequest,
            DetachThingPrincipalResult,
            DisableTopicRuleRequest,
            EnableTopicRuleRequest,
            GetLoggingOptionsRequest,
            GetLoggingOptionsResult,
            GetPolicyRequest,
            GetPolicyResult,
            GetPolicyVersionRequest,
            GetPolicyVersionResult,
            GetTopicRuleRequest,
            GetTopicRuleResult,
            ListCertificatesRequest,
            ListCertificatesResult,
            ListPoliciesRequest,
            ListPoliciesResult,
            ListPolicyVersionsRequest,
            ListPolicyVersionsResult,
            ListPrincipalPoliciesRequest,
            ListPrincipalPoliciesResult,
            ListPrincipalThingsRequest,
            ListPrincipalThingsResult,
            ListThingPrincipalsRequest,
            ListThingPrincipalsResult,
            ListThingsRequest,
            ListThingsResult,
            ListTopicRulesRequest,
            ListTopicRulesResult,
            RejectCertificateTransferRequest,
            ReplaceTopicRuleRequest,
            SetDefaultPolicyVersionRequest,
            SetLoggingOptionsRequest,
            TransferCertificateRequest,
            TransferCertificateResult,
            UpdateCertificateRequest,
            UpdateThingRequest,
            UpdateThingResult,
        ]);
        tracing::debug!(models = catalog.len(), "model catalog initialized");
        catalog
    }

    /// Look up a model by name
    pub fn get(&self, name: &str) -> CodecResult<&CatalogEntry> {
        self.index
            .get(name)
            .map(|&slot| &self.entries[slot])
            .ok_or_else(|| CodecError::UnknownModel(name.to_string()))
    }

    /// Whether a model with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Model names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
