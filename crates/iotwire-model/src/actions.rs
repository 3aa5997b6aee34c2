//! Actions a topic rule performs when a message matches
//!
//! An [`Action`] holds exactly one populated member in practice; the codec does not
//! enforce that, it writes whichever members are present.

use iotwire_macros::Model;

string_enum! {
    /// Payload format of an SNS notification
    pub enum MessageFormat {
        Raw => "RAW",
        Json => "JSON",
    }
}

string_enum! {
    /// Type of a DynamoDB hash or range key
    pub enum DynamoKeyType {
        String => "STRING",
        Number => "NUMBER",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct Action {
    #[wire(name = "dynamoDB")]
    pub dynamo_db: Option<DynamoDBAction>,
    pub lambda: Option<LambdaAction>,
    pub sns: Option<SnsAction>,
    pub sqs: Option<SqsAction>,
    pub kinesis: Option<KinesisAction>,
    pub republish: Option<RepublishAction>,
    pub s3: Option<S3Action>,
    pub firehose: Option<FirehoseAction>,
    pub cloudwatch_metric: Option<CloudwatchMetricAction>,
    pub cloudwatch_alarm: Option<CloudwatchAlarmAction>,
    pub elasticsearch: Option<ElasticsearchAction>,
}

/// Writes the message to a DynamoDB table
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DynamoDBAction {
    pub table_name: Option<String>,
    pub role_arn: Option<String>,
    pub hash_key_field: Option<String>,
    pub hash_key_value: Option<String>,
    /// One of the [`DynamoKeyType`] values
    pub hash_key_type: Option<String>,
    pub range_key_field: Option<String>,
    pub range_key_value: Option<String>,
    pub range_key_type: Option<String>,
    pub payload_field: Option<String>,
    pub operation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct LambdaAction {
    pub function_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct SnsAction {
    pub target_arn: Option<String>,
    pub role_arn: Option<String>,
    /// One of the [`MessageFormat`] values
    pub message_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct SqsAction {
    pub role_arn: Option<String>,
    pub queue_url: Option<String>,
    pub use_base64: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct KinesisAction {
    pub role_arn: Option<String>,
    pub stream_name: Option<String>,
    pub partition_key: Option<String>,
}

/// Publishes the message again on another topic
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct RepublishAction {
    pub role_arn: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct S3Action {
    pub role_arn: Option<String>,
    pub bucket_name: Option<String>,
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct FirehoseAction {
    pub role_arn: Option<String>,
    pub delivery_stream_name: Option<String>,
}

/// Captures a CloudWatch metric
///
/// Value, unit and timestamp are strings on the wire; they may hold substitution
/// templates evaluated against the message.
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CloudwatchMetricAction {
    pub role_arn: Option<String>,
    pub metric_namespace: Option<String>,
    pub metric_name: Option<String>,
    pub metric_value: Option<String>,
    pub metric_unit: Option<String>,
    pub metric_timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CloudwatchAlarmAction {
    pub role_arn: Option<String>,
    pub alarm_name: Option<String>,
    pub state_reason: Option<String>,
    pub state_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ElasticsearchAction {
    pub role_arn: Option<String>,
    pub endpoint: Option<String>,
    pub index: Option<String>,
    pub r#type: Option<String>,
    pub id: Option<String>,
}
