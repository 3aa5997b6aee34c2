//! Account-specific data plane endpoint

use iotwire_macros::Model;

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DescribeEndpointRequest {}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DescribeEndpointResult {
    /// Host name devices connect to, e.g. `abc123.iot.us-east-1.amazonaws.com`
    pub endpoint_address: Option<String>,
}
