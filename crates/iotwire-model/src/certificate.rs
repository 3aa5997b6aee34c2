//! X.509 certificates, key pairs and certificate transfers

use chrono::{DateTime, Utc};
use iotwire_macros::Model;

string_enum! {
    /// Status of a registered certificate
    pub enum CertificateStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Revoked => "REVOKED",
        /// Offered to another account and not yet accepted
        PendingTransfer => "PENDING_TRANSFER",
    }
}

/// Summary of a certificate, as returned by listings
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct Certificate {
    pub certificate_arn: Option<String>,
    pub certificate_id: Option<String>,
    /// One of the [`CertificateStatus`] values
    pub status: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl Certificate {
    /// Typed status, if present and known
    pub fn status(&self) -> Option<CertificateStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Full description of a certificate
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CertificateDescription {
    pub certificate_arn: Option<String>,
    pub certificate_id: Option<String>,
    pub status: Option<String>,
    /// PEM encoded certificate body
    pub certificate_pem: Option<String>,
    /// Account id of the owner
    pub owned_by: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl CertificateDescription {
    /// Typed status, if present and known
    pub fn status(&self) -> Option<CertificateStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Public/private key pair generated by the service
///
/// One of the few service types that use PascalCase keys on the wire.
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct KeyPair {
    #[wire(name = "PublicKey")]
    pub public_key: Option<String>,
    #[wire(name = "PrivateKey")]
    pub private_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct AcceptCertificateTransferRequest {
    pub certificate_id: Option<String>,
    pub set_as_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CancelCertificateTransferRequest {
    pub certificate_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct RejectCertificateTransferRequest {
    pub certificate_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct TransferCertificateRequest {
    pub certificate_id: Option<String>,
    pub target_aws_account: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct TransferCertificateResult {
    pub transferred_certificate_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreateCertificateFromCsrRequest {
    pub certificate_signing_request: Option<String>,
    pub set_as_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreateCertificateFromCsrResult {
    pub certificate_arn: Option<String>,
    pub certificate_id: Option<String>,
    pub certificate_pem: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreateKeysAndCertificateRequest {
    pub set_as_active: Option<bool>,
}

/// New certificate together with its key pair
///
/// The private key is only ever returned by this call.
#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct CreateKeysAndCertificateResult {
    pub certificate_arn: Option<String>,
    pub certificate_id: Option<String>,
    pub certificate_pem: Option<String>,
    pub key_pair: Option<KeyPair>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DeleteCertificateRequest {
    pub certificate_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DescribeCertificateRequest {
    pub certificate_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct DescribeCertificateResult {
    pub certificate_description: Option<CertificateDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListCertificatesRequest {
    pub page_size: Option<i32>,
    pub marker: Option<String>,
    pub ascending_order: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct ListCertificatesResult {
    pub certificates: Option<Vec<Certificate>>,
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Model)]
pub struct UpdateCertificateRequest {
    pub certificate_id: Option<String>,
    /// One of the [`CertificateStatus`] values
    pub new_status: Option<String>,
}

impl UpdateCertificateRequest {
    pub fn new(certificate_id: impl Into<String>, status: CertificateStatus) -> Self {
        Self {
            certificate_id: Some(certificate_id.into()),
            new_status: Some(status.into()),
        }
    }
}

#[cfg(test)]
#[path = "certificate/certificate_tests.rs"]
mod certificate_tests;
