use crate::core::types::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// KYC state of a customer, including uploaded documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KycRecord {
    pub id: String,
    pub business_id: String,
    pub customer_id: String,
    pub kyc_provider: String,
    pub kyc_type: String,
    pub provider_contact_id: String,
    pub name: String,
    pub sex: String,
    pub marital_status: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub contact_type: String,
    pub status: String,
    pub identity: String,
    pub identity_type: String,
    pub identity_confirmed: bool,
    pub identity_verification_status: String,
    pub identity_document_verified: bool,
    pub proof_of_address_document_verified: bool,
    pub tax_id_number: String,
    pub tax_country: String,
    pub tax_state: String,
    pub tax_id_verified: bool,
    pub tax_verification_status: bool,
    pub aml_details: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub documents: Vec<KycDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KycDocument {
    pub id: String,
    pub business_id: String,
    pub customer_id: String,
    pub customer_kyc_id: String,
    pub doc_type: String,
    pub doc_subtype: String,
    pub description: Value,
    pub status: String,
    pub failure_notes: Value,
    pub extension: String,
    pub label: String,
    pub is_identity: bool,
    pub is_proof_of_address: bool,
    pub provider_payload: Value,
    pub created_at: String,
    pub updated_at: Value,
    pub verified_at: Value,
    pub deleted_at: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCustomerKycRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Hosted verification link for a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyCustomerKycResponse {
    #[serde(rename = "businessID")]
    pub business_id: String,
    pub url: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "kycProvider")]
    pub kyc_provider: String,
}
