use crate::core::types::{null_as_default, BankDetails, IntermediaryBank, PageInfo, PersonalDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBeneficiaryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_details: Option<PersonalDetails>,
    pub bank_details: BankDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_bank: Option<IntermediaryBank>,
    #[serde(rename = "destination_currency")]
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// A saved transfer recipient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferBeneficiary {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    pub name: String,
    pub reference: String,
    pub details: Value,
    #[serde(rename = "currency")]
    pub destination_currency: String,
    pub compliance_status: String,
    pub nickname: String,
    pub customer_id: Option<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllBeneficiariesResponse {
    pub items: Option<Vec<TransferBeneficiary>>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}
