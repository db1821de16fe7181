use crate::core::types::{
    null_as_default, BankDetails, DateBetween, Money, Page, PageInfo, PersonalDetails,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferDestination {
    #[serde(rename = "type")]
    pub destination_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bank_details: BankDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub personal_details: PersonalDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiateTransferRequest {
    pub customer_id: String,
    pub amount: f64,
    pub currency: String,
    pub destination: TransferDestination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub reason: String,
    pub reference: String,
}

/// Transfer out of the business balance, either to a saved beneficiary or
/// to an inline destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiateTerminalTransferRequest {
    pub amount: f64,
    pub source_currency: String,
    pub destination_currency: String,
    pub use_balance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<TransferDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub destination: Value,
    pub note: Option<String>,
    pub reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub batch_date: Option<DateTime<Utc>>,
    pub status: String,
    pub reference: String,
    pub cancel_reason: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalTransfer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    #[serde(rename = "type")]
    pub transfer_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: Money,
    #[serde(rename = "deposited_amount")]
    #[serde(deserialize_with = "null_as_default")]
    pub deposit: Money,
    #[serde(rename = "transferred_amount")]
    #[serde(deserialize_with = "null_as_default")]
    pub transfer: Money,
    pub source_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fee: Money,
    pub fee_percentage: f64,
    pub fee_flat: f64,
    pub status: String,
    pub compliance_status: String,
    pub beneficiary_details: Value,
    pub note: Option<String>,
    pub reason: String,
    pub reference: Option<String>,
    pub modified: bool,
    pub need_document_upload: bool,
    pub markup_value: f64,
    pub cancel_reason: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_date_updated: bool,
    pub compliance_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllTransfersResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<TerminalTransfer>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferFilter {
    pub status: Option<String>,
    pub currency: Option<String>,
    pub date_between: Option<DateBetween>,
    pub page: Option<Page>,
}
