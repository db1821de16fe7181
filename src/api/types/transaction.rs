use crate::core::types::{null_as_default, BankDetails, IntermediaryBank, PageInfo, PersonalDetails};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a transaction's funds went
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Destination {
    #[serde(deserialize_with = "null_as_default")]
    pub bank_details: BankDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub personal_details: PersonalDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub intermediary_bank: IntermediaryBank,
}

// Transaction records use camelCase keys, unlike the rest of the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "businessID")]
    pub business_id: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    #[serde(rename = "yieldOfferingID")]
    pub yield_offering_id: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: f64,
    pub currency: String,
    pub reference: String,
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub destination: Destination,
    pub completed_at: String,
    pub created_at: String,
    pub batch_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionItems {
    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllTransactionsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub items: TransactionItems,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}

/// Filters for the transaction listing. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub customer_id: Option<Uuid>,
    pub yield_offering_id: Option<Uuid>,
    pub reference: Option<String>,
    pub batch_date: Option<String>,
    pub size: Option<u32>,
    pub page: Option<u32>,
}
