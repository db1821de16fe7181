use crate::core::types::{null_as_default, AccountDetails, DateBetween, Money, Page, PageInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutType {
    #[default]
    Single,
    Multiple,
}

/// One recipient row of a bulk payout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub bulk_payout_id: Uuid,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: AccountDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: Money,
    pub status: String,
    pub lookup_info: String,
    pub remarks: String,
    pub completed_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Limits and fees applied to bulk payouts in one currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkPayoutConfig {
    pub provider: String,
    pub min_amount_per_payout: f64,
    pub min_count_of_payout: i64,
    pub max_amount_per_payout: f64,
    pub max_count_of_payout: i64,
    pub do_name_lookup: bool,
    pub name_percentage_match: i64,
    pub fee_percentage: f64,
    pub fee_flat: f64,
    pub fee_cap: f64,
    pub max_payout_per_day_per_person: i64,
    pub allow_recurring: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    pub status: String,
    pub count: i64,
    pub currency: String,
    pub total_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fee: Money,
    pub remarks: String,
    pub cancel_reason: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// A payout with its recipient rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub items: PayoutDetails,
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: Vec<PayoutAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllPayoutsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<PayoutDetails>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelPayoutRequest {
    #[serde(rename = "payout_id")]
    pub bulk_payout_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkPayoutRecipientAccount {
    pub amount: f64,
    pub destination: AccountDetails,
    pub remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiateBulkPayoutRequest {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<BulkPayoutRecipientAccount>,
    pub beneficiary_type: PayoutType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutFilter {
    pub status: Option<String>,
    pub currency: Option<String>,
    pub date_between: Option<DateBetween>,
    pub page: Option<Page>,
}
