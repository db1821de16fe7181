use crate::core::types::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeType {
    #[default]
    Percentage,
    Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Withdrawal {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub reference: String,
    pub amount: f64,
    pub channel: String,
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub batch_date: String,
    pub status: String,
    pub withdrawal_amount: Option<f64>,
    pub withdrawal_currency: Option<String>,
    #[serde(rename = "payout_detail")]
    pub withdrawal_detail: Option<Value>, // provider specific
    pub cancel_reason: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub yield_offering_id: Uuid,
}

/// Plain withdrawal from a customer's yield balance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiateWithdrawalRequest {
    pub customer_id: String,
    pub reference: String,
    pub amount: f64,
    pub yield_offering_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDetail {
    pub asset: String,
    pub network: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetail {
    pub bank_code: String,
    pub account_number: String,
}

/// Fiat or crypto withdrawal. Fiat payouts carry `bank_detail`, crypto
/// payouts carry `wallet_detail`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub customer_id: String,
    pub reference: String,
    pub amount: f64,
    pub yield_offering_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_detail: Option<WalletDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_detail: Option<BankDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeWithdrawalRequest {
    pub customer_id: String,
    pub reference: String,
    pub withdrawal_reference: String,
    pub reason: String,
    pub fee_type: FeeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    pub yield_offering_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeWithdrawal {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    pub reference: String,
    pub withdrawal_reference: String,
    pub reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fee_type: FeeType,
    pub amount: f64,
    pub percentage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub yield_offering_id: Uuid,
}
