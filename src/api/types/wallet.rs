use crate::core::types::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerWalletRequest {
    pub customer_id: String,
    pub network: String,
    pub asset: String,
}

/// Crypto deposit address assigned to a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerWallet {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    pub wallet_address: String,
    pub asset: String,
    pub network: String,
    #[serde(rename = "type")]
    pub wallet_type: String,
    pub provider: String,
    pub reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedAsset {
    pub name: String,
    pub asset: String,
    pub network: String,
}
