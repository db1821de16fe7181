use crate::core::types::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An investment portfolio yield offerings are built on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateYieldOfferingProfileRequest {
    pub name: String,
    pub description: String,
    pub apy_rate: f64,
    pub currency: String,
    pub deposit_lock_day: i64,
    pub minimum_deposit_allowed: f64,
    pub maximum_deposit_allowed: f64,
    pub yieldable_after_day: i64,
    pub withdrawal_limit_rate: f64,
    pub portfolio_id: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateYieldOfferingProfileRequest {
    pub yield_offering_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldOfferingProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    pub name: String,
    pub description: String,
    pub apy_rate: f64,
    pub currency: String,
    pub deposit_lock_day: i64,
    pub minimum_deposit_allowed: f64,
    pub maximum_deposit_allowed: f64,
    pub yieldable_after_day: i64,
    pub withdrawal_limit_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub portfolio_id: Uuid,
    pub reference: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
