use crate::core::types::{null_as_default, DateBetween, Money, Page, PageInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiateCurrencySwapRequest {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySwap {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    #[serde(rename = "from")]
    #[serde(deserialize_with = "null_as_default")]
    pub from_amount: Money,
    #[serde(rename = "to")]
    #[serde(deserialize_with = "null_as_default")]
    pub to_amount: Money,
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub markup: Money,
    pub status: String,
    #[serde(rename = "fee")]
    #[serde(deserialize_with = "null_as_default")]
    pub fee_amount: Money,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllSwapsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<CurrencySwap>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencySwapFilter {
    pub status: Option<String>,
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    pub date_between: Option<DateBetween>,
    pub page: Option<Page>,
}
