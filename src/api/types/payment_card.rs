use crate::core::types::{null_as_default, DateBetween, Page, PageInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentCardType {
    Debit,
    Prepaid,
    Credit,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Start linking a customer's external card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiateCardRequest {
    pub customer_id: Uuid,
    pub reference: String,
    pub date_of_birth: String, // DD-MMM-YYYY, e.g. 17-JAN-1985
    pub ssn: String,           // last four digits
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub ip_address: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteCardRequest {
    pub customer_id: Uuid,
    pub auth_code: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLinkToAddCardRequest {
    pub customer_id: Uuid,
    pub redirect_uri: String,
    pub phone: Option<String>,
    pub direct_debit: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebitPaymentCardRequest {
    pub customer_id: Uuid,
    pub card_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCard {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub card_brand: String,
    pub first_six_digits: String,
    pub last_four_digits: String,
    pub expiry_date: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub card_type: PaymentCardType,
    pub issuer_name: String,
    pub status: String,
    pub billing_address: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllPaymentCardsResponse {
    pub items: Option<Vec<PaymentCard>>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentCardFilter {
    pub status: Option<String>,
    pub search: Option<String>,
    pub date_between: Option<DateBetween>,
    pub page: Option<Page>,
}
