use crate::core::types::{null_as_default, PageInfo};
use crate::api::types::transaction::Transaction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    #[default]
    Individual,
    Business,
}

/// An API customer of the business
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: String,
    #[serde(rename = "customer_name")]
    pub name: String,
    pub mobile_number: String,
    pub email: String,
    pub channel: String,
    pub reference: String,
    #[serde(rename = "api_yield_offering_ids")]
    #[serde(deserialize_with = "null_as_default")]
    pub yield_offering_ids: Vec<Uuid>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: String,
}

/// Customer with aggregated activity, returned by the lookup by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInfo {
    #[serde(flatten)]
    pub customer: Customer,
    pub deposit_count: i64,
    pub total_deposit: f64,
    pub withdrawal_count: i64,
    pub total_withdrawal: f64,
    pub transfer: f64,
    pub balance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction: Vec<Transaction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub reference: String, // signed
    pub mobile_number: String,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
    pub yield_offering_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub reference: String,
    pub mobile_number: String,
    pub yield_offering_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllCustomersResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<Customer>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}

/// Balance of one customer in one yield offering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerBalance {
    #[serde(deserialize_with = "null_as_default")]
    pub yield_offering_id: Uuid,
    pub name: String,
    pub currency: String,
    #[serde(rename = "balance")]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerBalances {
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    pub total_balance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: Vec<CustomerBalance>,
}
