use crate::core::types::{null_as_default, Page, PageInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Request a virtual bank account for a customer.
///
/// Which of the optional identity fields are required depends on the
/// currency; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateBankAccountRequest {
    pub customer_id: String,
    pub currency: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(rename = "document_number", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    pub account_id: String,
    pub account_details: Value, // transfer instructions, shape depends on currency
    #[serde(rename = "reference")]
    pub business_reference: String,
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankCode {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResolveRequest {
    pub bank_code: String,
    pub account_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountOpeningRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    pub status: String,
    pub reason: Option<String>,
    pub currency: String,
    pub reference: String,
    pub opened: bool,
    pub details: Option<Value>,
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllAccountOpeningRequests {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<AccountOpeningRequest>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountOpeningFilter {
    pub customer_id: Option<String>,
    pub status: Option<String>,
    pub currency: Option<String>,
    pub opened: Option<bool>,
    pub page: Option<Page>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_renames_document_number() {
        let request = GenerateBankAccountRequest {
            customer_id: "c-1".to_string(),
            currency: "NGN".to_string(),
            reference: "acct-1".to_string(),
            bvn: Some("22222222222".to_string()),
            number: Some("A1234567".to_string()),
            ..GenerateBankAccountRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["document_number"], "A1234567");
        assert_eq!(json["bvn"], "22222222222");
        assert!(json.get("zip_code").is_none());
        assert!(json.get("number").is_none());
    }
}
