use crate::core::types::{null_as_default, PageInfo};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Identity document attached to a card application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdentity {
    #[serde(rename = "type")]
    pub id_type: String,
    pub value: String,
    pub country: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerCardRequest {
    pub customer_id: String,
    pub card_type: String,
    pub id: CardIdentity,
    pub reference: String,
    pub preferred_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub id_number: String,
    pub state_region: String,
    pub postal_code: String,
    pub birth_date: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeCardRequest {
    pub card_id: String,
    pub customer_id: String,
    pub freeze_card: String,
    pub freeze_reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingAddress {
    pub city: String,
    pub address: String,
    pub country: String,
    pub postal_code: String,
    pub state_region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    pub card_name: String,
    pub last_four_digits: String,
    pub first_six_digits: String,
    pub expiry_date: String,
    pub frozen: bool,
    pub issuer_name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub billing_address: BillingAddress,
    pub issued_at: Value, // provider format varies
    pub created_at: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllCardsResponse {
    pub items: Option<Vec<Card>>,
    #[serde(deserialize_with = "null_as_default")]
    pub page: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundCustomerCardRequest {
    pub card_id: String,
    pub customer_id: String,
    pub transfer_amount: f64,
    pub transfer_narration: String,
    pub transaction_flow: String,
}

/// Full card secrets. Handle with care.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultedCardDetails {
    pub full_pan: String,
    pub cvv: String,
    pub expiry_date: String,
    pub name_on_card: String,
    pub issuer: String,
}

impl std::fmt::Debug for VaultedCardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultedCardDetails")
            .field("full_pan", &"[REDACTED]")
            .field("cvv", &"[REDACTED]")
            .field("expiry_date", &self.expiry_date)
            .field("name_on_card", &self.name_on_card)
            .field("issuer", &self.issuer)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPaymentSessionRequest {
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub reference: String,
    pub failure_url: String,
    pub success_url: String,
    pub display_name: String,
    pub country: String, // ISO 3166 alpha-2
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerPaymentSessionResponse {
    pub reference: String,
    pub customer_id: String,
    pub session_id: String,
    pub session_secret: String,
    pub session_token: String,
}
