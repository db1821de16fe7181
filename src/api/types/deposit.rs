use crate::core::types::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deposit {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub business_id: Uuid,
    pub name: String,
    pub email: String,
    pub reference: String,
    pub currency: String,
    pub amount: f64,
    #[serde(rename = "deposited_amount")]
    pub amount_deposited: f64,
    pub deposited_currency: String,
    pub channel: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    pub settled_at: Option<DateTime<Utc>>,
    pub balance_before: f64,
    pub balance_after: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub deposit_before_id: Uuid,
    pub status: String,
    pub cancel_reason: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub yield_offering_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiateDepositRequest {
    pub customer_id: String,
    pub reference: String,
    pub amount: f64,
    pub yield_offering_id: String,
}

/// Deposits of one batch date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositBatch {
    #[serde(deserialize_with = "null_as_default")]
    pub deposits: Vec<Deposit>,
    pub total_amount: f64,
}

/// Deposits grouped by batch date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositBatchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub deposits: HashMap<String, DepositBatch>,
    pub total_amount: f64,
}

/// How to find a single deposit. Exactly one key is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositLookup {
    Id(String),
    Reference(String),
}

impl DepositLookup {
    pub(crate) fn query_pair(&self) -> (&'static str, &str) {
        match self {
            Self::Id(id) => ("id", id.as_str()),
            Self::Reference(reference) => ("reference", reference.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundTransferAction {
    #[default]
    Credit,
    Debit,
}

/// Move funds between the business and a customer balance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundTransferRequest {
    pub customer_id: String,
    pub reference: String,
    pub amount: f64,
    pub action: FundTransferAction,
    pub yield_offering_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferParty {
    pub customer_id: String,
    pub yield_offering_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntraTransferRequest {
    pub reference: String,
    pub amount: f64,
    pub sender: TransferParty,
    pub receiver: TransferParty,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntraTransferResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Uuid,
    pub reference: String,
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sender: TransferParty,
    #[serde(deserialize_with = "null_as_default")]
    pub receiver: TransferParty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_batches_by_date() {
        let response: DepositBatchResponse = serde_json::from_value(serde_json::json!({
            "deposits": {
                "2022-06-14": {
                    "deposits": [{
                        "id": "5a1b7a3e-5f43-4a3c-9d57-2a4a5c8b6f10",
                        "amount": 100.0,
                        "created_at": "2022-06-14T08:00:00Z",
                        "settled_at": null,
                        "status": "pending"
                    }],
                    "total_amount": 100.0
                }
            },
            "total_amount": 100.0
        }))
        .unwrap();

        let batch = &response.deposits["2022-06-14"];
        assert_eq!(batch.deposits.len(), 1);
        assert!(batch.deposits[0].settled_at.is_none());
        assert_eq!(batch.deposits[0].status, "pending");
    }

    #[test]
    fn test_deposit_null_ids_and_lists_decode_as_empty() {
        let deposit: Deposit = serde_json::from_value(serde_json::json!({
            "id": "5a1b7a3e-5f43-4a3c-9d57-2a4a5c8b6f10",
            "customer_id": null,
            "deposit_before_id": null,
            "yield_offering_id": null,
            "created_at": null,
            "amount": 25.0
        }))
        .unwrap();
        assert_eq!(deposit.deposit_before_id, Uuid::nil());
        assert_eq!(deposit.customer_id, Uuid::nil());
        assert_eq!(deposit.created_at, DateTime::<Utc>::default());
        assert_eq!(deposit.amount, 25.0);

        let response: DepositBatchResponse = serde_json::from_value(serde_json::json!({
            "deposits": {"2022-06-14": {"deposits": null, "total_amount": 0.0}}
        }))
        .unwrap();
        assert!(response.deposits["2022-06-14"].deposits.is_empty());

        let response: DepositBatchResponse =
            serde_json::from_value(serde_json::json!({"deposits": null})).unwrap();
        assert!(response.deposits.is_empty());
    }

    #[test]
    fn test_lookup_query_pair() {
        assert_eq!(DepositLookup::Id("d-1".into()).query_pair(), ("id", "d-1"));
        assert_eq!(
            DepositLookup::Reference("ref".into()).query_pair(),
            ("reference", "ref")
        );
    }

    #[test]
    fn test_fund_transfer_action_lowercase() {
        let json = serde_json::to_value(FundTransferAction::Debit).unwrap();
        assert_eq!(json, "debit");
    }
}
