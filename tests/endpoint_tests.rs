mod common;

use chrono::NaiveDate;
use common::{create_test_client, envelope, error_envelope, TEST_PUBLIC_KEY};
use serde_json::json;
use torus::api::types::{
    AccountResolveRequest, DepositLookup, InitiateDepositRequest, TransactionFilter,
    TransferFilter,
};
use torus::core::kernel::sign;
use torus::{DateBetween, FileAttachment, Page, RequestContext};
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEPOSIT_ID: &str = "5f0d7b5c-1d9a-4a47-9c39-5b1ab4a0d111";
const CUSTOMER_ID: &str = "0b7c7f7e-4c6a-4f1e-8d0f-2b8f1d5e9a22";
const YIELD_OFFERING_ID: &str = "9a5e2c1b-7d3f-4b8a-a6e4-3c2d1f0e8b33";

fn deposit_json(reference: &str) -> serde_json::Value {
    json!({
        "id": DEPOSIT_ID,
        "customer_id": CUSTOMER_ID,
        "business_id": "3e1a9c7d-2b4f-4c8e-9f6a-1d2c3b4a5e44",
        "reference": reference,
        "currency": "USD",
        "amount": 250.5,
        "channel": "api",
        "created_at": "2024-03-01T12:30:00Z",
        "settled_at": null,
        "status": "pending",
        "yield_offering_id": YIELD_OFFERING_ID,
    })
}

#[cfg(test)]
mod bank_tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_bank_account_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/banks/resolve-account"))
            .and(body_json(json!({
                "bank_code": "058",
                "account_number": "0123456789",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "account_name": "ADA LOVELACE",
                "account_number": "0123456789",
                "bank_code": "058",
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let request = AccountResolveRequest {
            bank_code: "058".to_string(),
            account_number: "0123456789".to_string(),
        };
        let account = client
            .resolve_bank_account(&RequestContext::new(), &request)
            .await
            .unwrap();

        assert_eq!(account.account_name, "ADA LOVELACE");
        assert_eq!(account.account_number, "0123456789");
        assert_eq!(account.bank_code, "058");
        assert!(account.bank_name.is_none());
    }

    #[tokio::test]
    async fn test_resolve_bank_account_invalid_number() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/banks/resolve-account"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(error_envelope(400, "invalid account number")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let request = AccountResolveRequest {
            bank_code: "058".to_string(),
            account_number: "000".to_string(),
        };
        let err = client
            .resolve_bank_account(&RequestContext::new(), &request)
            .await
            .unwrap_err();

        assert!(err.is_api_error());
        assert_eq!(err.to_string(), "invalid account number");
    }

    #[tokio::test]
    async fn test_generate_bank_account_is_signed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payments/banks/account"))
            .and(header(
                "Signature",
                sign("acct-ref-7", TEST_PUBLIC_KEY).as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "id": "7c1d2e3f-4a5b-4c6d-8e9f-0a1b2c3d4e55",
                "customer_id": CUSTOMER_ID,
                "business_id": "3e1a9c7d-2b4f-4c8e-9f6a-1d2c3b4a5e44",
                "account_id": "acc-1",
                "account_details": {"account_number": "9988776655"},
                "reference": "acct-ref-7",
                "currency": "NGN",
                "created_at": "2024-03-01T12:30:00Z",
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let request = torus::api::types::GenerateBankAccountRequest {
            customer_id: CUSTOMER_ID.to_string(),
            currency: "NGN".to_string(),
            reference: "acct-ref-7".to_string(),
            ..Default::default()
        };
        let account = client
            .generate_bank_account(&RequestContext::new(), &request)
            .await
            .unwrap();

        assert_eq!(account.business_reference, "acct-ref-7");
        assert_eq!(account.account_details["account_number"], "9988776655");
    }
}

#[cfg(test)]
mod kyc_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_kyc_document_as_multipart() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!(
                "/v1/kyc/{}/document-verification",
                CUSTOMER_ID
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "id": "kyc-1",
                "customer_id": CUSTOMER_ID,
                "status": "submitted",
                "created_at": "2024-03-01T12:30:00Z",
                "updated_at": "2024-03-01T12:31:00Z",
                "documents": [],
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let document = FileAttachment::from_bytes("passport.PNG", vec![0x89, b'P', b'N', b'G']);
        let record = client
            .submit_customer_kyc_document(
                &RequestContext::new(),
                CUSTOMER_ID,
                document,
                "passport",
                "NG",
            )
            .await
            .unwrap();
        assert_eq!(record.status, "submitted");

        let requests = server.received_requests().await.unwrap();
        let request = &requests[0];
        let content_type = request
            .headers
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("multipart/form-data"));

        let body = String::from_utf8_lossy(&request.body).to_lowercase();
        assert!(body.contains("name=\"document\""));
        assert!(body.contains("filename=\"passport.png\""));
        assert!(body.contains("content-type: image/png"));
        assert!(body.contains("name=\"documenttype\""));
        assert!(body.contains("name=\"country\""));
        assert!(request.headers.get("Signature").is_none());
    }

    #[tokio::test]
    async fn test_upload_bulk_payout_sends_file_and_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payouts/upload"))
            .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
                "id": "1f2e3d4c-5b6a-4978-8695-a4b3c2d1e066",
                "business_id": "3e1a9c7d-2b4f-4c8e-9f6a-1d2c3b4a5e44",
                "status": "pending",
                "count": 2,
                "currency": "NGN",
                "total_amount": 5000.0,
                "remarks": "march salaries",
                "created_at": "2024-03-01T12:30:00Z",
                "updated_at": "2024-03-01T12:30:00Z",
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let file = FileAttachment::from_bytes(
            "payouts.csv",
            b"account_number,bank_code,amount\n0123456789,058,2500\n".to_vec(),
        );
        let payout = client
            .upload_bulk_payout(&RequestContext::new(), "NGN", Some("march salaries"), file)
            .await
            .unwrap();
        assert_eq!(payout.count, 2);
        assert_eq!(payout.currency, "NGN");

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body).to_lowercase();
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("content-type: text/csv"));
        assert!(body.contains("name=\"currency\""));
        assert!(body.contains("march salaries"));
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_deposit_by_reference_sends_only_reference() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/deposit/search"))
            .and(query_param("reference", "dep-ref-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope(deposit_json("dep-ref-1"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let deposit = client
            .get_deposit(
                &RequestContext::new(),
                &DepositLookup::Reference("dep-ref-1".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(deposit.id, Uuid::parse_str(DEPOSIT_ID).unwrap());
        assert_eq!(deposit.reference, "dep-ref-1");
        assert!(deposit.settled_at.is_none());
        assert_eq!(deposit.created_at.to_rfc3339(), "2024-03-01T12:30:00+00:00");

        let requests = server.received_requests().await.unwrap();
        let keys: Vec<String> = requests[0]
            .url
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, vec!["reference".to_string()]);
    }

    #[tokio::test]
    async fn test_get_all_deposits_sends_settled_flag() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/deposits"))
            .and(query_param("settled", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "deposits": {
                    "2024-03-01": {
                        "deposits": [deposit_json("dep-ref-2")],
                        "total_amount": 250.5,
                    },
                },
                "total_amount": 250.5,
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let batches = client
            .get_all_deposits(&RequestContext::new(), Some(false))
            .await
            .unwrap();

        assert_eq!(batches.total_amount, 250.5);
        assert_eq!(batches.deposits["2024-03-01"].deposits.len(), 1);
    }

    #[tokio::test]
    async fn test_get_all_customers_sends_pagination_keys() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/customer"))
            .and(query_param("number", "2"))
            .and(query_param("size", "20"))
            .and(query_param("sort_by", "created_at"))
            .and(query_param("sort_direction_desc", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "items": [],
                "page": {"page": 2, "size": 20, "has_next_page": false, "total": 20},
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let page = Page::new(2, 20).sorted_by("created_at", true);
        let customers = client
            .get_all_customers(&RequestContext::new(), Some(&page))
            .await
            .unwrap();

        assert!(customers.items.is_empty());
        assert_eq!(customers.page.page, 2);
        assert!(!customers.page.has_next_page);
    }

    #[tokio::test]
    async fn test_get_all_transfers_sends_date_range() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/transfers"))
            .and(query_param("status", "completed"))
            .and(query_param("from", "2024-01-01"))
            .and(query_param("to", "2024-01-31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "items": [],
                "page": {"page": 1, "size": 10, "has_next_page": false, "total": 0},
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let filter = TransferFilter {
            status: Some("completed".to_string()),
            date_between: Some(DateBetween::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            )),
            ..Default::default()
        };
        let transfers = client
            .get_all_transfers(&RequestContext::new(), &filter)
            .await
            .unwrap();
        assert!(transfers.items.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].url.query_pairs().any(|(k, _)| k == "currency"));
    }

    #[tokio::test]
    async fn test_get_transactions_uses_plain_page_keys() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/transaction"))
            .and(query_param("customer_id", CUSTOMER_ID))
            .and(query_param("page", "3"))
            .and(query_param("size", "15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "items": {"transactions": []},
                "page": {"page": 3, "size": 15, "has_next_page": true, "total": 100},
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let filter = TransactionFilter {
            customer_id: Some(Uuid::parse_str(CUSTOMER_ID).unwrap()),
            page: Some(3),
            size: Some(15),
            ..Default::default()
        };
        let transactions = client
            .get_transactions(&RequestContext::new(), &filter)
            .await
            .unwrap();
        assert!(transactions.page.has_next_page);
        assert!(transactions.items.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_delete_card_sends_customer_id() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/cards/card-1"))
            .and(query_param("customer_id", CUSTOMER_ID))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope(json!("card deleted"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let message = client
            .delete_card(&RequestContext::new(), "card-1", CUSTOMER_ID)
            .await
            .unwrap();
        assert_eq!(message, "card deleted");
    }

    #[tokio::test]
    async fn test_path_ids_are_percent_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/cards/card%2F1%3Fx"))
            .and(query_param("customer_id", CUSTOMER_ID))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope(json!("card deleted"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/customer/balances/cus%201"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "customer_id": null,
                "total_balance": 0.0,
                "detail": null,
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        client
            .delete_card(&RequestContext::new(), "card/1?x", CUSTOMER_ID)
            .await
            .unwrap();
        let balances = client
            .get_customer_balances(&RequestContext::new(), "cus 1")
            .await
            .unwrap();
        assert!(balances.customer_id.is_nil());
        assert!(balances.detail.is_empty());
    }
}

#[cfg(test)]
mod signed_tests {
    use super::*;

    #[tokio::test]
    async fn test_initiate_deposit_signature_matches_reference() {
        let server = MockServer::start().await;
        let reference = "dep-ref-signed";

        Mock::given(method("POST"))
            .and(path("/v1/deposit"))
            .and(header("Signature", sign(reference, TEST_PUBLIC_KEY).as_str()))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(envelope(deposit_json(reference))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let request = InitiateDepositRequest {
            customer_id: CUSTOMER_ID.to_string(),
            reference: reference.to_string(),
            amount: 250.5,
            yield_offering_id: YIELD_OFFERING_ID.to_string(),
        };
        let deposit = client
            .initiate_deposit(&RequestContext::new(), &request)
            .await
            .unwrap();

        assert_eq!(deposit.amount, 250.5);
        assert_eq!(
            deposit.yield_offering_id,
            Uuid::parse_str(YIELD_OFFERING_ID).unwrap()
        );
    }
}
