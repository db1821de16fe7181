mod common;

use common::{create_test_client, envelope, error_envelope, TEST_PUBLIC_KEY, TEST_TOKEN};
use serde_json::json;
use std::time::Duration;
use torus::api::types::{CreateCustomerRequest, CustomerType, Deposit, DepositLookup};
use torus::core::kernel::{sign, ReqwestRest, RequestSpec, RestClient};
use torus::{RequestContext, TorusError};
use uuid::Uuid;
use wiremock::matchers::{any, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn customer_request(reference: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        reference: reference.to_string(),
        mobile_number: "+2348000000000".to_string(),
        customer_type: CustomerType::Individual,
        yield_offering_ids: vec![],
    }
}

#[cfg(test)]
mod header_tests {
    use super::*;

    #[tokio::test]
    async fn test_signed_request_carries_auth_signature_and_request_id() {
        let server = MockServer::start().await;
        let expected_signature = sign("ref-001", TEST_PUBLIC_KEY);

        Mock::given(method("POST"))
            .and(path("/v1/customer"))
            .and(header(
                "Authorization",
                format!("Bearer {}", TEST_TOKEN).as_str(),
            ))
            .and(header("Signature", expected_signature.as_str()))
            .and(header("X-REQUEST-ID", "req-123"))
            .and(body_partial_json(json!({
                "reference": "ref-001",
                "type": "individual",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
                "id": "cus-1",
                "customer_name": "Ada Lovelace",
                "email": "ada@example.com",
                "reference": "ref-001",
                "created_at": "2024-01-02T10:00:00Z",
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let ctx = RequestContext::new().with_request_id("req-123");
        let customer = client
            .create_customer(&ctx, &customer_request("ref-001"))
            .await
            .unwrap();

        assert_eq!(customer.id, "cus-1");
        assert_eq!(customer.name, "Ada Lovelace");
        assert_eq!(customer.reference, "ref-001");
    }

    #[tokio::test]
    async fn test_unsigned_request_has_no_signature_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/banks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
                {"name": "Access Bank", "code": "044"},
                {"name": "GTBank", "code": "058"},
            ]))))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let banks = client.get_banks(&RequestContext::new()).await.unwrap();
        assert_eq!(banks.len(), 2);
        assert_eq!(banks[1].code, "058");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let headers = &requests[0].headers;
        assert!(headers.get("Signature").is_none());
        assert_eq!(
            headers.get("Authorization").unwrap().to_str().unwrap(),
            format!("Bearer {}", TEST_TOKEN)
        );
        assert!(headers.get("Idempotency-Key").is_none());
    }

    #[tokio::test]
    async fn test_idempotency_key_is_forwarded() {
        let server = MockServer::start().await;
        let key = Uuid::new_v4();

        Mock::given(method("DELETE"))
            .and(path("/v1/customer/cus-1"))
            .and(header("Idempotency-Key", key.to_string().as_str()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let ctx = RequestContext::with_generated_request_id().with_idempotency_key(key);
        client.delete_customer(&ctx, "cus-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_request_id_must_be_a_valid_header_value() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let ctx = RequestContext::new().with_request_id("bad\nid");
        let err = client.get_banks(&ctx).await.unwrap_err();
        assert!(matches!(err, TorusError::InvalidParameters(_)));
    }
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[tokio::test]
    async fn test_error_envelope_on_client_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customer"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(error_envelope(400, "customer already exists")),
            )
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let err = client
            .create_customer(&RequestContext::new(), &customer_request("ref-dup"))
            .await
            .unwrap_err();

        assert!(err.is_api_error());
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "customer already exists");
    }

    #[tokio::test]
    async fn test_error_envelope_wins_over_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/banks"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(error_envelope(200, "service paused")),
            )
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let err = client.get_banks(&RequestContext::new()).await.unwrap_err();

        match err {
            TorusError::Api {
                status,
                id,
                message,
            } => {
                assert_eq!(status, 200);
                assert_eq!(id.as_deref(), Some("err-001"));
                assert_eq!(message, "service paused");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_without_envelope_error_uses_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/banks"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "status": 500,
                "message": "internal failure",
            })))
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let err = client.get_banks(&RequestContext::new()).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "internal failure");
    }

    #[tokio::test]
    async fn test_unparseable_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/banks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let err = client.get_banks(&RequestContext::new()).await.unwrap_err();
        assert!(err.is_decode_error());
    }

    #[tokio::test]
    async fn test_malformed_uuid_in_data_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/deposit/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "id": "not-a-uuid",
                "amount": 10.0,
            }))))
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let result: Result<Deposit, _> = client
            .get_deposit(
                &RequestContext::new(),
                &DepositLookup::Id("not-a-uuid".to_string()),
            )
            .await;

        let err = result.unwrap_err();
        assert!(err.is_decode_error());
        assert!(!err.is_api_error());
    }

    #[tokio::test]
    async fn test_empty_success_body_is_accepted_for_unit_results() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/customer/cus-9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        client
            .delete_customer(&RequestContext::new(), "cus-9")
            .await
            .unwrap();
    }
}

#[cfg(test)]
mod transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_method_fails_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let rest = ReqwestRest::new(server.uri(), TEST_TOKEN.to_string()).unwrap();
        let ctx = RequestContext::new();

        let err = rest
            .execute(&ctx, RequestSpec::new("TRACE", "v1/customer"))
            .await
            .unwrap_err();
        assert!(matches!(err, TorusError::InvalidMethod(ref m) if m == "TRACE"));
        assert_eq!(err.to_string(), "invalid method: TRACE");

        // Verbs are matched exactly
        let err = rest
            .execute(&ctx, RequestSpec::new("get", "v1/customer"))
            .await
            .unwrap_err();
        assert!(matches!(err, TorusError::InvalidMethod(_)));
    }

    #[tokio::test]
    async fn test_head_request_with_empty_body_yields_null() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/v1/customer"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let rest = ReqwestRest::new(server.uri(), TEST_TOKEN.to_string()).unwrap();
        let data = rest
            .execute(&RequestContext::new(), RequestSpec::head("v1/customer"))
            .await
            .unwrap();
        assert!(data.is_null());
    }

    #[tokio::test]
    async fn test_context_timeout_is_enforced() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/payments/banks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope(json!([])))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = create_test_client(&server);
        let ctx = RequestContext::new().with_timeout(Duration::from_millis(100));
        let err = client.get_banks(&ctx).await.unwrap_err();

        assert!(matches!(err, TorusError::Timeout(d) if d == Duration::from_millis(100)));
        assert!(err.is_transport_error());
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_http_error() {
        // Reserve a free port, then release it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let rest =
            ReqwestRest::new(format!("http://127.0.0.1:{}", port), TEST_TOKEN.to_string()).unwrap();
        let err = rest
            .execute(&RequestContext::new(), RequestSpec::get("v1/payments/banks"))
            .await
            .unwrap_err();

        assert!(matches!(err, TorusError::Http(_)));
        assert!(err.is_transport_error());
        assert!(!err.is_api_error());
        assert_eq!(err.status(), None);
    }
}
