use crate::http::mock::{CapturedRequest, MockCall, MockClient};
use deviceconnect_client::errors::{Error, ErrorKind};
use deviceconnect_client::http::errors::{HTTPErr, MockErr};
use deviceconnect_client::http::tenants::{self, ProvisionParams};
use deviceconnect_client::models::NewTenant;

pub mod provision {
    use super::*;

    #[tokio::test]
    async fn success() {
        let mock = MockClient::default();
        let payload = NewTenant::new("1234".to_string());

        tenants::provision(&mock, ProvisionParams { payload: &payload })
            .await
            .unwrap();

        assert_eq!(mock.call_count(MockCall::ProvisionTenant), 1);
        assert_eq!(
            mock.requests(),
            vec![CapturedRequest {
                method: reqwest::Method::POST,
                url: "http://mock/tenants".into(),
                body: Some(r#"{"tenant_id":"1234"}"#.into()),
            }]
        );
    }

    #[tokio::test]
    async fn empty_tenant_id_is_rejected_before_sending() {
        let mock = MockClient::default();
        let payload = NewTenant::new(String::new());

        let err = tenants::provision(&mock, ProvisionParams { payload: &payload })
            .await
            .unwrap_err();

        assert!(matches!(err, HTTPErr::InvalidParamErr(_)));
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn error_propagates() {
        let mock = MockClient {
            respond_fn: Box::new(|_| {
                Err(HTTPErr::MockErr(MockErr {
                    is_network_connection_error: false,
                }))
            }),
            ..MockClient::default()
        };
        let payload = NewTenant::new("1234".to_string());

        let result = tenants::provision(&mock, ProvisionParams { payload: &payload }).await;
        assert!(matches!(result, Err(HTTPErr::MockErr(_))));
    }
}
