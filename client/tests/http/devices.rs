use crate::http::mock::{CapturedRequest, MockCall, MockClient};
use deviceconnect_client::errors::{Error, ErrorKind};
use deviceconnect_client::http::devices::{self, DeviceParams, ProvisionParams};
use deviceconnect_client::http::errors::{HTTPErr, MockErr};
use deviceconnect_client::models::Device;

fn mock_err() -> HTTPErr {
    HTTPErr::MockErr(MockErr {
        is_network_connection_error: false,
    })
}

fn failing_mock() -> MockClient {
    MockClient {
        respond_fn: Box::new(|_| Err(mock_err())),
        ..MockClient::default()
    }
}

fn params<'a>(tenant_id: &'a str, device_id: &'a str) -> DeviceParams<'a> {
    DeviceParams {
        tenant_id,
        device_id,
    }
}

pub mod provision {
    use super::*;

    #[tokio::test]
    async fn success() {
        let mock = MockClient::default();
        let payload = Device::new("dvc_1".to_string());

        devices::provision(
            &mock,
            ProvisionParams {
                tenant_id: "tnt_1",
                payload: &payload,
            },
        )
        .await
        .unwrap();

        assert_eq!(mock.call_count(MockCall::ProvisionDevice), 1);
        assert_eq!(
            mock.requests(),
            vec![CapturedRequest {
                method: reqwest::Method::POST,
                url: "http://mock/tenants/tnt_1/devices".into(),
                body: Some(r#"{"device_id":"dvc_1"}"#.into()),
            }]
        );
    }

    #[tokio::test]
    async fn empty_device_id_is_rejected_before_sending() {
        let mock = MockClient::default();
        let payload = Device::new(String::new());

        let err = devices::provision(
            &mock,
            ProvisionParams {
                tenant_id: "tnt_1",
                payload: &payload,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn error_propagates() {
        let mock = failing_mock();
        let payload = Device::new("dvc_1".to_string());
        let result = devices::provision(
            &mock,
            ProvisionParams {
                tenant_id: "tnt_1",
                payload: &payload,
            },
        )
        .await;
        assert!(matches!(result, Err(HTTPErr::MockErr(_))));
    }
}

pub mod delete {
    use super::*;

    #[tokio::test]
    async fn success() {
        let mock = MockClient::default();
        devices::delete(&mock, params("tnt_1", "dvc_1")).await.unwrap();

        assert_eq!(mock.call_count(MockCall::DeleteDevice), 1);
        assert_eq!(
            mock.requests(),
            vec![CapturedRequest {
                method: reqwest::Method::DELETE,
                url: "http://mock/tenants/tnt_1/devices/dvc_1".into(),
                body: None,
            }]
        );
    }

    #[tokio::test]
    async fn empty_device_id_is_rejected() {
        let mock = MockClient::default();
        let err = devices::delete(&mock, params("tnt_1", "")).await.unwrap_err();
        assert!(matches!(err, HTTPErr::InvalidParamErr(_)));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn dot_device_id_is_rejected_before_sending() {
        let mock = MockClient::default();
        let err = devices::delete(&mock, params("tnt_1", "..")).await.unwrap_err();
        assert!(matches!(err, HTTPErr::InvalidURLErr(_)));
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn ids_are_escaped() {
        let mock = MockClient::default();
        devices::delete(&mock, params("tnt/1", "dvc 1")).await.unwrap();
        assert_eq!(
            mock.requests()[0].url,
            "http://mock/tenants/tnt%2F1/devices/dvc%201"
        );
    }
}

pub mod check_update {
    use super::*;

    #[tokio::test]
    async fn success() {
        let mock = MockClient::default();
        devices::check_update(&mock, params("tnt_1", "dvc_1"))
            .await
            .unwrap();

        assert_eq!(mock.call_count(MockCall::CheckUpdate), 1);
        assert_eq!(
            mock.requests(),
            vec![CapturedRequest {
                method: reqwest::Method::POST,
                url: "http://mock/tenants/tnt_1/devices/dvc_1/check-update".into(),
                body: None,
            }]
        );
    }

    #[tokio::test]
    async fn empty_tenant_id_is_allowed() {
        let mock = MockClient::default();
        devices::check_update(&mock, params("", "dvc_1"))
            .await
            .unwrap();
        assert_eq!(
            mock.requests()[0].url,
            "http://mock/tenants//devices/dvc_1/check-update"
        );
    }

    #[tokio::test]
    async fn dot_ids_are_rejected_before_sending() {
        let mock = MockClient::default();
        for (tenant_id, device_id) in [("tnt_1", "."), ("..", "dvc_1")] {
            let err = devices::check_update(&mock, params(tenant_id, device_id))
                .await
                .unwrap_err();
            assert!(matches!(err, HTTPErr::InvalidURLErr(_)));
        }
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn empty_device_id_is_rejected() {
        let mock = MockClient::default();
        let err = devices::check_update(&mock, params("tnt_1", ""))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("check_update"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn error_propagates() {
        let mock = failing_mock();
        let result = devices::check_update(&mock, params("tnt_1", "dvc_1")).await;
        assert!(matches!(result, Err(HTTPErr::MockErr(_))));
    }
}

pub mod send_inventory {
    use super::*;

    #[tokio::test]
    async fn success() {
        let mock = MockClient::default();
        devices::send_inventory(&mock, params("tnt_1", "dvc_1"))
            .await
            .unwrap();

        assert_eq!(mock.call_count(MockCall::SendInventory), 1);
        assert_eq!(
            mock.requests(),
            vec![CapturedRequest {
                method: reqwest::Method::POST,
                url: "http://mock/tenants/tnt_1/devices/dvc_1/send-inventory".into(),
                body: None,
            }]
        );
    }

    #[tokio::test]
    async fn empty_device_id_is_rejected() {
        let mock = MockClient::default();
        let err = devices::send_inventory(&mock, params("", ""))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("send_inventory"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn error_propagates() {
        let mock = failing_mock();
        let result = devices::send_inventory(&mock, params("tnt_1", "dvc_1")).await;
        assert!(matches!(result, Err(HTTPErr::MockErr(_))));
    }
}
