// internal crates
use crate::config::Configuration;
use crate::http::devices::{self, DeviceParams};
use crate::http::errors::HTTPErr;
use crate::http::{self, health, tenants, ClientI};
use internal_api::models::{Device, NewTenant};

// external crates
use tracing::info;

/// Client of the Device Connect internal API with one method per endpoint.
///
/// Every method resolves to `Ok(())` on a 2xx answer. Other statuses surface as
/// [`HTTPErr::RequestFailed`] carrying the status and, when the body holds one,
/// the decoded error payload.
#[derive(Debug, Clone)]
pub struct InternalApiClient<C: ClientI = http::Client> {
    client: C,
}

impl InternalApiClient<http::Client> {
    pub fn new(config: &Configuration) -> Result<Self, HTTPErr> {
        Ok(Self {
            client: http::Client::new(config)?,
        })
    }
}

impl<C: ClientI> InternalApiClient<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn alive(&self) -> Result<(), HTTPErr> {
        health::alive(&self.client).await
    }

    pub async fn health(&self) -> Result<(), HTTPErr> {
        health::health(&self.client).await
    }

    pub async fn provision_tenant(&self, tenant: &NewTenant) -> Result<(), HTTPErr> {
        tenants::provision(&self.client, tenants::ProvisionParams { payload: tenant }).await?;
        info!("provisioned tenant '{}'", tenant.tenant_id);
        Ok(())
    }

    pub async fn provision_device(&self, tenant_id: &str, device: &Device) -> Result<(), HTTPErr> {
        devices::provision(
            &self.client,
            devices::ProvisionParams {
                tenant_id,
                payload: device,
            },
        )
        .await?;
        info!(
            "provisioned device '{}' for tenant '{}'",
            device.device_id, tenant_id
        );
        Ok(())
    }

    pub async fn delete_device(&self, tenant_id: &str, device_id: &str) -> Result<(), HTTPErr> {
        devices::delete(
            &self.client,
            DeviceParams {
                tenant_id,
                device_id,
            },
        )
        .await?;
        info!("deleted device '{}' of tenant '{}'", device_id, tenant_id);
        Ok(())
    }

    pub async fn check_update(&self, tenant_id: &str, device_id: &str) -> Result<(), HTTPErr> {
        devices::check_update(
            &self.client,
            DeviceParams {
                tenant_id,
                device_id,
            },
        )
        .await
    }

    pub async fn send_inventory(&self, tenant_id: &str, device_id: &str) -> Result<(), HTTPErr> {
        devices::send_inventory(
            &self.client,
            DeviceParams {
                tenant_id,
                device_id,
            },
        )
        .await
    }
}
