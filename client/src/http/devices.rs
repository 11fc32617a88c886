// internal crates
use crate::http::errors::HTTPErr;
use crate::http::path;
use crate::http::request;
use crate::http::ClientI;
use internal_api::models::Device;

// ================================ PARAM STRUCTS ================================== //

pub struct ProvisionParams<'a> {
    pub tenant_id: &'a str,
    pub payload: &'a Device,
}

/// Addresses a single device of a tenant. The tenant ID may be empty when the
/// service runs without multi-tenancy.
pub struct DeviceParams<'a> {
    pub tenant_id: &'a str,
    pub device_id: &'a str,
}

// ================================ FREE FUNCTIONS ================================= //

pub async fn provision(
    client: &impl ClientI,
    params: ProvisionParams<'_>,
) -> Result<(), HTTPErr> {
    request::require(&params.payload.device_id, "device_id", "provision_device")?;
    let url = path::join(
        client.base_url(),
        &["tenants", params.tenant_id, "devices"],
    )?;
    let request = request::Params::post_json(
        &url,
        request::marshal_json(params.payload)?,
        client.default_timeout(),
    );
    client.execute(request).await?;
    Ok(())
}

pub async fn delete(client: &impl ClientI, params: DeviceParams<'_>) -> Result<(), HTTPErr> {
    request::require(params.device_id, "device_id", "delete_device")?;
    let url = path::join(
        client.base_url(),
        &["tenants", params.tenant_id, "devices", params.device_id],
    )?;
    let request = request::Params::delete(&url, client.default_timeout());
    client.execute(request).await?;
    Ok(())
}

/// Asks a connected device to check for a deployment update. The service
/// answers 404 for unknown devices and 409 for disconnected ones.
pub async fn check_update(
    client: &impl ClientI,
    params: DeviceParams<'_>,
) -> Result<(), HTTPErr> {
    request::require(params.device_id, "device_id", "check_update")?;
    trigger(client, params, "check-update").await
}

/// Asks a connected device to send its inventory. Same error statuses as
/// [`check_update`].
pub async fn send_inventory(
    client: &impl ClientI,
    params: DeviceParams<'_>,
) -> Result<(), HTTPErr> {
    request::require(params.device_id, "device_id", "send_inventory")?;
    trigger(client, params, "send-inventory").await
}

async fn trigger(
    client: &impl ClientI,
    params: DeviceParams<'_>,
    action: &str,
) -> Result<(), HTTPErr> {
    let url = path::join(
        client.base_url(),
        &[
            "tenants",
            params.tenant_id,
            "devices",
            params.device_id,
            action,
        ],
    )?;
    let request = request::Params::post(&url, client.default_timeout());
    client.execute(request).await?;
    Ok(())
}
