// internal crates
use crate::http::errors::HTTPErr;
use crate::http::path;
use crate::http::request;
use crate::http::ClientI;
use internal_api::models::NewTenant;

// ================================ PARAM STRUCTS ================================== //

pub struct ProvisionParams<'a> {
    pub payload: &'a NewTenant,
}

// ================================ FREE FUNCTIONS ================================= //

/// Registers a new tenant with the service. Answered with 201 Created.
pub async fn provision(
    client: &impl ClientI,
    params: ProvisionParams<'_>,
) -> Result<(), HTTPErr> {
    request::require(&params.payload.tenant_id, "tenant_id", "provision_tenant")?;
    let url = path::join(client.base_url(), &["tenants"])?;
    let request = request::Params::post_json(
        &url,
        request::marshal_json(params.payload)?,
        client.default_timeout(),
    );
    client.execute(request).await?;
    Ok(())
}
