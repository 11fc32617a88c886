// internal crates
use crate::http::errors::HTTPErr;
use crate::http::path;
use crate::http::request;
use crate::http::ClientI;

/// Liveness probe. The service answers 204 as long as its process is up.
pub async fn alive(client: &impl ClientI) -> Result<(), HTTPErr> {
    probe(client, "alive").await
}

/// Readiness probe. Unlike [`alive`] the service also checks its dependencies
/// and answers 503 with an error payload when one is down.
pub async fn health(client: &impl ClientI) -> Result<(), HTTPErr> {
    probe(client, "health").await
}

async fn probe(client: &impl ClientI, endpoint: &str) -> Result<(), HTTPErr> {
    let url = path::join(client.base_url(), &[endpoint])?;
    let request = request::Params::get(&url, client.default_timeout());
    client.execute(request).await?;
    Ok(())
}
