// internal crates
use crate::http::{
    errors::{
        reqwest_err_to_http_client_err, HTTPErr, MissingKeyErr, RequestFailed, UnmarshalJSONErr,
    },
    request::Meta,
};
use crate::trace;
use internal_api::models::Error as ErrorPayload;

// external crates
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::debug;

pub async fn handle(response: reqwest::Response, meta: &Meta) -> Result<String, HTTPErr> {
    let status = response.status();

    // check for an error response
    if !status.is_success() {
        let headers = response.headers().clone();
        let body = response.text().await.unwrap_or_default();
        let error = match parse_json::<ErrorPayload>(&body, meta) {
            Ok(error) => Some(error),
            Err(e) => {
                debug!("response to {} carries no error payload: {}", meta, e);
                None
            }
        };
        return Err(HTTPErr::RequestFailed(RequestFailed {
            request: meta.clone(),
            status,
            headers,
            body,
            error,
            trace: trace!(),
        }));
    }

    let text = response
        .text()
        .await
        .map_err(|e| reqwest_err_to_http_client_err(e, meta, trace!()))?;
    Ok(text)
}

pub fn parse_json<T>(text: &str, meta: &Meta) -> Result<T, HTTPErr>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(|e| {
        if let Some(key) = missing_key(&e) {
            return HTTPErr::MissingKeyErr(MissingKeyErr {
                key,
                request: meta.clone(),
                source: e,
                trace: trace!(),
            });
        }
        HTTPErr::UnmarshalJSONErr(UnmarshalJSONErr {
            request: meta.clone(),
            source: e,
            trace: trace!(),
        })
    })
}

// serde reports absent fields as "missing field `name` at line X column Y"
fn missing_key(e: &serde_json::Error) -> Option<String> {
    if e.classify() != Category::Data {
        return None;
    }
    let msg = e.to_string();
    let rest = msg.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}
