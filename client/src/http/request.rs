// standard library
use std::collections::BTreeMap;
use std::fmt;

// internal crates
use crate::http::errors::{
    BuildReqwestErr, HTTPErr, InvalidHeaderNameErr, InvalidHeaderValueErr, InvalidParamErr,
    MarshalJSONErr, REQUEST_ID_HEADER,
};
use crate::trace;

// external crates
use base64::Engine;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tokio::time::Duration;
use uuid::Uuid;

const APPLICATION_JSON: &str = "application/json";

#[derive(Clone, Debug, PartialEq)]
pub struct Params<'a> {
    pub method: reqwest::Method,
    pub url: &'a str,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl<'a> Params<'a> {
    pub fn get(url: &'a str, timeout: Duration) -> Self {
        Self {
            method: reqwest::Method::GET,
            url,
            body: None,
            timeout,
        }
    }

    /// A POST without a body, used by the action endpoints.
    pub fn post(url: &'a str, timeout: Duration) -> Self {
        Self {
            method: reqwest::Method::POST,
            url,
            body: None,
            timeout,
        }
    }

    pub fn post_json(url: &'a str, body: String, timeout: Duration) -> Self {
        Self {
            method: reqwest::Method::POST,
            url,
            body: Some(body),
            timeout,
        }
    }

    pub fn delete(url: &'a str, timeout: Duration) -> Self {
        Self {
            method: reqwest::Method::DELETE,
            url,
            body: None,
            timeout,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn meta(&self) -> Meta {
        Meta {
            method: self.method.clone(),
            url: self.url.to_string(),
            timeout: self.timeout,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meta {
    pub method: reqwest::Method,
    pub url: String,
    pub timeout: Duration,
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (timeout: {}ms)",
            self.method,
            self.url,
            self.timeout.as_millis()
        )
    }
}

/// Credentials attached to every request.
#[derive(Clone, Debug, Default)]
pub enum Auth {
    #[default]
    None,
    Bearer(SecretString),
    Basic {
        username: String,
        password: Option<SecretString>,
    },
}

impl Auth {
    pub fn header_value(&self) -> Option<String> {
        match self {
            Auth::None => None,
            Auth::Bearer(token) => Some(format!("Bearer {}", token.expose_secret())),
            Auth::Basic { username, password } => {
                let password = password
                    .as_ref()
                    .map(|p| p.expose_secret().to_string())
                    .unwrap_or_default();
                let encoded = base64::engine::general_purpose::STANDARD
                    .encode(format!("{username}:{password}"));
                Some(format!("Basic {encoded}"))
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Headers {
    pub user_agent: String,
    pub defaults: BTreeMap<String, String>,
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            defaults: BTreeMap::new(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!(
        "deviceconnect-client/{}/rust",
        crate::version::VERSION.trim_start_matches('v')
    )
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, HTTPErr> {
    HeaderValue::from_str(value).map_err(|e| {
        HTTPErr::InvalidHeaderValueErr(InvalidHeaderValueErr {
            name: name.to_string(),
            source: e,
            trace: trace!(),
        })
    })
}

impl Headers {
    pub fn to_map(&self, request_id: &str, auth: &Auth) -> Result<HeaderMap, HTTPErr> {
        let mut headers = HeaderMap::new();

        // configured defaults first so the protocol headers below win
        for (name, value) in &self.defaults {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                HTTPErr::InvalidHeaderNameErr(InvalidHeaderNameErr {
                    name: name.clone(),
                    source: e,
                    trace: trace!(),
                })
            })?;
            headers.insert(header_name, header_value(name, value)?);
        }

        headers.insert(USER_AGENT, header_value("User-Agent", &self.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(
            REQUEST_ID_HEADER,
            header_value(REQUEST_ID_HEADER, request_id)?,
        );
        if let Some(value) = auth.header_value() {
            headers.insert(AUTHORIZATION, header_value("Authorization", &value)?);
        }
        Ok(headers)
    }
}

pub fn marshal_json<T>(payload: &T) -> Result<String, HTTPErr>
where
    T: Serialize,
{
    serde_json::to_string(payload).map_err(|e| {
        HTTPErr::MarshalJSONErr(MarshalJSONErr {
            source: e,
            trace: trace!(),
        })
    })
}

/// Rejects an empty value for a parameter the API requires.
pub fn require(
    value: &str,
    param: &'static str,
    operation: &'static str,
) -> Result<(), HTTPErr> {
    if value.is_empty() {
        return Err(HTTPErr::InvalidParamErr(InvalidParamErr {
            param,
            operation,
            trace: trace!(),
        }));
    }
    Ok(())
}

pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn build(
    client: &reqwest::Client,
    headers: &Headers,
    auth: &Auth,
    params: &Params,
) -> Result<(reqwest::Request, Meta), HTTPErr> {
    // request type (GET, POST, etc.)
    let mut request = client.request(params.method.clone(), params.url);

    // headers
    let request_id = new_request_id();
    let mut header_map = headers.to_map(&request_id, auth)?;
    if params.body.is_some() {
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    }
    request = request.headers(header_map);

    // body
    if let Some(body) = &params.body {
        request = request.body(body.clone());
    }

    // timeout
    request = request.timeout(params.timeout);

    // build
    let reqwest = request.build().map_err(|e| {
        HTTPErr::BuildReqwestErr(BuildReqwestErr {
            source: e,
            trace: trace!(),
        })
    })?;
    Ok((reqwest, params.meta()))
}
