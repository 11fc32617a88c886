// internal crates
use crate::errors::{ErrorKind, HTTPCode, Trace};
use crate::http::request;
use internal_api::models::Error as ErrorPayload;

// external crates
use reqwest::header::HeaderMap;

pub const REQUEST_ID_HEADER: &str = "X-MEN-RequestID";

#[derive(Debug, thiserror::Error)]
pub struct RequestFailed {
    pub request: request::Meta,
    pub status: reqwest::StatusCode,
    pub headers: HeaderMap,
    pub body: String,
    pub error: Option<ErrorPayload>,
    pub trace: Box<Trace>,
}

impl RequestFailed {
    pub fn reason(&self) -> &str {
        self.status.canonical_reason().unwrap_or("Unknown")
    }
}

impl std::fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "({})", self.status.as_u16())?;
        writeln!(f, "Reason: {}", self.reason())?;
        if !self.headers.is_empty() {
            writeln!(f, "HTTP response headers: {:?}", self.headers)?;
        }
        if !self.body.is_empty() {
            writeln!(f, "HTTP response body: {}", self.body)?;
        }
        Ok(())
    }
}

impl crate::errors::Error for RequestFailed {
    fn status(&self) -> Option<HTTPCode> {
        Some(self.status)
    }

    fn request_id(&self) -> Option<String> {
        if let Some(id) = self.error.as_ref().and_then(|e| e.request_id.clone()) {
            return Some(id);
        }
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub struct TimeoutErr {
    pub msg: String,
    pub request: request::Meta,
    pub trace: Box<Trace>,
}

impl std::fmt::Display for TimeoutErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "request {} timed out after {}ms",
            self.request,
            self.request.timeout.as_millis()
        )
    }
}

impl crate::errors::Error for TimeoutErr {
    fn is_network_connection_error(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReqwestErrKind {
    Connection,
    Other,
}

impl ReqwestErrKind {
    fn describe(&self) -> &'static str {
        match self {
            Self::Connection => "network connection error",
            Self::Other => "reqwest crate error",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("request {request} failed with {}: {source}", .kind.describe())]
pub struct ReqwestErr {
    pub kind: ReqwestErrKind,
    pub request: request::Meta,
    pub source: reqwest::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for ReqwestErr {
    fn is_network_connection_error(&self) -> bool {
        self.kind == ReqwestErrKind::Connection
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to build request: {source}")]
pub struct BuildReqwestErr {
    pub source: reqwest::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for BuildReqwestErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to build http client: {source}")]
pub struct BuildClientErr {
    pub source: reqwest::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for BuildClientErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid value for header '{name}': {source}")]
pub struct InvalidHeaderValueErr {
    pub name: String,
    pub source: reqwest::header::InvalidHeaderValue,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for InvalidHeaderValueErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid header name '{name}': {source}")]
pub struct InvalidHeaderNameErr {
    pub name: String,
    pub source: reqwest::header::InvalidHeaderName,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for InvalidHeaderNameErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid url '{url}': {msg}")]
pub struct InvalidURLErr {
    pub url: String,
    pub msg: String,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for InvalidURLErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

#[derive(Debug, thiserror::Error)]
#[error("missing the required parameter `{param}` when calling `{operation}`")]
pub struct InvalidParamErr {
    pub param: &'static str,
    pub operation: &'static str,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for InvalidParamErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to marshal JSON body: {source}")]
pub struct MarshalJSONErr {
    pub source: serde_json::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for MarshalJSONErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Type
    }
}

#[derive(Debug, thiserror::Error)]
#[error("request {request} failed to unmarshal JSON: {source}")]
pub struct UnmarshalJSONErr {
    pub request: request::Meta,
    pub source: serde_json::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for UnmarshalJSONErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Type
    }
}

#[derive(Debug, thiserror::Error)]
#[error("request {request} returned a payload without the required key '{key}'")]
pub struct MissingKeyErr {
    pub key: String,
    pub request: request::Meta,
    pub source: serde_json::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for MissingKeyErr {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Key
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Mock error (is network connection error: {is_network_connection_error})")]
pub struct MockErr {
    pub is_network_connection_error: bool,
}

impl crate::errors::Error for MockErr {
    fn is_network_connection_error(&self) -> bool {
        self.is_network_connection_error
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HTTPErr {
    #[error(transparent)]
    RequestFailed(RequestFailed),
    #[error(transparent)]
    TimeoutErr(TimeoutErr),
    #[error(transparent)]
    ReqwestErr(ReqwestErr),
    #[error(transparent)]
    BuildReqwestErr(BuildReqwestErr),
    #[error(transparent)]
    BuildClientErr(BuildClientErr),
    #[error(transparent)]
    InvalidHeaderValueErr(InvalidHeaderValueErr),
    #[error(transparent)]
    InvalidHeaderNameErr(InvalidHeaderNameErr),
    #[error(transparent)]
    InvalidURLErr(InvalidURLErr),
    #[error(transparent)]
    InvalidParamErr(InvalidParamErr),
    #[error(transparent)]
    MarshalJSONErr(MarshalJSONErr),
    #[error(transparent)]
    UnmarshalJSONErr(UnmarshalJSONErr),
    #[error(transparent)]
    MissingKeyErr(MissingKeyErr),
    #[error(transparent)]
    MockErr(MockErr),
}

impl HTTPErr {
    /// Whether the request never reached the server, so sending it again cannot
    /// apply it twice. Timeouts don't qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            HTTPErr::ReqwestErr(e) => e.kind == ReqwestErrKind::Connection,
            HTTPErr::MockErr(e) => e.is_network_connection_error,
            _ => false,
        }
    }
}

crate::impl_error!(HTTPErr {
    RequestFailed,
    TimeoutErr,
    ReqwestErr,
    BuildReqwestErr,
    BuildClientErr,
    InvalidHeaderValueErr,
    InvalidHeaderNameErr,
    InvalidURLErr,
    InvalidParamErr,
    MarshalJSONErr,
    UnmarshalJSONErr,
    MissingKeyErr,
    MockErr,
});

pub fn reqwest_err_to_http_client_err(
    e: reqwest::Error,
    meta: &request::Meta,
    trace: Box<Trace>,
) -> HTTPErr {
    if e.is_timeout() {
        return HTTPErr::TimeoutErr(TimeoutErr {
            msg: e.to_string(),
            request: meta.clone(),
            trace,
        });
    }
    let kind = if e.is_connect() {
        ReqwestErrKind::Connection
    } else {
        ReqwestErrKind::Other
    };
    HTTPErr::ReqwestErr(ReqwestErr {
        kind,
        request: meta.clone(),
        source: e,
        trace,
    })
}
