// standard library
use std::future::Future;

// internal crates
use crate::config::{Configuration, RetryPolicy};
use crate::cooldown;
use crate::http::errors::{reqwest_err_to_http_client_err, BuildClientErr, HTTPErr, TimeoutErr};
use crate::http::request::{self, Auth, Headers, Meta, Params};
use crate::http::response;
use crate::trace;

// external crates
use tokio::time::{sleep, timeout, Duration};
#[allow(unused_imports)]
use tracing::{debug, error, info, warn};

/// The transport seam of the API modules. Implemented by [`Client`] and by the
/// mock transports in the tests.
pub trait ClientI: Send + Sync {
    fn base_url(&self) -> &str;

    fn default_timeout(&self) -> Duration {
        crate::config::DEFAULT_TIMEOUT
    }

    /// Sends the request and returns the body of a successful response.
    fn execute(
        &self,
        params: Params<'_>,
    ) -> impl Future<Output = Result<String, HTTPErr>> + Send;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) default_timeout: Duration,
    headers: Headers,
    auth: Auth,
    retry: RetryPolicy,
}

impl Client {
    /// Builds the underlying reqwest client from the configuration. The
    /// reqwest::Client::new() constructor panics on failure so the builder is used
    /// instead. reqwest pools connections internally; clone the client to share it.
    pub fn new(config: &Configuration) -> Result<Self, HTTPErr> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_certs(!config.verify_ssl);
        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| {
                HTTPErr::BuildClientErr(BuildClientErr {
                    source: e,
                    trace: trace!(),
                })
            })?;
            builder = builder.proxy(proxy);
        }
        let client = builder.build().map_err(|e| {
            HTTPErr::BuildClientErr(BuildClientErr {
                source: e,
                trace: trace!(),
            })
        })?;

        Ok(Client {
            client,
            base_url: config.host.clone(),
            default_timeout: config.timeout,
            headers: Headers {
                user_agent: config.user_agent.clone(),
                defaults: config.default_headers.clone(),
            },
            auth: config.auth(),
            retry: config.retry,
        })
    }

    pub fn build_request(&self, params: &Params) -> Result<(reqwest::Request, Meta), HTTPErr> {
        request::build(&self.client, &self.headers, &self.auth, params)
    }

    pub async fn send(
        &self,
        request: reqwest::Request,
        meta: &Meta,
    ) -> Result<reqwest::Response, HTTPErr> {
        let time_limit = match request.timeout() {
            Some(time_limit) => *time_limit,
            None => self.default_timeout,
        };
        // request server
        let response = timeout(time_limit, self.client.execute(request))
            .await
            .map_err(|e| {
                HTTPErr::TimeoutErr(TimeoutErr {
                    msg: e.to_string(),
                    request: meta.clone(),
                    trace: trace!(),
                })
            })?
            .map_err(|e| reqwest_err_to_http_client_err(e, meta, trace!()))?;
        Ok(response)
    }

    async fn execute_once(&self, params: &Params<'_>) -> Result<String, HTTPErr> {
        let (request, meta) = self.build_request(params)?;
        debug!(
            "sending {} (request id: {})",
            meta,
            request
                .headers()
                .get(crate::http::errors::REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
        );
        let response = self.send(request, &meta).await?;
        response::handle(response, &meta).await
    }
}

impl ClientI for Client {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    async fn execute(&self, params: Params<'_>) -> Result<String, HTTPErr> {
        let mut attempt: u32 = 0;
        loop {
            let err = match self.execute_once(&params).await {
                Ok(text) => return Ok(text),
                Err(e) => e,
            };
            attempt += 1;
            if !err.is_retryable() || attempt >= self.retry.max_attempts {
                return Err(err);
            }
            let wait = cooldown::delay(&self.retry.backoff, attempt - 1);
            warn!(
                "attempt {}/{} of {} failed, retrying in {}s: {}",
                attempt,
                self.retry.max_attempts,
                params.meta(),
                wait.as_secs(),
                err
            );
            sleep(wait).await;
        }
    }
}
