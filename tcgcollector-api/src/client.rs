use crate::error::{ErrorResponse, SendError, TcgApiError};
use crate::macros::setter;
use crate::request::{FromResponse, Request, RequestData};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_BASE_URL: &str = "https://www.tcgcollector.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const APPLICATION_JSON: &str = "application/json";

/// TCG Collector API client.
///
/// Configuration is fixed once built, so a single client can be shared (for
/// example behind an `Arc`) by any number of concurrent callers.
#[derive(Debug)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
    api_key: SecretString,
}

impl Client {
    /// Client for the production service with the default transport.
    pub fn new(api_key: &str) -> Self {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: &str) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, TcgApiError>
    where
        R: Request,
    {
        self.send_with(request, &CallOptions::default()).await
    }

    pub async fn send_with<R>(
        &self,
        request: R,
        options: &CallOptions,
    ) -> Result<R::Response, TcgApiError>
    where
        R: Request,
    {
        let endpoint = request.endpoint();
        self.execute(R::METHOD, &endpoint, request.data(), options)
            .await
    }

    /// Performs one call against `path` (which may carry its own query string),
    /// sending `body` as JSON when present.
    ///
    /// Decoding into [`EmptyResponse`](crate::EmptyResponse) skips the
    /// response body entirely.
    pub async fn dispatch<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &CallOptions,
    ) -> Result<T, TcgApiError>
    where
        B: Serialize + ?Sized,
        T: FromResponse,
    {
        let data = match body {
            Some(body) => RequestData::Json(body),
            None => RequestData::Empty,
        };
        self.execute(method, path, data, options).await
    }

    async fn execute<D, T>(
        &self,
        method: Method,
        path: &str,
        data: RequestData<&D>,
        options: &CallOptions,
    ) -> Result<T, TcgApiError>
    where
        D: Serialize + ?Sized,
        T: FromResponse,
    {
        let request = self.prepare(method, path, data, options.timeout)?;
        let exchange = self.exchange(request);

        match &options.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(TcgApiError::Send(SendError::Cancelled)),
                result = exchange => result,
            },
            None => exchange.await,
        }
    }

    fn prepare<D>(
        &self,
        method: Method,
        path: &str,
        data: RequestData<&D>,
        timeout: Option<Duration>,
    ) -> Result<reqwest::Request, TcgApiError>
    where
        D: Serialize + ?Sized,
    {
        let body = match data {
            RequestData::Json(payload) => {
                Some(serde_json::to_vec(payload).map_err(TcgApiError::Serialize)?)
            }
            _ => None,
        };

        let url = self.base_url.join(path).map_err(TcgApiError::Path)?;

        let mut builder = self
            .http
            .request(method, url)
            .bearer_auth(self.api_key.expose_secret())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON);

        if let RequestData::Query(query) = data {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(TcgApiError::Build)
    }

    async fn exchange<T>(&self, request: reqwest::Request) -> Result<T, TcgApiError>
    where
        T: FromResponse,
    {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(SendError::from)?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if status.as_u16() >= 400 {
            let body = response.bytes().await.map_err(SendError::from)?;
            // A `null` envelope decodes as empty.
            let error: Option<ErrorResponse> =
                serde_json::from_slice(&body).map_err(TcgApiError::DecodeErrorResponse)?;
            return Err(TcgApiError::Api {
                status,
                error: error.unwrap_or_default(),
            });
        }

        if !T::READS_BODY {
            tracing::trace!("response body ignored");
            return T::from_body(&[]).map_err(TcgApiError::DecodeResponse);
        }

        let body = response.bytes().await.map_err(SendError::from)?;
        T::from_body(&body).map_err(TcgApiError::DecodeResponse)
    }
}

/// Configuration applied, in call order, before the client is built.
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: SecretString,
    base_url: Url,
    http: Option<reqwest::Client>,
    timeout: Duration,
}

impl ClientBuilder {
    fn new(api_key: &str) -> Self {
        Self {
            api_key: SecretString::from(api_key.to_owned()),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            http: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the service address.
    ///
    /// # Panics
    ///
    /// If `base_url` is empty, is not an absolute URL, or uses a scheme other
    /// than `http`/`https`.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = parse_base_url(base_url);
        self
    }

    /// Replaces the transport. The default timeout is not applied to it.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Client {
        let http = self.http.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .expect("Failed to create HTTP client")
        });

        Client {
            base_url: self.base_url,
            http,
            api_key: self.api_key,
        }
    }
}

fn parse_base_url(base_url: &str) -> Url {
    if base_url.is_empty() {
        panic!("base URL cannot be empty");
    }
    let url = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => panic!("invalid base URL: {e}"),
    };
    if !matches!(url.scheme(), "http" | "https") {
        panic!(
            "invalid base URL scheme: {} (must be http or https)",
            url.scheme()
        );
    }
    url
}

/// Per-call cancellation and deadline.
#[derive(Default, Debug, Clone)]
pub struct CallOptions {
    cancel: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt cancel: CancellationToken);
    setter!(opt timeout: Duration);
}
