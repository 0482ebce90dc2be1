use crate::api_structures::ApiResponse;
use crate::error::Error;
use crate::params::Params;
use crate::transport::{Request, Response, Transport, DEFAULT_TRANSPORT};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

/// Configuration of a [`Client`]
///
/// It can be read from a toml file:
/// ```toml
/// url = "https://en.wikipedia.org/w/api.php"
/// user_agent = "my-bot/1.0 (contact@example.org)"
/// ```
#[derive(Deserialize, Clone, Default)]
pub struct Options {
    /// Full url of the api, e.g. https://en.wikipedia.org/w/api.php
    pub url: String,
    /// Http transport to use, a shared default reqwest client if none
    #[serde(skip)]
    pub transport: Option<Arc<dyn Transport>>,
    /// User-Agent header to send
    pub user_agent: Option<String>,
}

impl Options {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("url", &self.url)
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Client of a wikimedia api (wikipedia, wiktionary, ...)
///
/// The client holds no state besides its configuration, it can be cloned
/// and shared between threads.
#[derive(Debug, Clone)]
pub struct Client {
    options: Options,
}

impl Client {
    /// Check the configuration and build a client. No request is made.
    pub fn new(options: Options) -> Result<Self, Error> {
        if options.url.is_empty() {
            return Err(Error::MissingUrl);
        }
        check_url_syntax(&options.url).map_err(|source| Error::InvalidUrl {
            url: options.url.clone(),
            source,
        })?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Query the api, see https://www.mediawiki.org/wiki/API:Query
    ///
    /// The `format` parameter is always forced to `json`.
    /// The http status is not checked, an error body is decoded like any other.
    pub fn query(&self, params: impl Into<Params>) -> Result<ApiResponse, Error> {
        let mut params = params.into();
        params.set("format", "json");
        let query_url = format!("{}?{}", self.options.url, params.encode());

        let response = self.get(&query_url)?;
        if !response.status.is_success() {
            log::warn!("{} answered with status {}", query_url, response.status);
        }
        // a `null` body decodes to an empty response
        let api_response: Option<ApiResponse> = serde_json::from_reader(response.body)?;
        Ok(api_response.unwrap_or_default())
    }

    fn get(&self, url: &str) -> Result<Response, Error> {
        log::debug!("GET {}", url);
        let url = Url::parse(url).map_err(|e| Error::Network(Box::new(e)))?;

        let mut headers = HeaderMap::new();
        if let Some(user_agent) = self.options.user_agent.as_deref() {
            if !user_agent.is_empty() {
                let value =
                    HeaderValue::from_str(user_agent).map_err(|e| Error::Network(Box::new(e)))?;
                headers.insert(USER_AGENT, value);
            }
        }

        let request = Request { url, headers };
        let response = match &self.options.transport {
            Some(transport) => transport.execute(request),
            // reqwest::blocking::Client has an inherent `execute`, the trait one is needed
            None => Transport::execute(&*DEFAULT_TRANSPORT, request),
        };
        response.map_err(Error::Network)
    }
}

/// Relative references are accepted, they fail only when dispatched
fn check_url_syntax(url: &str) -> Result<(), url::ParseError> {
    match Url::parse(url) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://localhost/")?;
            base.join(url).map(|_| ())
        }
        res => res.map(|_| ()),
    }
}
