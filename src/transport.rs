//! The http layer used by the [`Client`](crate::Client).
//!
//! Anything able to do a GET can be plugged in by implementing [`Transport`],
//! `reqwest::blocking::Client` is used by default.
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::io::Read;
use url::Url;

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

lazy_static::lazy_static! {
    // shared by all clients without a custom transport, like a default http client
    pub(crate) static ref DEFAULT_TRANSPORT: reqwest::blocking::Client =
        reqwest::blocking::Client::new();
}

/// A GET request, without body
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Url,
    pub headers: HeaderMap,
}

pub struct Response {
    pub status: StatusCode,
    /// the body is not buffered, it is read while being decoded
    pub body: Box<dyn Read + Send>,
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .finish()
    }
}

pub trait Transport: Send + Sync {
    fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

impl Transport for reqwest::blocking::Client {
    fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let response = self.get(request.url).headers(request.headers).send()?;
        log::trace!("Response headers: {:#?}", response.headers());
        Ok(Response {
            status: response.status(),
            body: Box::new(response),
        })
    }
}
