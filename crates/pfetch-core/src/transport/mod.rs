//! HTTP transport seam.
//!
//! The fetcher only needs "GET this URL, give me status and body". The
//! [`Transport`] trait keeps that seam small so tests can substitute a mock;
//! [`CurlTransport`] is the real implementation.

mod curl_easy;

pub use curl_easy::CurlTransport;

use crate::outcome::TransportError;
use url::Url;

/// Final response of a GET (after redirects, when followed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Issues one blocking GET at a time.
pub trait Transport {
    fn get(&mut self, url: &Url) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn get(&mut self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}
