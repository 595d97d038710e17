//! Blocking libcurl transport.

use std::time::Duration;
use url::Url;

use super::{HttpResponse, Transport};
use crate::config::PfetchConfig;
use crate::outcome::{classify_curl_error, TransportError};

/// GETs with a reused curl Easy handle (keeps the connection to a host alive
/// between consecutive requests).
pub struct CurlTransport {
    easy: curl::easy::Easy,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: String,
    follow_redirects: bool,
}

impl CurlTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            easy: curl::easy::Easy::new(),
            timeout,
            connect_timeout,
            user_agent: user_agent.into(),
            follow_redirects: true,
        }
    }

    pub fn from_config(cfg: &PfetchConfig) -> Self {
        let mut t = Self::new(
            Duration::from_secs(cfg.request_timeout_secs),
            Duration::from_secs(cfg.connect_timeout_secs),
            cfg.user_agent.clone(),
        );
        t.follow_redirects = cfg.follow_redirects;
        t
    }

    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    fn configure(&mut self, url: &Url) -> Result<(), curl::Error> {
        let easy = &mut self.easy;
        easy.reset();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(self.follow_redirects)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        Ok(())
    }
}

impl Transport for CurlTransport {
    fn get(&mut self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.configure(url).map_err(|e| classify_curl_error(&e))?;

        let mut body = Vec::new();
        {
            let mut transfer = self.easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| classify_curl_error(&e))?;
            transfer.perform().map_err(|e| classify_curl_error(&e))?;
        }

        let status = self
            .easy
            .response_code()
            .map_err(|e| classify_curl_error(&e))?;
        Ok(HttpResponse { status, body })
    }
}
