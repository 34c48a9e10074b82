use crate::{ClientError, ClientResult, RequestHook};

use std::sync::Arc;

use log::{debug, warn};
use reqwest::Request;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderName, HeaderValue};

/// Echoes the CSRF cookie back as a request header.
///
/// The jar is read on every request; the server may rotate the token at any
/// time, so nothing is cached here.
pub struct CsrfHeader {
    cookies: Arc<Jar>,
    cookie_name: String,
    header_name: HeaderName,
}

impl CsrfHeader {
    #[track_caller]
    pub fn new(cookies: Arc<Jar>, cookie_name: &str, header_name: &str) -> ClientResult<Self> {
        let header_name = HeaderName::from_bytes(header_name.as_bytes()).map_err(|e| {
            ClientError::invalid_input(format!("invalid CSRF header name '{header_name}': {e}"))
        })?;

        Ok(Self {
            cookies,
            cookie_name: cookie_name.to_string(),
            header_name,
        })
    }

    /// Current token for `request`'s URL, if the server has set one
    pub fn token_for(&self, request: &Request) -> Option<String> {
        let cookies = self.cookies.cookies(request.url())?;
        let cookies = cookies.to_str().ok()?;
        find_cookie(cookies, &self.cookie_name).map(String::from)
    }
}

impl RequestHook for CsrfHeader {
    fn name(&self) -> &'static str {
        "csrf_header"
    }

    fn on_request(&self, request: &mut Request) {
        let Some(token) = self.token_for(request) else {
            // Normal before the priming call; the server decides whether to reject
            debug!("No CSRF cookie for {}", request.url().path());
            return;
        };

        match HeaderValue::from_str(&token) {
            Ok(value) => {
                request.headers_mut().insert(self.header_name.clone(), value);
            }
            Err(_) => warn!("CSRF cookie is not a valid header value, sending without it"),
        }
    }
}

/// Find `name` in a `Cookie` header value ("a=1; b=2")
pub(crate) fn find_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
