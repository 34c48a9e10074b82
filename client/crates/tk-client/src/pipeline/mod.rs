//! Cross-cutting hooks applied to every API call.
//!
//! Request hooks run in insertion order on the fully built request, just
//! before it is sent. Response hooks run in insertion order once a response
//! (of any status) has arrived; transport failures never reach them. Hooks
//! observe and decorate, they never retry or replace the response.

mod auth_failure_redirect;
mod csrf_header;
mod probe_endpoints;

pub use auth_failure_redirect::AuthFailureRedirect;
pub use csrf_header::CsrfHeader;
#[cfg(test)]
pub(crate) use csrf_header::find_cookie;
pub use probe_endpoints::{AuthFailureKind, SESSION_PROBE_ENDPOINTS, classify_auth_failure};

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, Request, StatusCode, Url};

/// Runs against every outbound request
pub trait RequestHook: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_request(&self, request: &mut Request);
}

/// Runs against every received response
pub trait ResponseHook: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_response(&self, response: &ResponseMeta);
}

/// What a response hook gets to see about an exchange
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
}

impl ResponseMeta {
    pub fn is_auth_failure(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED || self.status == StatusCode::FORBIDDEN
    }
}

/// Ordered list of request and response hooks
#[derive(Clone, Default)]
pub struct Pipeline {
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_request_hook<H: RequestHook + 'static>(&mut self, hook: H) -> &mut Self {
        self.request_hooks.push(Arc::new(hook));
        self
    }

    pub fn push_response_hook<H: ResponseHook + 'static>(&mut self, hook: H) -> &mut Self {
        self.response_hooks.push(Arc::new(hook));
        self
    }

    /// Register one value as both a request and a response hook
    pub fn push_hook<H: RequestHook + ResponseHook + 'static>(&mut self, hook: H) -> &mut Self {
        let hook = Arc::new(hook);
        self.request_hooks.push(hook.clone());
        self.response_hooks.push(hook);
        self
    }

    pub fn apply_request(&self, request: &mut Request) {
        for hook in &self.request_hooks {
            hook.on_request(request);
        }
    }

    pub fn apply_response(&self, response: &ResponseMeta) {
        for hook in &self.response_hooks {
            hook.on_response(response);
        }
    }

    pub fn request_hook_names(&self) -> Vec<&'static str> {
        self.request_hooks.iter().map(|h| h.name()).collect()
    }

    pub fn response_hook_names(&self) -> Vec<&'static str> {
        self.response_hooks.iter().map(|h| h.name()).collect()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("request_hooks", &self.request_hook_names())
            .field("response_hooks", &self.response_hook_names())
            .finish()
    }
}
