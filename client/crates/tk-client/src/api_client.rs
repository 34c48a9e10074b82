use crate::{
    AuthFailureKind, ClientError, ClientResult, Pipeline, ResponseMeta, classify_auth_failure,
};

use tk_config::ApiConfig;

use std::panic::Location;
use std::sync::Arc;

use bytes::Bytes;
use error_location::ErrorLocation;
use log::debug;
use reqwest::cookie::Jar;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the timekeeping REST API.
///
/// Every call goes through the [`Pipeline`]. Cookies (session and CSRF) live
/// in a jar shared with the pipeline hooks. Cloning is cheap and clones share
/// the jar.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    http: ReqwestClient,
    cookies: Arc<Jar>,
    pipeline: Pipeline,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `config` - API root and timeout (e.g. "http://127.0.0.1:8000/api")
    /// * `cookies` - Jar the CSRF hook reads from
    /// * `pipeline` - Hooks applied to every request/response
    #[track_caller]
    pub fn new(config: &ApiConfig, cookies: Arc<Jar>, pipeline: Pipeline) -> ClientResult<Self> {
        let base_url = config.normalized_base_url().to_string();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let http = ReqwestClient::builder()
            .cookie_provider(cookies.clone())
            .timeout(config.timeout())
            .build()?;

        debug!("API client ready for {base_url} with {pipeline:?}");

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                base_url,
                http,
                cookies,
                pipeline,
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn cookies(&self) -> &Arc<Jar> {
        &self.inner.cookies
    }

    /// Build a request against the API root
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.inner.base_url, path);
        self.inner.http.request(method, &url)
    }

    /// Run the pipeline around a request and map non-2xx statuses to errors
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Response> {
        let mut request = req.build()?;
        self.inner.pipeline.apply_request(&mut request);

        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url.path());

        let response = self.inner.http.execute(request).await?;
        let status = response.status();

        self.inner.pipeline.apply_response(&ResponseMeta {
            method,
            url: url.clone(),
            status,
        });

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized {
                status: status.as_u16(),
                path: url.path().to_string(),
                expected: classify_auth_failure(url.path()) == AuthFailureKind::Expected,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET and decode a JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    /// GET for side effects only (e.g. cookie priming); the body is discarded
    pub async fn get(&self, path: &str) -> ClientResult<()> {
        self.execute(self.request(Method::GET, path)).await?;
        Ok(())
    }

    /// GET a binary body (report downloads)
    pub async fn get_bytes(&self, path: &str) -> ClientResult<Bytes> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Ok(response.bytes().await?)
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path).json(body);
        let response = self.execute(req).await?;
        Self::decode(response).await
    }

    /// POST without a body and decode the JSON response
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.execute(self.request(Method::POST, path)).await?;
        Self::decode(response).await
    }

    /// POST without a body; the response body is discarded
    pub async fn post(&self, path: &str) -> ClientResult<()> {
        self.execute(self.request(Method::POST, path)).await?;
        Ok(())
    }
}

/// Pull a human message out of an error body: `{"message"}`, `{"detail"}`
/// or `{"error": {"message"}}`, else the status reason.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let from_body = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        value
            .get("message")
            .or_else(|| value.get("detail"))
            .or_else(|| value.get("error").and_then(|e| e.get("message")))
            .and_then(Value::as_str)
            .map(String::from)
    });

    from_body.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    })
}
