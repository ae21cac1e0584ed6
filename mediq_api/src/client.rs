//! HTTP client for the clinic REST API.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    context::SESSION_COOKIE,
    types::{Envelope, Identity, PageEnvelope},
    ApiConfig, Error, PageQuery, RequestContext, Resource,
};

/// HTTP client for the clinic REST API.
///
/// Holds no session state of its own: every call takes a [`RequestContext`]
/// whose cookie is forwarded verbatim. Cheap to clone; the underlying
/// connection pool is shared between clones.
#[derive(Clone)]
pub struct Client {
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client from a validated [`ApiConfig`].
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport
            })?;
        Ok(Self {
            base_api_url: config.base_url.clone(),
            http,
        })
    }

    /// Creates a client with a custom base URL and the default timeout.
    /// Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(&ApiConfig::with_base_url(base_url))
    }

    fn get_url(&self, path: &str, query: Option<&PageQuery>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn request(&self, method: Method, url: Url, ctx: &RequestContext) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .header("accept", "application/json, text/plain, */*");
        if let Some(cookie) = ctx.cookie_header() {
            req = req.header("cookie", cookie);
        }
        req
    }

    async fn send_json<T>(&self, req: reqwest::RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            Error::from(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Decode
        })
    }

    /// Fetches one page of a collection, preserving server item order.
    pub async fn list<T>(
        &self,
        resource: Resource,
        ctx: &RequestContext,
        query: &PageQuery,
    ) -> Result<PageEnvelope<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(resource.path(), Some(query))?;
        self.send_json(self.request(Method::GET, url, ctx)).await
    }

    /// Asks the identity endpoint who the forwarded cookie belongs to.
    ///
    /// One call per invocation: no retries and no caching, since a page
    /// re-render will re-resolve anyway.
    pub async fn current_identity(
        &self,
        ctx: &RequestContext,
    ) -> Result<Envelope<Identity>, Error> {
        let url = self.get_url("/auth/me", None)?;
        self.send_json(self.request(Method::GET, url, ctx)).await
    }

    /// Exchanges credentials for a session token taken from `Set-Cookie`.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, Error> {
        let url = self.get_url("/auth/login", None)?;
        let resp = self
            .http
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Login request failed: {}", e);
                Error::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet = truncate_body(&body);
            tracing::error!("Login failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let prefix = format!("{SESSION_COOKIE}=");
        for value in resp.headers().get_all(reqwest::header::SET_COOKIE) {
            if let Ok(raw) = value.to_str() {
                if let Some(rest) = raw.strip_prefix(&prefix) {
                    let token = rest.split_once(';').map_or(rest, |(t, _)| t);
                    if !token.is_empty() {
                        return Ok(token.to_string());
                    }
                }
            }
        }
        Err(Error::NoSession)
    }

    /// Calls the upstream logout endpoint. Returns `true` on a 204, which
    /// means the session is gone and the caller must drop its cookie.
    pub async fn logout(&self, ctx: &RequestContext) -> Result<bool, Error> {
        let url = self.get_url("/auth/logout", None)?;
        let resp = self
            .request(Method::POST, url, ctx)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Logout request failed: {}", e);
                Error::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet = truncate_body(&body);
            tracing::error!("Logout failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }
        Ok(status == StatusCode::NO_CONTENT)
    }

    /// Creates an entity with a form-encoded payload; the upstream echoes
    /// the created entity back.
    pub async fn create<T, F>(
        &self,
        resource: Resource,
        ctx: &RequestContext,
        form: &F,
    ) -> Result<Envelope<T>, Error>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let url = self.get_url(resource.path(), None)?;
        self.send_json(self.request(Method::POST, url, ctx).form(form))
            .await
    }

    /// Updates an entity with a form-encoded payload.
    pub async fn update<T, F>(
        &self,
        resource: Resource,
        id: i64,
        ctx: &RequestContext,
        form: &F,
    ) -> Result<Envelope<T>, Error>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let url = self.get_url(&format!("{}/{}", resource.path(), id), None)?;
        self.send_json(self.request(Method::PUT, url, ctx).form(form))
            .await
    }

    /// Soft-deletes an entity via the `DeleteById` route.
    pub async fn soft_delete<T>(
        &self,
        resource: Resource,
        id: i64,
        ctx: &RequestContext,
    ) -> Result<Envelope<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(&format!("{}/DeleteById/{}", resource.path(), id), None)?;
        self.send_json(self.request(Method::PUT, url, ctx)).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
