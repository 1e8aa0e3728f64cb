//! REST API client for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the browser transport fails every request with a
//! network error, since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! `ApiClient` is generic over an [`ApiTransport`] and a [`TokenStore`] so the
//! auth flows can run against a stub backend in tests. The access token is read
//! from the store on every request rather than captured at construction, so a
//! token written after login is sent immediately.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`AuthError`]: transport errors become
//! `Network`, non-2xx statuses and unexpected payloads become `Rejected`
//! carrying the server's `message` when it sent one. Callers decide what the
//! user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{LoginRequest, NewArrivalsResponse, Product, SignUpRequest, UserData, UserDataResponse};
use crate::state::session::{BrowserTokenStore, TokenStore};

/// Backend base URL used when `STOREFRONT_API_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Request header carrying the stored access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

/// Base URL baked in at build time.
#[must_use]
pub fn configured_base_url() -> &'static str {
    option_env!("STOREFRONT_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Failure of a storefront API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never completed (offline, CORS, DNS, ...).
    #[error("{0}")]
    Network(String),
    /// A required form field was empty; no request was sent.
    #[error("{0}")]
    Validation(&'static str),
    /// The server answered with a failure status or an unusable payload.
    #[error("Request failed with status code {status}")]
    Rejected { status: u16, message: Option<String> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved request handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub token: Option<String>,
    pub body: Option<Value>,
}

/// Status and decoded JSON body of a completed request.
///
/// Bodies that are not JSON decode as `Value::Null`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves an [`HttpRequest`] over the wire.
///
/// `?Send` because browser futures are not `Send`.
#[async_trait(?Send)]
pub trait ApiTransport {
    /// Perform the request.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, String>;
}

/// `fetch`-backed transport. Only functional with the `hydrate` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl ApiTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(token) = request.token.as_deref() {
                builder = builder.header(ACCESS_TOKEN_HEADER, token);
            }
            let resp = match request.body {
                Some(body) => builder.json(&body).map_err(|e| e.to_string())?.send().await,
                None => builder.send().await,
            }
            .map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.json::<Value>().await.unwrap_or(Value::Null);
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}

/// HTTP client bound to one base URL.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport, S = BrowserTokenStore> {
    base_url: String,
    transport: T,
    tokens: S,
}

impl ApiClient {
    /// Client used by the UI: build-time base URL, `fetch`, `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(configured_base_url(), BrowserTransport, BrowserTokenStore)
    }
}

impl<T: ApiTransport, S: TokenStore> ApiClient<T, S> {
    pub fn new(base_url: &str, transport: T, tokens: S) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), transport, tokens }
    }

    /// Absolute URL for `path`, joined with exactly one `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST` `body` as JSON to `path`.
    ///
    /// # Errors
    ///
    /// `Network` when the transport fails, `Rejected` on a non-2xx status.
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, AuthError> {
        let body = serde_json::to_value(body).map_err(|e| AuthError::Network(e.to_string()))?;
        self.send(Method::Post, path, Some(body)).await
    }

    /// `GET` `path`.
    ///
    /// # Errors
    ///
    /// `Network` when the transport fails, `Rejected` on a non-2xx status.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, AuthError> {
        self.send(Method::Get, path, None).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResponse, AuthError> {
        let request = HttpRequest { method, url: self.endpoint(path), token: self.tokens.load(), body };
        log::debug!("api: {:?} {}", request.method, request.url);
        let response = self.transport.send(request).await.map_err(AuthError::Network)?;
        if !response.is_success() {
            return Err(AuthError::Rejected { status: response.status, message: body_message(&response.body) });
        }
        Ok(response)
    }

    /// `POST /login`. Yields the access token issued by the backend.
    ///
    /// # Errors
    ///
    /// Any transport or status failure, or a success payload without a token.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, AuthError> {
        let response = self.post("/login", request).await?;
        login_token(&response.body).ok_or_else(|| AuthError::Rejected {
            status: response.status,
            message: body_message(&response.body),
        })
    }

    /// `POST /signup`. Succeeds only when the backend answers `status: "ok"`.
    ///
    /// # Errors
    ///
    /// Any transport or status failure, or a payload whose `status` is not `"ok"`.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<(), AuthError> {
        let response = self.post("/signup", request).await?;
        if response.body.get("status").and_then(Value::as_str) == Some("ok") {
            return Ok(());
        }
        Err(AuthError::Rejected {
            status: response.status,
            message: Some(body_message(&response.body).unwrap_or_else(|| "Signup failed".to_owned())),
        })
    }

    /// `GET /user`: the wish list and cart behind the header badges.
    ///
    /// # Errors
    ///
    /// Any transport or status failure, or a payload without a `user` object.
    pub async fn fetch_user_data(&self) -> Result<UserData, AuthError> {
        let response = self.get("/user").await?;
        let parsed: UserDataResponse = decode(&response)?;
        match parsed {
            UserDataResponse { status: Some(status), .. } if status != "ok" => {
                Err(AuthError::Rejected { status: response.status, message: body_message(&response.body) })
            }
            UserDataResponse { user: Some(user), .. } => Ok(user),
            UserDataResponse { user: None, .. } => Err(AuthError::Rejected { status: response.status, message: None }),
        }
    }

    /// `GET /newArrivalList`: products featured on the home page.
    ///
    /// # Errors
    ///
    /// Any transport or status failure, or an undecodable payload.
    pub async fn fetch_new_arrivals(&self) -> Result<Vec<Product>, AuthError> {
        let response = self.get("/newArrivalList").await?;
        let parsed: NewArrivalsResponse = decode(&response)?;
        Ok(parsed.new_arrival_list)
    }
}

/// The access token in a login payload: a non-empty string, or a non-zero
/// number rendered in decimal (the backend issues numeric user ids).
pub(crate) fn login_token(body: &Value) -> Option<String> {
    match body.get("user")? {
        Value::String(token) if !token.is_empty() => Some(token.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Server-supplied `message`, if any.
pub(crate) fn body_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_owned)
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D, AuthError> {
    serde_json::from_value(response.body.clone()).map_err(|e| {
        log::warn!("api: undecodable response body: {e}");
        AuthError::Rejected { status: response.status, message: None }
    })
}
