// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP request engine for the Slowly API
//!
//! One [`HttpClient`] owns the connection pool for the lifetime of the
//! client; every call is an independent request/response exchange. Transient
//! upstream failures (500/502) are retried a fixed number of times, all
//! other non-success statuses map to a distinct [`SlowlyError`] kind.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, Proxy};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, warn};
use url::Url;

use crate::auth::{Device, PasscodeRequest, TokenRequest, TokenResponse, constants};
use crate::error::{Result, SlowlyError};
use crate::models::{FriendsResponse, LetterPage, MeResponse};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.getslowly.com/";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36";
const TIMEOUT_SECONDS: u64 = 30;
const MAX_TRIES: u32 = 3;

/// A remote endpoint: HTTP method plus path relative to the base URL
#[derive(Debug, Clone)]
pub(crate) struct Route {
    pub method: Method,
    pub path: String,
}

impl Route {
    fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
        }
    }

    fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
        }
    }

    fn url(&self, base: &Url) -> Result<Url> {
        Ok(base.join(&self.path)?)
    }
}

/// Low-level client: owns the reqwest connection pool, the device identity
/// and the bearer token.
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
    device: Device,
    token: RwLock<Option<String>>,
}

impl HttpClient {
    pub(crate) fn new(base_url: Url, device: Device, proxy: Option<Proxy>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ORIGIN,
            HeaderValue::from_static(constants::WEB_ORIGIN),
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(TIMEOUT_SECONDS));
        if let Some(proxy) = proxy {
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            device,
            token: RwLock::new(None),
        })
    }

    /// Replace (or clear) the bearer token used for authenticated calls.
    pub(crate) fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    pub(crate) fn has_token(&self) -> bool {
        self.bearer_token().is_some()
    }

    fn bearer_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    /// Current token, or fail fast before any request goes out.
    fn token(&self) -> Result<String> {
        self.bearer_token().ok_or(SlowlyError::NotAuthenticated)
    }

    /// Issue a request and deserialize the JSON response.
    ///
    /// 500/502 are retried with a short growing delay; everything else
    /// non-success is surfaced immediately via [`SlowlyError::from_status`].
    async fn request<T: DeserializeOwned>(
        &self,
        route: Route,
        query: Option<&[(&str, String)]>,
        body: Option<Value>,
    ) -> Result<T> {
        let url = route.url(&self.base_url)?;

        for attempt in 0..MAX_TRIES {
            debug!("{} {} (attempt {})", route.method, url, attempt + 1);

            let mut request = self.client.request(route.method.clone(), url.clone());
            if let Some(query) = query {
                request = request.query(query);
            }
            if let Some(body) = &body {
                request = request.json(body);
            }
            if let Some(token) = self.bearer_token() {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?;
            let status = response.status();

            if status.is_success() {
                let text = response.text().await?;
                return Ok(serde_json::from_str(&text)?);
            }

            if matches!(status.as_u16(), 500 | 502) && attempt + 1 < MAX_TRIES {
                let delay = Duration::from_secs((1 + attempt * 2) as u64);
                warn!(
                    "Slowly API returned {}, retrying in {:?}",
                    status.as_u16(),
                    delay
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            let text = response.text().await.unwrap_or_default();
            return Err(SlowlyError::from_status(status, extract_error(text)));
        }

        Err(SlowlyError::InvalidResponse(
            "retries exhausted without a response".to_string(),
        ))
    }

    /// `POST web/me` - the authenticated account's profile.
    pub(crate) async fn fetch_me(&self) -> Result<MeResponse> {
        self.token()?;
        let body = json!({
            "device": self.device,
            "trusted": true,
            "ver": constants::CLIENT_VER,
            "includes": "add_by_id,weather,paragraph",
        });
        self.request(Route::post("web/me"), None, Some(body)).await
    }

    /// `GET users/me/friends/v2` - current pen-pal matches.
    pub(crate) async fn fetch_friends(&self, requests: u32, dob: bool) -> Result<FriendsResponse> {
        let token = self.token()?;
        let query = [
            ("requests", requests.to_string()),
            ("dob", dob.to_string()),
            ("token", token),
        ];
        self.request(Route::get("users/me/friends/v2"), Some(&query), None)
            .await
    }

    /// `GET friend/{id}/all` - one page of the letter history with a friend.
    pub(crate) async fn fetch_friend_letters(&self, friend_id: i64, page: u32) -> Result<LetterPage> {
        let token = self.token()?;
        let query = [("page", page.to_string()), ("token", token)];
        self.request(
            Route::get(format!("friend/{friend_id}/all")),
            Some(&query),
            None,
        )
        .await
    }

    /// `POST auth/email/passcode` - ask the service to email a passcode.
    /// Unauthenticated.
    pub(crate) async fn request_passcode(&self, email: &str) -> Result<Value> {
        let body = serde_json::to_value(PasscodeRequest {
            email,
            device: &self.device,
            checkpass: false,
        })?;
        self.request(Route::post("auth/email/passcode"), None, Some(body))
            .await
    }

    /// `POST auth/email` - exchange an emailed passcode for a bearer token.
    /// Unauthenticated.
    pub(crate) async fn exchange_passcode(
        &self,
        email: &str,
        passcode: &str,
    ) -> Result<TokenResponse> {
        let body = serde_json::to_value(TokenRequest {
            email,
            passcode,
            device: &self.device,
        })?;
        self.request(Route::post("auth/email"), None, Some(body))
            .await
    }
}

/// Pull the `error` field out of a JSON error body, falling back to the raw
/// text.
fn extract_error(text: String) -> String {
    serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_url() {
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();
        let route = Route::get("users/me/friends/v2");
        assert_eq!(
            route.url(&base).unwrap().as_str(),
            "https://api.getslowly.com/users/me/friends/v2"
        );

        let route = Route::get(format!("friend/{}/all", 4821337));
        assert_eq!(
            route.url(&base).unwrap().as_str(),
            "https://api.getslowly.com/friend/4821337/all"
        );
    }

    #[test]
    fn test_route_respects_base_override() {
        let base = Url::parse("http://127.0.0.1:8080/api/").unwrap();
        let route = Route::post("auth/email");
        assert_eq!(
            route.url(&base).unwrap().as_str(),
            "http://127.0.0.1:8080/api/auth/email"
        );
    }

    #[test]
    fn test_extract_error_prefers_json_field() {
        let message = extract_error(r#"{"error": "invalid passcode"}"#.to_string());
        assert_eq!(message, "invalid passcode");

        let message = extract_error("upstream exploded".to_string());
        assert_eq!(message, "upstream exploded");

        // JSON body without an error field falls back to the raw text.
        let message = extract_error(r#"{"status": "bad"}"#.to_string());
        assert_eq!(message, r#"{"status": "bad"}"#);
    }

    #[test]
    fn test_token_storage() {
        let http = HttpClient::new(
            Url::parse(DEFAULT_BASE_URL).unwrap(),
            Device::default(),
            None,
        )
        .unwrap();
        assert!(!http.has_token());
        assert!(matches!(http.token(), Err(SlowlyError::NotAuthenticated)));

        http.set_token(Some("sekrit".to_string()));
        assert!(http.has_token());
        assert_eq!(http.token().unwrap(), "sekrit");

        http.set_token(None);
        assert!(!http.has_token());
    }
}
