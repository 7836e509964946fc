// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! High-level Slowly client

use reqwest::Proxy;
use tracing::debug;
use url::Url;

use crate::auth::Device;
use crate::error::Result;
use crate::http::{DEFAULT_BASE_URL, HttpClient};
use crate::models::{LetterPaginator, User};
use crate::state::ClientState;

/// Asynchronous client for the Slowly API.
///
/// One method per remote operation; every call is an independent
/// request/response exchange against `https://api.getslowly.com/`. The
/// client holds the HTTP connection pool for its lifetime and releases it
/// on drop.
///
/// # Examples
///
/// ```no_run
/// use slowly::Client;
///
/// #[tokio::main]
/// async fn main() -> slowly::Result<()> {
///     let client = Client::new()?;
///     client.login(std::env::var("SLOWLY_TOKEN").unwrap());
///
///     for friend in client.fetch_friends().await? {
///         println!("{} has {} unread letters", friend, friend.unread.unwrap_or(0));
///     }
///     Ok(())
/// }
/// ```
pub struct Client {
    http: HttpClient,
    state: ClientState,
}

impl Client {
    /// Create a client against the production API with a fresh device
    /// identity.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a client with non-default settings.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Store a bearer token for subsequent authenticated calls.
    ///
    /// Surrounding whitespace is trimmed. Tokens are obtained through
    /// [`request_passcode`](Self::request_passcode) and
    /// [`exchange_passcode`](Self::exchange_passcode), or lifted from an
    /// existing web session.
    pub fn login(&self, token: impl AsRef<str>) {
        debug!("Logging in with a bearer token");
        self.http
            .set_token(Some(token.as_ref().trim().to_string()));
    }

    /// Drop the stored token and the cached users.
    pub fn logout(&self) {
        debug!("Logging out");
        self.http.set_token(None);
        self.state.clear();
    }

    /// Whether a bearer token is currently stored.
    pub fn is_logged_in(&self) -> bool {
        self.http.has_token()
    }

    /// Ask the service to email a login passcode to `email`.
    pub async fn request_passcode(&self, email: &str) -> Result<()> {
        debug!("Requesting a passcode for {}", email);
        self.http.request_passcode(email).await?;
        Ok(())
    }

    /// Exchange an emailed passcode for a bearer token.
    ///
    /// The token is returned rather than stored; pass it to
    /// [`login`](Self::login) to authenticate this client.
    pub async fn exchange_passcode(&self, email: &str, passcode: &str) -> Result<String> {
        debug!("Exchanging passcode for {}", email);
        let response = self.http.exchange_passcode(email, passcode).await?;
        Ok(response.token)
    }

    /// Fetch the authenticated account's profile.
    pub async fn fetch_profile(&self) -> Result<User> {
        let me = self.http.fetch_me().await?.me;
        self.state.store_user(&me);
        Ok(me)
    }

    /// Fetch the current pen-pal matches.
    pub async fn fetch_friends(&self) -> Result<Vec<User>> {
        let friends = self.http.fetch_friends(1, true).await?.friends;
        debug!("Fetched {} friends", friends.len());
        for friend in &friends {
            self.state.store_user(friend);
        }
        Ok(friends)
    }

    /// Iterate the letter history exchanged with `friend_id`, newest page
    /// first, following pagination lazily.
    pub fn letters(&self, friend_id: i64) -> LetterPaginator<'_> {
        LetterPaginator::new(&self.http, friend_id)
    }

    /// Look up an already-fetched user by id without a network round trip.
    pub fn user(&self, id: i64) -> Option<User> {
        self.state.user(id)
    }
}

/// Builder for [`Client`] with a custom base URL, device or proxy.
pub struct ClientBuilder {
    base_url: String,
    device: Device,
    proxy: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            device: Device::new(),
            proxy: None,
        }
    }

    /// Point the client at a different API endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a caller-managed device identity instead of a fresh one.
    pub fn device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Locale reported in the device identity.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.device.locale = locale.into();
        self
    }

    /// Route all requests through an HTTP(S) proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;
        let proxy = self.proxy.map(Proxy::all).transpose()?;

        Ok(Client {
            http: HttpClient::new(base_url, self.device, proxy)?,
            state: ClientState::default(),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
