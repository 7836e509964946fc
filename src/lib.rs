// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! # Slowly API Client
//!
//! An unofficial asynchronous client for the [Slowly](https://slowly.app)
//! pen-pal app, wrapping its HTTP/JSON API: fetch your profile and matched
//! friends, page through letter histories, and perform the email passcode
//! login flow.
//!
//! ## Runtime requirements
//!
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`
//! with rustls.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! slowly = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! Basic usage:
//! ```no_run
//! use slowly::Client;
//!
//! #[tokio::main]
//! async fn main() -> slowly::Result<()> {
//!     let client = Client::new()?;
//!     client.login(std::env::var("SLOWLY_TOKEN").unwrap());
//!
//!     let me = client.fetch_profile().await?;
//!     println!("Logged in as {}", me);
//!
//!     for friend in client.fetch_friends().await? {
//!         let letters = client.letters(friend.id).flatten().await?;
//!         println!("{}: {} letters", friend, letters.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Logging in without a token
//!
//! ```no_run
//! # use slowly::Client;
//! # async fn run() -> slowly::Result<()> {
//! let client = Client::new()?;
//! client.request_passcode("pen@example.com").await?;
//! // ... read the passcode from the mailbox ...
//! let token = client.exchange_passcode("pen@example.com", "123456").await?;
//! client.login(&token);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every method returns a typed model or a distinct [`SlowlyError`] kind:
//! transport problems are [`SlowlyError::Network`], a rejected or missing
//! token is [`SlowlyError::Authentication`] /
//! [`SlowlyError::NotAuthenticated`], remote throttling is
//! [`SlowlyError::RateLimit`], and payloads that do not match the expected
//! shape surface as [`SlowlyError::Json`] rather than as a
//! partially-populated object.
//!
//! ## Out of scope
//!
//! Not an official SDK. The crate only proxies the Slowly service and
//! inherits its availability and rate limits; it persists nothing locally.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub(crate) mod http;
pub(crate) mod state;

pub use auth::Device;
pub use client::{Client, ClientBuilder};
pub use error::{Result, SlowlyError};
pub use models::{Letter, LetterPaginator, User};
