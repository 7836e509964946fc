// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contract tests for the public client surface that hold without a live
//! Slowly account: fail-fast authentication checks and error-kind
//! distinctions.

use slowly::{Client, SlowlyError};

#[tokio::test]
async fn authenticated_endpoints_fail_fast_without_login() {
    let client = Client::new().unwrap();

    // No request goes out; the client refuses locally.
    let err = client.fetch_profile().await.unwrap_err();
    assert!(matches!(err, SlowlyError::NotAuthenticated));

    let err = client.fetch_friends().await.unwrap_err();
    assert!(matches!(err, SlowlyError::NotAuthenticated));

    let err = client.letters(4821337).next().await.unwrap_err();
    assert!(matches!(err, SlowlyError::NotAuthenticated));
}

#[tokio::test]
async fn logout_revokes_access() {
    let client = Client::new().unwrap();
    client.login("some-token");
    assert!(client.is_logged_in());

    client.logout();
    let err = client.fetch_friends().await.unwrap_err();
    assert!(matches!(err, SlowlyError::NotAuthenticated));
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    // Nothing listens on this port; the connection is refused immediately.
    let client = Client::builder()
        .base_url("http://127.0.0.1:9/")
        .build()
        .unwrap();
    client.login("irrelevant");

    let err = client.fetch_friends().await.unwrap_err();
    assert!(matches!(err, SlowlyError::Network(_)));
    assert!(err.is_recoverable());

    // The unauthenticated flow fails the same way, and distinctly from an
    // authentication rejection.
    let err = client.request_passcode("pen@example.com").await.unwrap_err();
    assert!(matches!(err, SlowlyError::Network(_)));
    assert!(!matches!(err, SlowlyError::Authentication(_)));
}

#[test]
fn builder_accepts_proxy_and_locale() {
    let client = Client::builder()
        .proxy("http://127.0.0.1:3128")
        .locale("ja")
        .build();
    assert!(client.is_ok());
}

#[test]
fn user_cache_starts_empty() {
    let client = Client::new().unwrap();
    assert!(client.user(1).is_none());
}
