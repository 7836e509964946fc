// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! Authentication handling for the Slowly API
//!
//! Slowly uses a two-step email passcode flow: the service mails a short
//! passcode to the account address, which is then exchanged for a bearer
//! token. Both steps identify the calling device with a [`Device`] payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Web client constants sent along with authentication requests
pub mod constants {
    /// Version string reported by the Slowly web client
    pub const CLIENT_VERSION: &str = "4.0.x";
    /// Numeric version reported to `web/me`
    pub const CLIENT_VER: u32 = 90000;
    /// Origin header of the official web client
    pub const WEB_ORIGIN: &str = "https://web.slowly.app";
}

/// Browser-device identity attached to authentication requests.
///
/// The remote service ties passcodes and tokens to a device record, so the
/// same `Device` should be reused for the passcode request, the token
/// exchange, and subsequent profile fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Stable identifier for this installation
    pub uuid: Uuid,
    /// Operating system string, e.g. `Linux x86_64`
    pub os: String,
    /// Browser product string, e.g. `Chrome 132`
    pub browser: String,
    /// BCP 47 language tag
    pub locale: String,
    /// The web client sends this flag as a string, not a boolean
    pub trusted: String,
    /// Web client version
    pub version: String,
}

impl Device {
    /// Create a device identity with a fresh random id.
    pub fn new() -> Self {
        Self::with_uuid(Uuid::new_v4())
    }

    /// Create a device identity with a caller-provided id.
    ///
    /// Reusing the same id across runs keeps the device "known" to the
    /// service and avoids re-verification emails.
    pub fn with_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            os: "Linux x86_64".to_string(),
            browser: "Chrome 132".to_string(),
            locale: "en".to_string(),
            trusted: "true".to_string(),
            version: constants::CLIENT_VERSION.to_string(),
        }
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of `POST auth/email/passcode`
#[derive(Debug, Serialize)]
pub(crate) struct PasscodeRequest<'a> {
    pub email: &'a str,
    pub device: &'a Device,
    pub checkpass: bool,
}

/// Body of `POST auth/email`
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub email: &'a str,
    pub passcode: &'a str,
    pub device: &'a Device,
}

/// Response of `POST auth/email`
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token authorizing subsequent requests
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_defaults() {
        let device = Device::new();
        assert_eq!(device.locale, "en");
        assert_eq!(device.trusted, "true");
        assert_eq!(device.version, constants::CLIENT_VERSION);
    }

    #[test]
    fn test_device_uuid_is_reusable() {
        let id = Uuid::new_v4();
        let a = Device::with_uuid(id);
        let b = Device::with_uuid(id);
        assert_eq!(a.uuid, b.uuid);
    }

    #[test]
    fn test_device_serialization_shape() {
        let device = Device::with_uuid(Uuid::nil());
        let value = serde_json::to_value(&device).unwrap();
        assert_eq!(
            value["uuid"].as_str().unwrap(),
            "00000000-0000-0000-0000-000000000000"
        );
        // The wire format expects a string here, not a bool.
        assert_eq!(value["trusted"], serde_json::json!("true"));
        assert!(value["os"].is_string());
        assert!(value["browser"].is_string());
    }

    #[test]
    fn test_token_request_body() {
        let device = Device::with_uuid(Uuid::nil());
        let body = TokenRequest {
            email: "pen@example.com",
            passcode: "123456",
            device: &device,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["email"], "pen@example.com");
        assert_eq!(value["passcode"], "123456");
        assert!(value["device"].is_object());
    }

    #[test]
    fn test_token_response_parsing() {
        let raw = r#"{"token": "abc.def.ghi", "first_time": false}"#;
        let parsed: TokenResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.token, "abc.def.ghi");
    }
}
