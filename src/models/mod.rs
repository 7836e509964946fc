// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! Data models for Slowly API responses

pub mod letter;
pub mod user;

pub use letter::{Letter, LetterBatch, LetterPage, LetterPaginator};
pub use user::User;

use serde::Deserialize;

/// Envelope of `POST web/me`
#[derive(Debug, Deserialize)]
pub(crate) struct MeResponse {
    pub me: User,
}

/// Envelope of `GET users/me/friends/v2`
#[derive(Debug, Deserialize)]
pub(crate) struct FriendsResponse {
    pub friends: Vec<User>,
}

/// Serde helpers for the timestamp formats used by the Slowly API.
///
/// Timestamps arrive as `"2024-01-31 18:05:00"` (naive, UTC) and dates of
/// birth as `"1990-01-31"`. Both are optional almost everywhere, so the
/// helpers work on `Option` and treat null/empty as absent.
pub(crate) mod time {
    pub mod datetime {
        use chrono::{DateTime, NaiveDateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Option::<String>::deserialize(deserializer)?;
            match value.as_deref() {
                None | Some("") => Ok(None),
                Some(raw) => NaiveDateTime::parse_from_str(raw, FORMAT)
                    .map(|naive| Some(naive.and_utc()))
                    .map_err(serde::de::Error::custom),
            }
        }
    }

    pub mod date {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        const FORMAT: &str = "%Y-%m-%d";

        pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Option::<String>::deserialize(deserializer)?;
            match value.as_deref() {
                None | Some("") => Ok(None),
                Some(raw) => NaiveDate::parse_from_str(raw, FORMAT)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }
    }
}
