// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! User and friend models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::time;

/// A Slowly account: the authenticated user or a matched pen pal.
///
/// The remote schema is wide and sparsely populated; apart from `id` and
/// `name` every attribute may be missing depending on which endpoint
/// produced the record and the other user's privacy settings. Flag-like
/// attributes (`fav`, `allowaudio`, ...) are integers on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location_code: Option<String>,
    /// Date of birth, subject to `dob_privacy`
    #[serde(default, with = "time::date")]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub dob_privacy: Option<i64>,
    /// Whether this friend is favourited by the account
    #[serde(default)]
    pub fav: Option<i64>,
    /// Unread letters from this friend
    #[serde(default)]
    pub unread: Option<i64>,
    /// Total letters exchanged with this friend
    #[serde(default)]
    pub total: Option<i64>,
    /// Timestamp of the most recent letter in the thread
    #[serde(default, with = "time::datetime")]
    pub latest_comment: Option<DateTime<Utc>>,
    /// Who sent the most recent letter
    #[serde(default)]
    pub latest_sent_by: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user_status: Option<String>,
    #[serde(default)]
    pub emoji_status: Option<String>,
    #[serde(default)]
    pub customdesc: Option<String>,
    #[serde(default)]
    pub identity: Option<String>,
    /// Slowly Plus subscription marker
    #[serde(default)]
    pub plus: Option<serde_json::Value>,
    #[serde(default)]
    pub by_id: Option<i64>,
    #[serde(default)]
    pub openletter: Option<i64>,
    #[serde(default)]
    pub show_last_login: Option<i64>,
    #[serde(default)]
    pub deactivated: Option<i64>,
    #[serde(default)]
    pub allowaudio: Option<i64>,
    #[serde(default)]
    pub allowphotos: Option<i64>,
    #[serde(default)]
    pub audiorequest: Option<i64>,
    #[serde(default)]
    pub photorequest: Option<i64>,
    #[serde(default)]
    pub user_audio: Option<i64>,
    #[serde(default)]
    pub user_photos: Option<i64>,
    #[serde(default)]
    pub joined: Option<i64>,
    #[serde(default)]
    pub joined_audio: Option<i64>,
    #[serde(default)]
    pub joined_photos: Option<i64>,
    #[serde(default, with = "time::datetime")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default, with = "time::datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "time::datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether there are unread letters from this friend.
    pub fn has_unread(&self) -> bool {
        self.unread.unwrap_or(0) > 0
    }

    /// Whether this friend is favourited.
    pub fn is_fav(&self) -> bool {
        self.fav.unwrap_or(0) != 0
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
