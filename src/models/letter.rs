// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! Letter models and the paginated letter history

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::time;

/// A pen-pal letter exchanged with a matched friend.
///
/// Letters travel with a simulated delay: `created_at` is when the sender
/// wrote it, `deliver_at` when it reaches the recipient. A letter is unread
/// while `read_at` is null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letter {
    pub id: i64,
    /// Letter text; absent on letters still in transit
    #[serde(default)]
    pub body: Option<String>,
    /// Sender id
    #[serde(default)]
    pub user: Option<i64>,
    /// Recipient id
    #[serde(default)]
    pub user_to: Option<i64>,
    /// Sender display name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub location_code: Option<String>,
    /// Where the letter was posted from
    #[serde(default)]
    pub sent_from: Option<String>,
    /// Stamp affixed to the letter
    #[serde(default)]
    pub stamp: Option<String>,
    #[serde(default)]
    pub attachments: Option<serde_json::Value>,
    #[serde(default)]
    pub post: Option<serde_json::Value>,
    #[serde(rename = "type", default)]
    pub letter_type: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub style: Option<i64>,
    #[serde(default)]
    pub fav: Option<i64>,
    #[serde(default)]
    pub user_fav: Option<i64>,
    #[serde(default)]
    pub user_to_fav: Option<i64>,
    #[serde(default, with = "time::datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "time::datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, with = "time::datetime")]
    pub deliver_at: Option<DateTime<Utc>>,
    #[serde(default, with = "time::datetime")]
    pub read_at: Option<DateTime<Utc>>,
}

impl Letter {
    /// Whether the recipient has opened this letter.
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Whether the letter has been delivered yet.
    pub fn is_delivered(&self) -> bool {
        match self.deliver_at {
            Some(at) => at <= Utc::now(),
            None => true,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Letter from={:?}>", self.name.as_deref().unwrap_or("?"))
    }
}

/// One page of a letter history, as returned by `GET friend/{id}/all`
#[derive(Debug, Deserialize)]
pub struct LetterPage {
    pub comments: LetterBatch,
}

/// The paginated payload inside a [`LetterPage`]
#[derive(Debug, Deserialize)]
pub struct LetterBatch {
    pub data: Vec<Letter>,
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Absent on the last page
    #[serde(default)]
    pub next_page_url: Option<String>,
}

/// Page-at-a-time iterator over the letter history with one friend.
///
/// Pages are fetched lazily; [`next`](Self::next) crosses page boundaries
/// transparently and [`flatten`](Self::flatten) drains the remainder into a
/// `Vec`. Fetch errors surface to the caller mid-iteration.
pub struct LetterPaginator<'a> {
    http: &'a HttpClient,
    friend_id: i64,
    page: u32,
    buffer: VecDeque<Letter>,
    done: bool,
}

impl<'a> LetterPaginator<'a> {
    pub(crate) fn new(http: &'a HttpClient, friend_id: i64) -> Self {
        Self {
            http,
            friend_id,
            page: 1,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    /// Fetch the next letter, requesting further pages as needed.
    ///
    /// Returns `Ok(None)` once the history is exhausted.
    pub async fn next(&mut self) -> Result<Option<Letter>> {
        while self.buffer.is_empty() && !self.done {
            let page = self
                .http
                .fetch_friend_letters(self.friend_id, self.page)
                .await?;
            debug!(
                "Fetched page {} of letters with friend {} ({} letters)",
                self.page,
                self.friend_id,
                page.comments.data.len()
            );
            self.page += 1;
            self.done = page.comments.next_page_url.is_none();
            self.buffer.extend(page.comments.data);
        }
        Ok(self.buffer.pop_front())
    }

    /// Collect every remaining letter into a `Vec`.
    pub async fn flatten(mut self) -> Result<Vec<Letter>> {
        let mut letters = Vec::new();
        while let Some(letter) = self.next().await? {
            letters.push(letter);
        }
        Ok(letters)
    }

    /// Adapt the paginator into a [`Stream`] of letters.
    pub fn into_stream(self) -> impl Stream<Item = Result<Letter>> + 'a {
        futures::stream::try_unfold(self, |mut pages| async move {
            let letter = pages.next().await?;
            Ok(letter.map(|letter| (letter, pages)))
        })
    }
}
