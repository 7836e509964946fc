// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client-side cache of fetched users
//!
//! The remote service owns canonical state; this cache only remembers the
//! last copy of each user the client has already returned, so callers can
//! look a friend up by id without another round trip.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::User;

#[derive(Default)]
pub(crate) struct ClientState {
    users: RwLock<HashMap<i64, User>>,
}

impl ClientState {
    /// Remember a fetched user, last fetch wins.
    pub(crate) fn store_user(&self, user: &User) {
        if let Ok(mut users) = self.users.write() {
            users.insert(user.id, user.clone());
        }
    }

    pub(crate) fn user(&self, id: i64) -> Option<User> {
        self.users.read().ok()?.get(&id).cloned()
    }

    pub(crate) fn clear(&self) {
        if let Ok(mut users) = self.users.write() {
            users.clear();
        }
    }
}
