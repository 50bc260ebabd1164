//! The todo record and request payload types.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored todo record.
///
/// `id` is generated server-side at creation and never changes. `title` is
/// the only field the update route may overwrite. `createdAt` is a local
/// display string — opaque to the service, never parsed back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub created_at: String,
}

impl Todo {
    /// A fresh record with a random id and the current local time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            created_at: Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        }
    }
}

/// The body accepted by the create and update routes: `{"title": "…"}`.
///
/// Deserialization fails on a missing or non-string `title`, which is how
/// the routes reject shape errors instead of storing a null title.
#[derive(Debug, Deserialize)]
pub struct TitlePayload {
    pub title: String,
}
