//! Announcement models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strata_core::types::{DbId, Timestamp};
use validator::Validate;

/// An announcement row from the `announcements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub condominium_id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub priority: String,
    pub audience: String,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for drafting an announcement. Drafts start unpublished.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAnnouncement {
    pub condominium_id: DbId,
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub body: String,
    pub kind: Option<String>,
    pub priority: Option<String>,
    pub audience: Option<String>,
    pub expires_at: Option<Timestamp>,
}

/// DTO for editing an announcement. All fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAnnouncement {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub body: Option<String>,
    pub kind: Option<String>,
    pub priority: Option<String>,
    pub audience: Option<String>,
    pub expires_at: Option<Timestamp>,
}
