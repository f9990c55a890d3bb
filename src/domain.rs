use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to a stored file carried by an image block. Only the metadata
/// lives here; the bytes sit in the uploads directory and are served
/// statically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    pub filename: String,
    pub public_url: String,
}

/// The aggregation root. Blocks reference it by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<Uuid>,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageBlock {
    pub id: Option<Uuid>,
    pub post_id: Uuid,
    pub image: FileRef,
    /// Position among all of the post's blocks; not unique across siblings.
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub id: Option<Uuid>,
    pub post_id: Uuid,
    pub header: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub id: Option<Uuid>,
    pub post_id: Uuid,
    pub paragraph: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl ImageBlock {
    pub fn new(post_id: Uuid, image: FileRef, order: i32) -> Self {
        Self {
            id: None,
            post_id,
            image,
            order,
            created_at: Utc::now(),
        }
    }
}

impl HeaderBlock {
    pub fn new(post_id: Uuid, header: impl Into<String>, order: i32) -> Self {
        Self {
            id: None,
            post_id,
            header: header.into(),
            order,
            created_at: Utc::now(),
        }
    }
}

impl ParagraphBlock {
    pub fn new(post_id: Uuid, paragraph: impl Into<String>, order: i32) -> Self {
        Self {
            id: None,
            post_id,
            paragraph: paragraph.into(),
            order,
            created_at: Utc::now(),
        }
    }
}
