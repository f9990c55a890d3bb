use crate::domain::{HeaderBlock, ImageBlock, ParagraphBlock, Post};
use crate::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub mod in_memory;

pub use in_memory::InMemoryStorage;

/// Record store for posts and their blocks. Block lookups scoped by post
/// return records in insertion order, which the aggregator relies on for
/// its stable merge.
#[async_trait]
pub trait Storage: Send + Sync {
    // Post operations
    async fn create_post(&self, post: &mut Post) -> Result<()>;
    async fn get_post_by_id(&self, id: Uuid) -> Result<Option<Post>>;
    async fn get_all_posts(&self, limit: Option<usize>, offset: Option<usize>)
        -> Result<Vec<Post>>;

    // Image block operations
    async fn create_image_block(&self, block: &mut ImageBlock) -> Result<()>;
    async fn get_all_image_blocks(&self) -> Result<Vec<ImageBlock>>;
    async fn get_image_blocks_by_post_id(&self, post_id: Uuid) -> Result<Vec<ImageBlock>>;

    // Header block operations
    async fn create_header_block(&self, block: &mut HeaderBlock) -> Result<()>;
    async fn get_all_header_blocks(&self) -> Result<Vec<HeaderBlock>>;
    async fn get_header_blocks_by_post_id(&self, post_id: Uuid) -> Result<Vec<HeaderBlock>>;

    // Paragraph block operations
    async fn create_paragraph_block(&self, block: &mut ParagraphBlock) -> Result<()>;
    async fn get_all_paragraph_blocks(&self) -> Result<Vec<ParagraphBlock>>;
    async fn get_paragraph_blocks_by_post_id(&self, post_id: Uuid)
        -> Result<Vec<ParagraphBlock>>;
}
