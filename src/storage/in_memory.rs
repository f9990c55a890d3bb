use super::Storage;
use crate::domain::{HeaderBlock, ImageBlock, ParagraphBlock, Post};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

/// In-memory storage implementation for development/testing. Records are
/// kept in insertion order per list.
pub struct InMemoryStorage {
    posts: Arc<Mutex<Vec<Post>>>,
    image_blocks: Arc<Mutex<Vec<ImageBlock>>>,
    header_blocks: Arc<Mutex<Vec<HeaderBlock>>>,
    paragraph_blocks: Arc<Mutex<Vec<ParagraphBlock>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(Mutex::new(Vec::new())),
            image_blocks: Arc::new(Mutex::new(Vec::new())),
            header_blocks: Arc::new(Mutex::new(Vec::new())),
            paragraph_blocks: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

fn paginate<T: Clone>(records: &[T], limit: Option<usize>, offset: Option<usize>) -> Vec<T> {
    let offset = offset.unwrap_or(0);
    let limit = limit.unwrap_or(usize::MAX);
    records.iter().skip(offset).take(limit).cloned().collect()
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_post(&self, post: &mut Post) -> Result<()> {
        let id = Uuid::new_v4();
        post.id = Some(id);

        let mut posts = self.posts.lock().unwrap();
        posts.push(post.clone());

        debug!("Created post: {} with id {}", post.title, id);
        Ok(())
    }

    async fn get_post_by_id(&self, id: Uuid) -> Result<Option<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn get_all_posts(
        &self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(paginate(&posts, limit, offset))
    }

    async fn create_image_block(&self, block: &mut ImageBlock) -> Result<()> {
        let id = Uuid::new_v4();
        block.id = Some(id);

        let mut blocks = self.image_blocks.lock().unwrap();
        blocks.push(block.clone());

        debug!(
            "Created image block {} for post {} with id {}",
            block.image.filename, block.post_id, id
        );
        Ok(())
    }

    async fn get_all_image_blocks(&self) -> Result<Vec<ImageBlock>> {
        let blocks = self.image_blocks.lock().unwrap();
        Ok(blocks.clone())
    }

    async fn get_image_blocks_by_post_id(&self, post_id: Uuid) -> Result<Vec<ImageBlock>> {
        let blocks = self.image_blocks.lock().unwrap();
        Ok(blocks.iter().filter(|b| b.post_id == post_id).cloned().collect())
    }

    async fn create_header_block(&self, block: &mut HeaderBlock) -> Result<()> {
        let id = Uuid::new_v4();
        block.id = Some(id);

        let mut blocks = self.header_blocks.lock().unwrap();
        blocks.push(block.clone());

        debug!(
            "Created header block for post {} with id {}",
            block.post_id, id
        );
        Ok(())
    }

    async fn get_all_header_blocks(&self) -> Result<Vec<HeaderBlock>> {
        let blocks = self.header_blocks.lock().unwrap();
        Ok(blocks.clone())
    }

    async fn get_header_blocks_by_post_id(&self, post_id: Uuid) -> Result<Vec<HeaderBlock>> {
        let blocks = self.header_blocks.lock().unwrap();
        Ok(blocks.iter().filter(|b| b.post_id == post_id).cloned().collect())
    }

    async fn create_paragraph_block(&self, block: &mut ParagraphBlock) -> Result<()> {
        let id = Uuid::new_v4();
        block.id = Some(id);

        let mut blocks = self.paragraph_blocks.lock().unwrap();
        blocks.push(block.clone());

        debug!(
            "Created paragraph block for post {} with id {}",
            block.post_id, id
        );
        Ok(())
    }

    async fn get_all_paragraph_blocks(&self) -> Result<Vec<ParagraphBlock>> {
        let blocks = self.paragraph_blocks.lock().unwrap();
        Ok(blocks.clone())
    }

    async fn get_paragraph_blocks_by_post_id(
        &self,
        post_id: Uuid,
    ) -> Result<Vec<ParagraphBlock>> {
        let blocks = self.paragraph_blocks.lock().unwrap();
        Ok(blocks.iter().filter(|b| b.post_id == post_id).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileRef;

    fn image(post_id: Uuid, filename: &str, order: i32) -> ImageBlock {
        ImageBlock::new(
            post_id,
            FileRef {
                filename: filename.to_string(),
                public_url: format!("/images/{filename}"),
            },
            order,
        )
    }

    #[tokio::test]
    async fn create_post_assigns_an_id() {
        let storage = InMemoryStorage::new();
        let mut post = Post::new("Hello");

        storage.create_post(&mut post).await.unwrap();

        let id = post.id.expect("id assigned on create");
        let found = storage.get_post_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.title, "Hello");
    }

    #[tokio::test]
    async fn block_lookup_is_scoped_to_the_post() {
        let storage = InMemoryStorage::new();
        let mut first = Post::new("First");
        let mut second = Post::new("Second");
        storage.create_post(&mut first).await.unwrap();
        storage.create_post(&mut second).await.unwrap();
        let first_id = first.id.unwrap();
        let second_id = second.id.unwrap();

        storage
            .create_header_block(&mut HeaderBlock::new(first_id, "One", 1))
            .await
            .unwrap();
        storage
            .create_header_block(&mut HeaderBlock::new(second_id, "Other", 1))
            .await
            .unwrap();

        let headers = storage.get_header_blocks_by_post_id(first_id).await.unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].header, "One");
    }

    #[tokio::test]
    async fn blocks_come_back_in_insertion_order() {
        let storage = InMemoryStorage::new();
        let mut post = Post::new("Ordered");
        storage.create_post(&mut post).await.unwrap();
        let post_id = post.id.unwrap();

        storage
            .create_image_block(&mut image(post_id, "b.jpg", 5))
            .await
            .unwrap();
        storage
            .create_image_block(&mut image(post_id, "a.jpg", 5))
            .await
            .unwrap();

        let images = storage.get_image_blocks_by_post_id(post_id).await.unwrap();
        let filenames: Vec<_> = images.iter().map(|b| b.image.filename.as_str()).collect();
        assert_eq!(filenames, vec!["b.jpg", "a.jpg"]);
    }

    #[tokio::test]
    async fn get_all_posts_honors_limit_and_offset() {
        let storage = InMemoryStorage::new();
        for title in ["a", "b", "c"] {
            storage.create_post(&mut Post::new(title)).await.unwrap();
        }

        let page = storage.get_all_posts(Some(1), Some(1)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "b");
    }
}
