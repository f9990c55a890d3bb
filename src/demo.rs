use crate::domain::{FileRef, HeaderBlock, ImageBlock, ParagraphBlock, Post};
use crate::error::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Seeds one sample post with interleaved blocks, including an order tie
/// between the header and the first paragraph. Returns the post's id.
pub async fn seed_demo_content(storage: Arc<dyn Storage>) -> Result<Uuid> {
    let mut post = Post::new("Launch Day");
    storage.create_post(&mut post).await?;
    let post_id = post.id.unwrap_or_default();

    storage
        .create_image_block(&mut ImageBlock::new(
            post_id,
            FileRef {
                filename: "rocket.jpg".to_string(),
                public_url: "/images/rocket.jpg".to_string(),
            },
            2,
        ))
        .await?;
    storage
        .create_header_block(&mut HeaderBlock::new(post_id, "Welcome aboard", 1))
        .await?;
    storage
        .create_paragraph_block(&mut ParagraphBlock::new(
            post_id,
            "Today we are flipping the switch.",
            1,
        ))
        .await?;
    storage
        .create_paragraph_block(&mut ParagraphBlock::new(
            post_id,
            "Thanks for reading, more soon.",
            3,
        ))
        .await?;

    info!("Seeded demo post {post_id}");
    Ok(post_id)
}
