//! Polymorphic block aggregation: fetches all block kinds of a post
//! concurrently through the query gateway and merges them into one ordered,
//! kind-tagged sequence.

use crate::error::{BlockPressError, Result};
use crate::gateway::{GatewayErrorSet, GatewayResponse, QueryGateway};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

const IMAGE_BLOCKS_QUERY: &str = r#"
    query blocks($postId: ID!) {
        allImageBlocks(postId: $postId) {
            image {
                publicUrl
            }
            order
        }
    }
"#;

const HEADER_BLOCKS_QUERY: &str = r#"
    query blocks($postId: ID!) {
        allHeaderBlocks(postId: $postId) {
            header
            order
        }
    }
"#;

const PARAGRAPH_BLOCKS_QUERY: &str = r#"
    query blocks($postId: ID!) {
        allParagraphBlocks(postId: $postId) {
            paragraph
            order
        }
    }
"#;

const POST_QUERY: &str = r#"
    query post($postId: ID!) {
        post(id: $postId) {
            title
        }
    }
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct FileRefView {
    #[serde(rename = "publicUrl")]
    pub public_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageBlockView {
    pub image: FileRefView,
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeaderBlockView {
    pub header: String,
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParagraphBlockView {
    pub paragraph: String,
    pub order: i32,
}

#[derive(Deserialize)]
struct PostView {
    title: String,
}

/// One merged block, tagged by the kind it was fetched as.
#[derive(Debug, Clone)]
pub enum TaggedBlock {
    Image(ImageBlockView),
    Header(HeaderBlockView),
    Paragraph(ParagraphBlockView),
}

impl TaggedBlock {
    pub fn order(&self) -> i32 {
        match self {
            TaggedBlock::Image(block) => block.order,
            TaggedBlock::Header(block) => block.order,
            TaggedBlock::Paragraph(block) => block.order,
        }
    }
}

/// Request-scoped read model for one post: scalar fields plus the merged
/// block sequence. Built fresh per `aggregate` call, never persisted.
#[derive(Debug, Clone)]
pub struct AggregatedView {
    pub id: String,
    pub title: String,
    pub blocks: Vec<TaggedBlock>,
}

pub struct BlockAggregator {
    gateway: Arc<dyn QueryGateway>,
}

impl BlockAggregator {
    pub fn new(gateway: Arc<dyn QueryGateway>) -> Self {
        Self { gateway }
    }

    /// Assembles the post's blocks into one ordered sequence.
    ///
    /// The four reads (three block kinds plus the post's scalars) are
    /// independent, so they are dispatched concurrently and joined. Any
    /// fetch reporting errors aborts the whole aggregation; partial views
    /// are never returned.
    pub async fn aggregate(&self, post_id: &str) -> Result<AggregatedView> {
        let variables = serde_json::json!({ "postId": post_id });

        let (images, headers, paragraphs, post) = tokio::join!(
            self.gateway.query(IMAGE_BLOCKS_QUERY, variables.clone()),
            self.gateway.query(HEADER_BLOCKS_QUERY, variables.clone()),
            self.gateway.query(PARAGRAPH_BLOCKS_QUERY, variables.clone()),
            self.gateway.query(POST_QUERY, variables),
        );

        // First non-empty error set wins, checked in fetch order.
        for response in [&images, &headers, &paragraphs, &post] {
            if !response.errors.is_empty() {
                return Err(BlockPressError::UpstreamQuery(GatewayErrorSet(
                    response.errors.clone(),
                )));
            }
        }

        let title = match &post.data["post"] {
            Value::Null => {
                return Err(BlockPressError::NotFound {
                    id: post_id.to_string(),
                })
            }
            value => serde_json::from_value::<PostView>(value.clone())?.title,
        };

        let image_rows: Vec<ImageBlockView> = rows(&images, "allImageBlocks")?;
        let header_rows: Vec<HeaderBlockView> = rows(&headers, "allHeaderBlocks")?;
        let paragraph_rows: Vec<ParagraphBlockView> = rows(&paragraphs, "allParagraphBlocks")?;

        let mut blocks: Vec<TaggedBlock> = image_rows
            .into_iter()
            .map(TaggedBlock::Image)
            .chain(header_rows.into_iter().map(TaggedBlock::Header))
            .chain(paragraph_rows.into_iter().map(TaggedBlock::Paragraph))
            .collect();

        // sort_by is stable, so equal orders keep the image/header/paragraph
        // flatten order above.
        blocks.sort_by(|a, b| a.order().cmp(&b.order()));

        Ok(AggregatedView {
            id: post_id.to_string(),
            title,
            blocks,
        })
    }
}

fn rows<T: DeserializeOwned>(response: &GatewayResponse, field: &str) -> Result<Vec<T>> {
    match response.data.get(field) {
        Some(value) if !value.is_null() => Ok(serde_json::from_value(value.clone())?),
        _ => Ok(Vec::new()),
    }
}
