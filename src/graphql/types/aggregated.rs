//! GraphQL shapes for the aggregation query. These wrap the request-scoped
//! view types rather than full records; the aggregator only fetched each
//! kind's payload fields and order.

use crate::aggregator::{
    AggregatedView, FileRefView, HeaderBlockView, ImageBlockView, ParagraphBlockView, TaggedBlock,
};
use async_graphql::{Object, Union, ID};

/// A post with its blocks merged into one ordered, kind-tagged sequence
#[derive(Clone)]
pub struct PostWithBlocks {
    pub inner: AggregatedView,
}

impl From<AggregatedView> for PostWithBlocks {
    fn from(view: AggregatedView) -> Self {
        Self { inner: view }
    }
}

#[Object]
impl PostWithBlocks {
    /// The identifier the aggregation was requested with
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// The post's title
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// All blocks of every kind, sorted non-decreasingly by order
    async fn blocks(&self) -> Vec<Block> {
        self.inner.blocks.iter().cloned().map(Block::from).collect()
    }
}

/// One block of the merged sequence, discriminated by kind
#[derive(Clone, Union)]
pub enum Block {
    Image(AggregatedImageBlock),
    Header(AggregatedHeaderBlock),
    Paragraph(AggregatedParagraphBlock),
}

impl From<TaggedBlock> for Block {
    fn from(block: TaggedBlock) -> Self {
        match block {
            TaggedBlock::Image(view) => Block::Image(AggregatedImageBlock { inner: view }),
            TaggedBlock::Header(view) => Block::Header(AggregatedHeaderBlock { inner: view }),
            TaggedBlock::Paragraph(view) => {
                Block::Paragraph(AggregatedParagraphBlock { inner: view })
            }
        }
    }
}

#[derive(Clone)]
pub struct AggregatedImageBlock {
    pub inner: ImageBlockView,
}

#[Object]
impl AggregatedImageBlock {
    /// The image this block displays
    async fn image(&self) -> ImageSource {
        ImageSource {
            inner: self.inner.image.clone(),
        }
    }

    /// Position among the post's blocks
    async fn order(&self) -> i32 {
        self.inner.order
    }
}

#[derive(Clone)]
pub struct AggregatedHeaderBlock {
    pub inner: HeaderBlockView,
}

#[Object]
impl AggregatedHeaderBlock {
    /// The header text
    async fn header(&self) -> &str {
        &self.inner.header
    }

    /// Position among the post's blocks
    async fn order(&self) -> i32 {
        self.inner.order
    }
}

#[derive(Clone)]
pub struct AggregatedParagraphBlock {
    pub inner: ParagraphBlockView,
}

#[Object]
impl AggregatedParagraphBlock {
    /// The paragraph text
    async fn paragraph(&self) -> &str {
        &self.inner.paragraph
    }

    /// Position among the post's blocks
    async fn order(&self) -> i32 {
        self.inner.order
    }
}

#[derive(Clone)]
pub struct ImageSource {
    pub inner: FileRefView,
}

#[Object]
impl ImageSource {
    /// URL the image is served under
    async fn public_url(&self) -> &str {
        &self.inner.public_url
    }
}
