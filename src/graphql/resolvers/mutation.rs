use crate::domain::{
    FileRef, HeaderBlock as DomainHeaderBlock, ImageBlock as DomainImageBlock,
    ParagraphBlock as DomainParagraphBlock, Post as DomainPost,
};
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{HeaderBlock, ImageBlock, ParagraphBlock, Post};
use async_graphql::{Context, FieldResult, Object, ID};
use uuid::Uuid;

/// List-level creates. Block mutations take the owning post's id plus the
/// kind's payload fields.
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a post
    async fn create_post(&self, ctx: &Context<'_>, title: String) -> FieldResult<Post> {
        let context = ctx.data::<GraphQLContext>()?;

        let mut post = DomainPost::new(title);
        match context.storage.create_post(&mut post).await {
            Ok(()) => Ok(post.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Attach an image block to a post
    async fn create_image_block(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        filename: String,
        public_url: String,
        order: i32,
    ) -> FieldResult<ImageBlock> {
        let context = ctx.data::<GraphQLContext>()?;
        let post_id = Uuid::parse_str(&post_id)?;

        let image = FileRef {
            filename,
            public_url,
        };
        let mut block = DomainImageBlock::new(post_id, image, order);
        match context.storage.create_image_block(&mut block).await {
            Ok(()) => Ok(block.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Attach a header block to a post
    async fn create_header_block(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        header: String,
        order: i32,
    ) -> FieldResult<HeaderBlock> {
        let context = ctx.data::<GraphQLContext>()?;
        let post_id = Uuid::parse_str(&post_id)?;

        let mut block = DomainHeaderBlock::new(post_id, header, order);
        match context.storage.create_header_block(&mut block).await {
            Ok(()) => Ok(block.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Attach a paragraph block to a post
    async fn create_paragraph_block(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        paragraph: String,
        order: i32,
    ) -> FieldResult<ParagraphBlock> {
        let context = ctx.data::<GraphQLContext>()?;
        let post_id = Uuid::parse_str(&post_id)?;

        let mut block = DomainParagraphBlock::new(post_id, paragraph, order);
        match context.storage.create_paragraph_block(&mut block).await {
            Ok(()) => Ok(block.into()),
            Err(e) => Err(e.into()),
        }
    }
}
