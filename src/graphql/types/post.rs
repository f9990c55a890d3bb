use crate::domain::Post as DomainPost;
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, FieldResult, Object, ID};

/// GraphQL representation of a Post
#[derive(Clone)]
pub struct Post {
    pub inner: DomainPost,
}

impl From<DomainPost> for Post {
    fn from(post: DomainPost) -> Self {
        Self { inner: post }
    }
}

#[Object]
impl Post {
    /// The unique identifier for the post
    async fn id(&self) -> ID {
        ID(self.inner.id.unwrap_or_default().to_string())
    }

    /// The title of the post
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// When the post was created
    async fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.inner.created_at
    }

    /// Image blocks belonging to this post, in insertion order
    async fn images(&self, ctx: &Context<'_>) -> FieldResult<Vec<super::image_block::ImageBlock>> {
        let context = ctx.data::<GraphQLContext>()?;
        let post_id = self.inner.id.unwrap_or_default();

        match context.storage.get_image_blocks_by_post_id(post_id).await {
            Ok(blocks) => Ok(blocks.into_iter().map(|b| b.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Header blocks belonging to this post, in insertion order
    async fn headers(
        &self,
        ctx: &Context<'_>,
    ) -> FieldResult<Vec<super::header_block::HeaderBlock>> {
        let context = ctx.data::<GraphQLContext>()?;
        let post_id = self.inner.id.unwrap_or_default();

        match context.storage.get_header_blocks_by_post_id(post_id).await {
            Ok(blocks) => Ok(blocks.into_iter().map(|b| b.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Paragraph blocks belonging to this post, in insertion order
    async fn paragraphs(
        &self,
        ctx: &Context<'_>,
    ) -> FieldResult<Vec<super::paragraph_block::ParagraphBlock>> {
        let context = ctx.data::<GraphQLContext>()?;
        let post_id = self.inner.id.unwrap_or_default();

        match context
            .storage
            .get_paragraph_blocks_by_post_id(post_id)
            .await
        {
            Ok(blocks) => Ok(blocks.into_iter().map(|b| b.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }
}
