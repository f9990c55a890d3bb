use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{HeaderBlock, ImageBlock, ParagraphBlock, Post};
use async_graphql::{Context, FieldResult, Object, ID};
use uuid::Uuid;

/// List-level reads over the record store, one field per list. An id that
/// does not parse as a UUID matches nothing rather than erroring, so
/// unknown identifiers surface as empty results.
#[derive(Default)]
pub struct ListQuery;

#[Object]
impl ListQuery {
    /// Get a post by ID
    async fn post(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Post>> {
        let context = ctx.data::<GraphQLContext>()?;
        let post_id = match Uuid::parse_str(&id) {
            Ok(post_id) => post_id,
            Err(_) => return Ok(None),
        };

        match context.storage.get_post_by_id(post_id).await {
            Ok(post) => Ok(post.map(|p| p.into())),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all posts with optional pagination
    async fn all_posts(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> FieldResult<Vec<Post>> {
        let context = ctx.data::<GraphQLContext>()?;

        let limit = limit.map(|l| l as usize);
        let offset = offset.map(|o| o as usize);

        match context.storage.get_all_posts(limit, offset).await {
            Ok(posts) => Ok(posts.into_iter().map(|p| p.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Get image blocks, optionally scoped to a post
    async fn all_image_blocks(
        &self,
        ctx: &Context<'_>,
        post_id: Option<ID>,
    ) -> FieldResult<Vec<ImageBlock>> {
        let context = ctx.data::<GraphQLContext>()?;

        let blocks = match parse_filter(post_id) {
            PostFilter::All => context.storage.get_all_image_blocks().await,
            PostFilter::ForPost(post_id) => {
                context.storage.get_image_blocks_by_post_id(post_id).await
            }
            PostFilter::NoMatch => return Ok(Vec::new()),
        };

        match blocks {
            Ok(blocks) => Ok(blocks.into_iter().map(|b| b.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Get header blocks, optionally scoped to a post
    async fn all_header_blocks(
        &self,
        ctx: &Context<'_>,
        post_id: Option<ID>,
    ) -> FieldResult<Vec<HeaderBlock>> {
        let context = ctx.data::<GraphQLContext>()?;

        let blocks = match parse_filter(post_id) {
            PostFilter::All => context.storage.get_all_header_blocks().await,
            PostFilter::ForPost(post_id) => {
                context.storage.get_header_blocks_by_post_id(post_id).await
            }
            PostFilter::NoMatch => return Ok(Vec::new()),
        };

        match blocks {
            Ok(blocks) => Ok(blocks.into_iter().map(|b| b.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Get paragraph blocks, optionally scoped to a post
    async fn all_paragraph_blocks(
        &self,
        ctx: &Context<'_>,
        post_id: Option<ID>,
    ) -> FieldResult<Vec<ParagraphBlock>> {
        let context = ctx.data::<GraphQLContext>()?;

        let blocks = match parse_filter(post_id) {
            PostFilter::All => context.storage.get_all_paragraph_blocks().await,
            PostFilter::ForPost(post_id) => {
                context
                    .storage
                    .get_paragraph_blocks_by_post_id(post_id)
                    .await
            }
            PostFilter::NoMatch => return Ok(Vec::new()),
        };

        match blocks {
            Ok(blocks) => Ok(blocks.into_iter().map(|b| b.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }
}

enum PostFilter {
    All,
    ForPost(Uuid),
    NoMatch,
}

fn parse_filter(post_id: Option<ID>) -> PostFilter {
    match post_id {
        None => PostFilter::All,
        Some(id) => match Uuid::parse_str(&id) {
            Ok(post_id) => PostFilter::ForPost(post_id),
            Err(_) => PostFilter::NoMatch,
        },
    }
}
