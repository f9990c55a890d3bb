use crate::domain::HeaderBlock as DomainHeaderBlock;
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, FieldResult, Object, ID};

/// GraphQL representation of a HeaderBlock
#[derive(Clone)]
pub struct HeaderBlock {
    pub inner: DomainHeaderBlock,
}

impl From<DomainHeaderBlock> for HeaderBlock {
    fn from(block: DomainHeaderBlock) -> Self {
        Self { inner: block }
    }
}

#[Object]
impl HeaderBlock {
    /// The unique identifier for the block
    async fn id(&self) -> ID {
        ID(self.inner.id.unwrap_or_default().to_string())
    }

    /// The header text
    async fn header(&self) -> &str {
        &self.inner.header
    }

    /// Position among the post's blocks
    async fn order(&self) -> i32 {
        self.inner.order
    }

    /// When the block was created
    async fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.inner.created_at
    }

    /// The post this block belongs to
    async fn post(&self, ctx: &Context<'_>) -> FieldResult<Option<super::post::Post>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.storage.get_post_by_id(self.inner.post_id).await {
            Ok(Some(post)) => Ok(Some(post.into())),
            Ok(None) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
