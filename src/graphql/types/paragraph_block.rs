use crate::domain::ParagraphBlock as DomainParagraphBlock;
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, FieldResult, Object, ID};

/// GraphQL representation of a ParagraphBlock
#[derive(Clone)]
pub struct ParagraphBlock {
    pub inner: DomainParagraphBlock,
}

impl From<DomainParagraphBlock> for ParagraphBlock {
    fn from(block: DomainParagraphBlock) -> Self {
        Self { inner: block }
    }
}

#[Object]
impl ParagraphBlock {
    /// The unique identifier for the block
    async fn id(&self) -> ID {
        ID(self.inner.id.unwrap_or_default().to_string())
    }

    /// The paragraph text
    async fn paragraph(&self) -> &str {
        &self.inner.paragraph
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
