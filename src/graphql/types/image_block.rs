use crate::domain::{FileRef as DomainFileRef, ImageBlock as DomainImageBlock};
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, FieldResult, Object, ID};

/// GraphQL representation of an ImageBlock
#[derive(Clone)]
pub struct ImageBlock {
    pub inner: DomainImageBlock,
}

impl From<DomainImageBlock> for ImageBlock {
    fn from(block: DomainImageBlock) -> Self {
        Self { inner: block }
    }
}

#[Object]
impl ImageBlock {
    /// The unique identifier for the block
    async fn id(&self) -> ID {
        ID(self.inner.id.unwrap_or_default().to_string())
    }

    /// The stored image this block displays
    async fn image(&self) -> FileRef {
        FileRef {
            inner: self.inner.image.clone(),
        }
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

/// GraphQL representation of a stored file reference
#[derive(Clone)]
pub struct FileRef {
    pub inner: DomainFileRef,
}

#[Object]
impl FileRef {
    /// Original filename of the upload
    async fn filename(&self) -> &str {
        &self.inner.filename
    }

    /// URL the file is served under
    async fn public_url(&self) -> &str {
        &self.inner.public_url
    }
}
