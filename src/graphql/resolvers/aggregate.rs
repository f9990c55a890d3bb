use crate::aggregator::BlockAggregator;
use crate::gateway::QueryGateway;
use crate::graphql::types::PostWithBlocks;
use async_graphql::{Context, FieldResult, Object, ID};
use std::sync::Arc;

/// The custom aggregation query layered on top of the list API.
#[derive(Default)]
pub struct AggregateQuery;

#[Object]
impl AggregateQuery {
    /// Get a post with all of its blocks merged into one sequence, sorted
    /// by order and tagged by kind
    async fn get_post(&self, ctx: &Context<'_>, id: ID) -> FieldResult<PostWithBlocks> {
        let gateway = ctx.data::<Arc<dyn QueryGateway>>()?;
        let aggregator = BlockAggregator::new(gateway.clone());

        match aggregator.aggregate(&id).await {
            Ok(view) => Ok(view.into()),
            Err(e) => Err(e.into()),
        }
    }
}
