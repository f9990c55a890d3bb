use crate::gateway::{QueryGateway, SchemaGateway};
use crate::graphql::resolvers::{ListQuery, Mutation, Query};
use crate::storage::Storage;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub storage: Arc<dyn Storage>,
}

/// List reads only; this is the schema the query gateway executes against.
pub type ListSchema = Schema<ListQuery, EmptyMutation, EmptySubscription>;

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn create_list_schema(storage: Arc<dyn Storage>) -> ListSchema {
    Schema::build(ListQuery, EmptyMutation, EmptySubscription)
        .data(GraphQLContext { storage })
        .finish()
}

/// Create the public GraphQL schema with the given storage. The aggregation
/// query fans out through a gateway bound to an inner list-only schema, so
/// the gateway is only present in the public schema's context.
pub fn create_schema(storage: Arc<dyn Storage>) -> GraphQLSchema {
    let list_schema = create_list_schema(storage.clone());
    let gateway: Arc<dyn QueryGateway> = Arc::new(SchemaGateway::new(list_schema));

    Schema::build(Query::default(), Mutation, EmptySubscription)
        .data(GraphQLContext { storage })
        .data(gateway)
        .finish()
}
