pub mod aggregate;
pub mod mutation;
pub mod query;

pub use aggregate::AggregateQuery;
pub use mutation::Mutation;
pub use query::ListQuery;

use async_graphql::MergedObject;

/// Public query root: the list reads plus the aggregation query.
#[derive(MergedObject, Default)]
pub struct Query(ListQuery, AggregateQuery);
