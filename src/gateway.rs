use crate::graphql::schema::ListSchema;
use async_graphql::{Request, Variables};
use async_trait::async_trait;
use std::fmt;

/// A single error reported by the query gateway for one query.
#[derive(Debug, Clone)]
pub struct GatewayError {
    pub message: String,
}

/// The full error set of one gateway query. Empty never occurs; a response
/// either has no error set or a non-empty one.
#[derive(Debug, Clone)]
pub struct GatewayErrorSet(pub Vec<GatewayError>);

impl fmt::Display for GatewayErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Result of one gateway query: `data` keyed by the query's declared field
/// names, `errors` empty on success.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub data: serde_json::Value,
    pub errors: Vec<GatewayError>,
}

impl GatewayResponse {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }
}

/// Read-query execution seam the aggregator fans out through. The
/// production implementation runs queries against the list schema; tests
/// substitute canned responses.
#[async_trait]
pub trait QueryGateway: Send + Sync {
    async fn query(&self, query: &str, variables: serde_json::Value) -> GatewayResponse;
}

/// Executes gateway queries against the in-process list schema.
pub struct SchemaGateway {
    schema: ListSchema,
}

impl SchemaGateway {
    pub fn new(schema: ListSchema) -> Self {
        Self { schema }
    }
}

#[async_trait]
impl QueryGateway for SchemaGateway {
    async fn query(&self, query: &str, variables: serde_json::Value) -> GatewayResponse {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = self.schema.execute(request).await;

        let mut errors: Vec<GatewayError> = response
            .errors
            .iter()
            .map(|e| GatewayError {
                message: e.message.clone(),
            })
            .collect();

        let data = match response.data.into_json() {
            Ok(data) => data,
            Err(e) => {
                errors.push(GatewayError {
                    message: format!("Response serialization failed: {e}"),
                });
                serde_json::Value::Null
            }
        };

        GatewayResponse { data, errors }
    }
}
