use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use crate::core::config::DynamoDbOptions;
use crate::errors::{UserError, UserResult};

/// A DynamoDB item: attribute name to typed value.
pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, Clone, PartialEq)]
pub struct PutItemRequest {
    pub table_name: String,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub table_name: String,
    pub index_name: Option<String>,
    pub key_condition_expression: String,
    pub expression_attribute_names: HashMap<String, String>,
    pub expression_attribute_values: Item,
}

/// One page of query results, exactly as the store reported it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResponse {
    pub items: Option<Vec<Item>>,
    pub last_evaluated_key: Option<Item>,
}

/// The slice of a DynamoDB client the user store needs.
///
/// Implementations make one call per method, with no retries of their own.
#[async_trait]
pub trait DocumentClient: Send + Sync {
    /// # Errors
    ///
    /// Returns `UserError::Store` if the write is rejected or the call fails.
    async fn put_item(&self, request: PutItemRequest) -> UserResult<()>;

    /// # Errors
    ///
    /// Returns `UserError::Store` if the query is rejected or the call fails.
    async fn query(&self, request: QueryRequest) -> UserResult<QueryResponse>;
}

#[async_trait]
impl<T> DocumentClient for Arc<T>
where
    T: DocumentClient + ?Sized,
{
    async fn put_item(&self, request: PutItemRequest) -> UserResult<()> {
        (**self).put_item(request).await
    }

    async fn query(&self, request: QueryRequest) -> UserResult<QueryResponse> {
        (**self).query(request).await
    }
}

#[derive(Debug, Clone)]
pub struct DynamoDbDocumentClient {
    client: Client,
}

impl DynamoDbDocumentClient {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads shared AWS configuration for `options.region`, pointing at `options.endpoint`
    /// when one is set (DynamoDB Local).
    pub async fn from_options(options: &DynamoDbOptions) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(options.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared);
        if let Some(endpoint) = &options.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

fn store_error<E, R>(operation: &str, error: SdkError<E, R>) -> UserError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    UserError::Store(format!("dynamodb {operation}: {}", DisplayErrorContext(&error)))
}

#[async_trait]
impl DocumentClient for DynamoDbDocumentClient {
    async fn put_item(&self, request: PutItemRequest) -> UserResult<()> {
        debug!(table = %request.table_name, "dynamodb put_item");

        self.client
            .put_item()
            .table_name(request.table_name)
            .set_item(Some(request.item))
            .send()
            .await
            .map_err(|e| store_error("put_item", e))?;

        Ok(())
    }

    async fn query(&self, request: QueryRequest) -> UserResult<QueryResponse> {
        debug!(
            table = %request.table_name,
            index = ?request.index_name,
            "dynamodb query"
        );

        let output = self
            .client
            .query()
            .table_name(request.table_name)
            .set_index_name(request.index_name)
            .key_condition_expression(request.key_condition_expression)
            .set_expression_attribute_names(Some(request.expression_attribute_names))
            .set_expression_attribute_values(Some(request.expression_attribute_values))
            .send()
            .await
            .map_err(|e| store_error("query", e))?;

        Ok(QueryResponse {
            items: output.items,
            last_evaluated_key: output.last_evaluated_key,
        })
    }
}
