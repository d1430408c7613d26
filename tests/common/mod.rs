#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use user_platform::core::models::{Role, User, parse_timestamp};
use user_platform::errors::{UserError, UserResult};
use user_platform::infrastructure::aws::{
    DocumentClient, Item, PutItemRequest, QueryRequest, QueryResponse,
};

pub const TEST_TABLE: &str = "TestUserTableName";
pub const TEST_ROLE_INDEX: &str = "TestUserTableRoleIndexName";

pub fn mock_user(role: Role) -> User {
    let ts = parse_timestamp("2023-09-10T05:58:16.945Z").unwrap();
    User {
        id: "TestUserId".to_string(),
        email: "test@email.com".to_string(),
        role,
        created_at: ts,
        updated_at: ts,
    }
}

pub fn string_item(pairs: &[(&str, &str)]) -> Item {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), AttributeValue::S((*v).to_string())))
        .collect()
}

/// Table emulation keyed by `id`, answering role queries by scanning its items.
/// Every request is recorded for later assertions.
#[derive(Default)]
pub struct InMemoryDocumentClient {
    items: Mutex<HashMap<String, Item>>,
    pub puts: Mutex<Vec<PutItemRequest>>,
    pub queries: Mutex<Vec<QueryRequest>>,
    failure: Option<String>,
}

impl InMemoryDocumentClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Inserts a raw item, bypassing the repository.
    pub fn seed(&self, item: Item) {
        let id = match item.get("id") {
            Some(AttributeValue::S(id)) => id.clone(),
            _ => format!("seed-{}", self.items.lock().unwrap().len()),
        };
        self.items.lock().unwrap().insert(id, item);
    }

    pub fn recorded_puts(&self) -> Vec<PutItemRequest> {
        self.puts.lock().unwrap().clone()
    }

    pub fn recorded_queries(&self) -> Vec<QueryRequest> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentClient for InMemoryDocumentClient {
    async fn put_item(&self, request: PutItemRequest) -> UserResult<()> {
        self.puts.lock().unwrap().push(request.clone());
        if let Some(message) = &self.failure {
            return Err(UserError::Store(message.clone()));
        }
        self.seed(request.item);
        Ok(())
    }

    async fn query(&self, request: QueryRequest) -> UserResult<QueryResponse> {
        self.queries.lock().unwrap().push(request.clone());
        if let Some(message) = &self.failure {
            return Err(UserError::Store(message.clone()));
        }

        let wanted = request.expression_attribute_values.get(":role").cloned();
        let mut matches: Vec<Item> = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| item.get("role").cloned() == wanted)
            .cloned()
            .collect();
        matches.sort_by_key(|item| format!("{:?}", item.get("id")));

        Ok(QueryResponse {
            // DynamoDB omits `Items` entirely on some empty responses
            items: (!matches.is_empty()).then_some(matches),
            last_evaluated_key: None,
        })
    }
}

/// Returns one canned query response regardless of the request.
pub struct ScriptedDocumentClient {
    pub response: QueryResponse,
}

#[async_trait]
impl DocumentClient for ScriptedDocumentClient {
    async fn put_item(&self, _request: PutItemRequest) -> UserResult<()> {
        Ok(())
    }

    async fn query(&self, _request: QueryRequest) -> UserResult<QueryResponse> {
        Ok(self.response.clone())
    }
}
