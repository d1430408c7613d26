//! AWS services integration.
//!
//! This module contains the DynamoDB document client used by the user store.

pub mod dynamodb;

pub use dynamodb::{
    DocumentClient, DynamoDbDocumentClient, Item, PutItemRequest, QueryRequest, QueryResponse,
};
