//! GraphQL API for the registry
//!
//! - [`QueryRoot`]: lookups, listings and major search
//! - [`MutationRoot`]: add, update and delete for students and courses

mod query;
mod mutation;
mod types;

pub use query::QueryRoot;
pub use mutation::MutationRoot;
pub use types::*;

use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use crate::store::{MemoryStore, StoreError};
use std::sync::Arc;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a shared store
pub fn build_schema(store: Arc<MemoryStore>) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Convert a store failure into a GraphQL error carrying a machine-readable `code`
pub(crate) fn store_error(err: StoreError) -> async_graphql::Error {
    let code = match &err {
        StoreError::NotFound { .. } => "NOT_FOUND",
        StoreError::DuplicateId { .. } => "DUPLICATE_ID",
        StoreError::LockPoisoned | StoreError::Seed { .. } => "INTERNAL",
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, e| e.set("code", code))
}
