//! GraphQL schema definition.
//!
//! - [`types`] - the API representations of each entity
//! - [`query`] - list and lookup resolvers
//! - [`mutation`] - create, update, delete and enrollment resolvers
//! - [`convert`] - conversions from stored documents

mod convert;
mod error;
mod mutation;
mod query;
mod schema;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{AppSchema, Collections, create_schema};
pub use types::*;
