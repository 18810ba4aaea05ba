//! A GraphQL API over students, teachers and courses.
//!
//! Every GraphQL field maps onto a single document store call. The
//! store sits behind the [`dbs::Store`] trait, so the same resolvers run
//! against SurrealDB in production and an in-process store in tests.
//!
//! # Modules
//!
//! - [`dbs`] - the document store adapter and its implementations
//! - [`model`] - the stored shapes of each entity
//! - [`gql`] - the schema, resolvers and model-to-API conversion
//! - [`net`] - the HTTP server
//! - [`cli`] - the command line interface

#[macro_use]
extern crate tracing;

pub mod cli;
pub mod cnf;
pub mod dbs;
pub mod env;
pub mod err;
pub mod gql;
pub mod model;
pub mod net;
pub mod telemetry;

pub use dbs::{Datastore, MemoryStore, Store};
pub use err::Error;
pub use gql::{AppSchema, create_schema};
