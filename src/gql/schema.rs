use async_graphql::{EmptySubscription, Schema};

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::dbs::{Datastore, Table};
use crate::model::{Course, Student, Teacher};

/// The GraphQL schema type for the server.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// The typed collections every resolver has access to
#[derive(Clone)]
pub struct Collections {
	pub students: Table<Student>,
	pub teachers: Table<Teacher>,
	pub courses: Table<Course>,
}

impl Collections {
	pub fn new(store: Datastore) -> Self {
		Self {
			students: Table::new(store.clone()),
			teachers: Table::new(store.clone()),
			courses: Table::new(store),
		}
	}
}

/// Create a new GraphQL schema over the given store.
pub fn create_schema(store: Datastore) -> AppSchema {
	Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(Collections::new(store)).finish()
}
