//! The document store adapter.
//!
//! Documents live in three named collections and are addressed by an
//! opaque [`Id`] which the store assigns on insert. The [`Store`] trait
//! is the only way the rest of the crate talks to the database, so a
//! [`MemoryStore`] can stand in for [`SurrealStore`] anywhere.

mod id;
mod mem;
mod surreal;
mod table;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::cnf::{COURSES, MEMORY_STORE, STUDENTS, TEACHERS};
use crate::err::Error;

pub use id::Id;
pub use mem::MemoryStore;
pub use surreal::SurrealStore;
pub use table::Table;

/// The body of a stored document, without its identifier
pub type Object = serde_json::Map<String, serde_json::Value>;

/// A shared handle to the store, passed to every resolver
pub type Datastore = Arc<dyn Store>;

/// The named collections documents are stored in
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Collection {
	Students,
	Teachers,
	Courses,
}

impl Collection {
	/// The name of the collection in the underlying store
	pub fn name(&self) -> &'static str {
		match self {
			Self::Students => STUDENTS,
			Self::Teachers => TEACHERS,
			Self::Courses => COURSES,
		}
	}
}

impl fmt::Display for Collection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A stored document together with its identifier
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
	pub id: Id,
	pub body: Object,
}

/// Operations every document store must support.
///
/// Each method is a single call against the store. Nothing here spans
/// more than one document, and no method retries on failure.
#[async_trait]
pub trait Store: Send + Sync {
	/// Insert a new document, returning the identifier the store assigned
	async fn insert(&self, collection: Collection, body: Object) -> Result<Id, Error>;

	/// Fetch every document in a collection, in store order
	async fn find(&self, collection: Collection) -> Result<Vec<Record>, Error>;

	/// Fetch a single document by identifier
	async fn find_one(&self, collection: Collection, id: &Id) -> Result<Option<Record>, Error>;

	/// Replace the given fields of a document, leaving all other fields
	/// untouched, and return the document as it is after the update
	async fn update_one(
		&self,
		collection: Collection,
		id: &Id,
		set: Object,
	) -> Result<Option<Record>, Error>;

	/// Remove a document, returning whether anything was removed
	async fn delete_one(&self, collection: Collection, id: &Id) -> Result<bool, Error>;

	/// Check that the store is reachable
	async fn health(&self) -> Result<(), Error>;
}

/// Connection details for the store
#[derive(Clone, Debug)]
pub struct StoreConfig {
	/// The connection string, which also selects the store engine
	pub endpoint: String,
	pub namespace: String,
	pub database: String,
	pub username: Option<String>,
	pub password: Option<String>,
}

/// Connect to the store selected by the connection string
pub async fn connect(config: &StoreConfig) -> Result<Datastore, Error> {
	if config.endpoint.trim().is_empty() {
		return Err(Error::InvalidConnection(config.endpoint.clone()));
	}
	if config.endpoint == MEMORY_STORE {
		debug!("Using the in-process document store");
		return Ok(Arc::new(MemoryStore::new()));
	}
	let store = SurrealStore::connect(config).await?;
	Ok(Arc::new(store))
}
