use async_trait::async_trait;
use surrealdb::Error as SurrealError;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::error::Api as ApiError;
use surrealdb::opt::auth::Root;

use super::{Collection, Id, Object, Record, Store, StoreConfig};
use crate::err::Error;

/// The projected field which carries the record key in query results
const KEY: &str = "__key";

const INSERT: &str = "CREATE type::thing($tb, $id) CONTENT $body RETURN NONE";

const FIND: &str = "SELECT *, record::id(id) AS __key OMIT id FROM type::table($tb)";

const FIND_ONE: &str = "SELECT * OMIT id FROM type::thing($tb, $id)";

const UPDATE_ONE: &str =
	"SELECT * OMIT id FROM (UPDATE type::thing($tb, $id) MERGE $set RETURN AFTER)";

const DELETE_ONE: &str =
	"SELECT VALUE record::id(id) FROM (DELETE type::thing($tb, $id) RETURN BEFORE)";

/// A document store backed by SurrealDB.
///
/// The connection string selects the engine, so the same store works
/// against a remote server (`ws://`, `http://`) or an embedded engine
/// (`memory`, `rocksdb://`, `surrealkv://`). Collections map onto
/// tables, and identifiers onto record keys.
#[derive(Clone)]
pub struct SurrealStore {
	db: Surreal<Any>,
}

impl SurrealStore {
	pub async fn connect(config: &StoreConfig) -> Result<Self, Error> {
		// Connect to the database engine
		let db = connect(config.endpoint.as_str()).await?;
		// Sign in to the server if credentials were specified
		if let (Some(username), Some(password)) = (&config.username, &config.password) {
			let root = Root {
				username: username.as_str(),
				password: password.as_str(),
			};
			if let Err(error) = db.signin(root).await {
				match error {
					// Authentication not supported by this engine, we can safely continue
					SurrealError::Api(ApiError::AuthNotSupported) => {}
					error => {
						return Err(error.into());
					}
				}
			}
		}
		// Use the specified namespace / database
		db.use_ns(config.namespace.as_str()).use_db(config.database.as_str()).await?;
		Ok(Self {
			db,
		})
	}
}

#[async_trait]
impl Store for SurrealStore {
	async fn insert(&self, collection: Collection, body: Object) -> Result<Id, Error> {
		let id = Id::generate();
		trace!("Inserting {id} into {collection}");
		self.db
			.query(INSERT)
			.bind(("tb", collection.name()))
			.bind(("id", id.to_string()))
			.bind(("body", body))
			.await?
			.check()?;
		Ok(id)
	}

	async fn find(&self, collection: Collection) -> Result<Vec<Record>, Error> {
		let mut res = self.db.query(FIND).bind(("tb", collection.name())).await?;
		let rows: Vec<Object> = res.take(0)?;
		rows.into_iter().map(|row| keyed(collection, row)).collect()
	}

	async fn find_one(&self, collection: Collection, id: &Id) -> Result<Option<Record>, Error> {
		let mut res = self
			.db
			.query(FIND_ONE)
			.bind(("tb", collection.name()))
			.bind(("id", id.to_string()))
			.await?;
		let body: Option<Object> = res.take(0)?;
		Ok(body.map(|body| Record {
			id: *id,
			body,
		}))
	}

	async fn update_one(
		&self,
		collection: Collection,
		id: &Id,
		set: Object,
	) -> Result<Option<Record>, Error> {
		let mut res = self
			.db
			.query(UPDATE_ONE)
			.bind(("tb", collection.name()))
			.bind(("id", id.to_string()))
			.bind(("set", set))
			.await?;
		let body: Option<Object> = res.take(0)?;
		Ok(body.map(|body| Record {
			id: *id,
			body,
		}))
	}

	async fn delete_one(&self, collection: Collection, id: &Id) -> Result<bool, Error> {
		let mut res = self
			.db
			.query(DELETE_ONE)
			.bind(("tb", collection.name()))
			.bind(("id", id.to_string()))
			.await?;
		let removed: Vec<String> = res.take(0)?;
		Ok(!removed.is_empty())
	}

	async fn health(&self) -> Result<(), Error> {
		self.db.health().await?;
		Ok(())
	}
}

/// Split the projected record key off a query row
fn keyed(collection: Collection, mut row: Object) -> Result<Record, Error> {
	let id = match row.remove(KEY) {
		Some(serde_json::Value::String(key)) => key.parse()?,
		Some(other) => {
			return Err(Error::Corrupted {
				collection: collection.name(),
				reason: format!("record key `{other}` is not a string"),
			});
		}
		None => {
			return Err(Error::Corrupted {
				collection: collection.name(),
				reason: "record has no key".to_owned(),
			});
		}
	};
	Ok(Record {
		id,
		body: row,
	})
}
