use std::collections::HashMap;

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;

use super::{Collection, Id, Object, Record, Store};
use crate::err::Error;

/// An in-process document store.
///
/// Documents are kept in insertion order, which is the order `find`
/// returns them in. Locks are only held for the duration of a single
/// operation, never across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
	collections: RwLock<HashMap<Collection, IndexMap<Id, Object>>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl Store for MemoryStore {
	async fn insert(&self, collection: Collection, body: Object) -> Result<Id, Error> {
		let id = Id::generate();
		trace!("Inserting {id} into {collection}");
		self.collections.write().entry(collection).or_default().insert(id, body);
		Ok(id)
	}

	async fn find(&self, collection: Collection) -> Result<Vec<Record>, Error> {
		let collections = self.collections.read();
		let records = match collections.get(&collection) {
			Some(documents) => documents
				.iter()
				.map(|(id, body)| Record {
					id: *id,
					body: body.clone(),
				})
				.collect(),
			None => Vec::new(),
		};
		Ok(records)
	}

	async fn find_one(&self, collection: Collection, id: &Id) -> Result<Option<Record>, Error> {
		let collections = self.collections.read();
		let record = collections.get(&collection).and_then(|documents| documents.get(id)).map(
			|body| Record {
				id: *id,
				body: body.clone(),
			},
		);
		Ok(record)
	}

	async fn update_one(
		&self,
		collection: Collection,
		id: &Id,
		set: Object,
	) -> Result<Option<Record>, Error> {
		let mut collections = self.collections.write();
		let Some(body) = collections.get_mut(&collection).and_then(|documents| documents.get_mut(id))
		else {
			return Ok(None);
		};
		// Replace only the listed fields
		for (field, value) in set {
			body.insert(field, value);
		}
		Ok(Some(Record {
			id: *id,
			body: body.clone(),
		}))
	}

	async fn delete_one(&self, collection: Collection, id: &Id) -> Result<bool, Error> {
		let mut collections = self.collections.write();
		let removed = collections
			.get_mut(&collection)
			.is_some_and(|documents| documents.shift_remove(id).is_some());
		Ok(removed)
	}

	async fn health(&self) -> Result<(), Error> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn object(value: serde_json::Value) -> Object {
		match value {
			serde_json::Value::Object(map) => map,
			_ => panic!("expected a JSON object"),
		}
	}

	#[tokio::test]
	async fn find_returns_documents_in_insertion_order() {
		let store = MemoryStore::new();
		let a = store.insert(Collection::Students, object(json!({ "name": "a" }))).await.unwrap();
		let b = store.insert(Collection::Students, object(json!({ "name": "b" }))).await.unwrap();
		let c = store.insert(Collection::Students, object(json!({ "name": "c" }))).await.unwrap();
		let ids: Vec<Id> =
			store.find(Collection::Students).await.unwrap().into_iter().map(|r| r.id).collect();
		assert_eq!(ids, vec![a, b, c]);
	}

	#[tokio::test]
	async fn collections_are_isolated() {
		let store = MemoryStore::new();
		let id = store.insert(Collection::Teachers, object(json!({ "name": "t" }))).await.unwrap();
		assert!(store.find(Collection::Students).await.unwrap().is_empty());
		assert!(store.find_one(Collection::Courses, &id).await.unwrap().is_none());
		assert!(!store.delete_one(Collection::Students, &id).await.unwrap());
		assert!(store.find_one(Collection::Teachers, &id).await.unwrap().is_some());
	}

	#[tokio::test]
	async fn update_replaces_only_listed_fields() {
		let store = MemoryStore::new();
		let id = store
			.insert(Collection::Courses, object(json!({ "title": "Math", "description": "d" })))
			.await
			.unwrap();
		let record = store
			.update_one(Collection::Courses, &id, object(json!({ "title": "Advanced Math" })))
			.await
			.unwrap()
			.unwrap();
		assert_eq!(record.id, id);
		assert_eq!(record.body, object(json!({ "title": "Advanced Math", "description": "d" })));
	}

	#[tokio::test]
	async fn update_of_missing_document_matches_nothing() {
		let store = MemoryStore::new();
		let res = store
			.update_one(Collection::Courses, &Id::generate(), object(json!({ "title": "x" })))
			.await
			.unwrap();
		assert!(res.is_none());
		assert!(store.find(Collection::Courses).await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn delete_reports_whether_a_document_was_removed() {
		let store = MemoryStore::new();
		let a = store.insert(Collection::Students, object(json!({ "name": "a" }))).await.unwrap();
		let b = store.insert(Collection::Students, object(json!({ "name": "b" }))).await.unwrap();
		assert!(store.delete_one(Collection::Students, &a).await.unwrap());
		assert!(!store.delete_one(Collection::Students, &a).await.unwrap());
		let remaining = store.find(Collection::Students).await.unwrap();
		assert_eq!(remaining.len(), 1);
		assert_eq!(remaining[0].id, b);
	}
}
