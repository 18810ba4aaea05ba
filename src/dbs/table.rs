use std::marker::PhantomData;

use serde::Serialize;

use super::{Datastore, Id, Object, Record};
use crate::err::Error;
use crate::model::{Document, Entity};

/// A typed view onto a single collection of the store.
///
/// Bodies are encoded to and decoded from JSON objects here, so the
/// resolvers only ever deal with [`Document`]s of a concrete entity.
pub struct Table<T> {
	store: Datastore,
	kind: PhantomData<fn() -> T>,
}

impl<T> Clone for Table<T> {
	fn clone(&self) -> Self {
		Self {
			store: self.store.clone(),
			kind: PhantomData,
		}
	}
}

impl<T: Entity> Table<T> {
	pub fn new(store: Datastore) -> Self {
		Self {
			store,
			kind: PhantomData,
		}
	}

	/// Fetch every document in the collection
	pub async fn find(&self) -> Result<Vec<Document<T>>, Error> {
		let records = self.store.find(T::COLLECTION).await?;
		records.into_iter().map(decode).collect()
	}

	/// Fetch a single document, if it exists
	pub async fn find_one(&self, id: &Id) -> Result<Option<Document<T>>, Error> {
		self.store.find_one(T::COLLECTION, id).await?.map(decode).transpose()
	}

	/// Insert a new document.
	///
	/// The returned document is the inserted body combined with the
	/// identifier assigned by the store. It is not fetched back.
	pub async fn insert(&self, body: T) -> Result<Document<T>, Error> {
		let object = encode::<T, _>(&body)?;
		let id = self.store.insert(T::COLLECTION, object).await?;
		Ok(Document::new(id, body))
	}

	/// Replace the fields present in `patch`, returning the updated document
	pub async fn update_one<P>(&self, id: &Id, patch: &P) -> Result<Option<Document<T>>, Error>
	where
		P: Serialize + ?Sized,
	{
		let set = encode::<T, _>(patch)?;
		self.store.update_one(T::COLLECTION, id, set).await?.map(decode).transpose()
	}

	/// Remove a document, returning whether it existed
	pub async fn delete_one(&self, id: &Id) -> Result<bool, Error> {
		self.store.delete_one(T::COLLECTION, id).await
	}
}

fn encode<T: Entity, V: Serialize + ?Sized>(value: &V) -> Result<Object, Error> {
	match serde_json::to_value(value)? {
		serde_json::Value::Object(object) => Ok(object),
		other => Err(Error::Corrupted {
			collection: T::COLLECTION.name(),
			reason: format!("expected a document, found `{other}`"),
		}),
	}
}

fn decode<T: Entity>(record: Record) -> Result<Document<T>, Error> {
	let Record {
		id,
		body,
	} = record;
	match serde_json::from_value(serde_json::Value::Object(body)) {
		Ok(body) => Ok(Document::new(id, body)),
		Err(e) => Err(Error::Corrupted {
			collection: T::COLLECTION.name(),
			reason: e.to_string(),
		}),
	}
}
