use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// A client supplied identifier could not be parsed
	#[error("invalid identifier: {0}")]
	InvalidId(String),

	/// The document to modify does not exist
	#[error("not found")]
	NotFound,

	/// A stored document does not have the expected shape
	#[error("stored document in `{collection}` could not be decoded: {reason}")]
	Corrupted {
		collection: &'static str,
		reason: String,
	},

	#[error("The connection string `{0}` is not supported")]
	InvalidConnection(String),

	#[error("The log level `{0}` is not valid, use one of none, error, warn, info, debug, trace or full")]
	InvalidLogLevel(String),

	#[error("There was a problem with the database: {0}")]
	Surreal(#[from] surrealdb::Error),

	#[error("There was a problem serializing a document: {0}")]
	Json(#[from] serde_json::Error),

	#[error("There was a problem with the network: {0}")]
	Io(#[from] std::io::Error),
}
