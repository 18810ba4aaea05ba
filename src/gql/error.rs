use crate::err::Error;

impl From<Error> for async_graphql::Error {
	fn from(error: Error) -> Self {
		match &error {
			// Expected outcomes of a client request
			Error::InvalidId(_) | Error::NotFound => {
				debug!("Resolver failed: {error}");
				async_graphql::Error::new(error.to_string())
			}
			// Failures of the store or of stored data
			Error::Surreal(e) => {
				error!("Database error: {e}");
				async_graphql::Error::new(format!("database error: {e}"))
			}
			_ => {
				error!("Database error: {error}");
				async_graphql::Error::new(format!("database error: {error}"))
			}
		}
	}
}
