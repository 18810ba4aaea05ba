mod http_integration {
	use std::sync::Arc;

	use async_trait::async_trait;
	use axum::Router;
	use axum::body::Body;
	use axum::http::{Method, Request, StatusCode, header};
	use http_body_util::BodyExt;
	use school_gql::dbs::{Collection, Id, Object, Record};
	use school_gql::{Datastore, Error, MemoryStore, Store, create_schema, net};
	use serde_json::{Value, json};
	use test_log::test;
	use tower::ServiceExt;

	fn app(datastore: Datastore, graphiql: bool) -> Router {
		net::router(create_schema(datastore.clone()), datastore, graphiql)
	}

	fn memory_app(graphiql: bool) -> Router {
		app(Arc::new(MemoryStore::new()), graphiql)
	}

	fn graphql(body: Value) -> Request<Body> {
		Request::builder()
			.method(Method::POST)
			.uri("/graphql")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.unwrap()
	}

	fn get(uri: &str) -> Request<Body> {
		Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap()
	}

	async fn text(res: axum::response::Response) -> String {
		let bytes = res.into_body().collect().await.unwrap().to_bytes();
		String::from_utf8(bytes.to_vec()).unwrap()
	}

	/// A store which cannot be reached
	struct Unreachable;

	#[async_trait]
	impl Store for Unreachable {
		async fn insert(&self, _: Collection, _: Object) -> Result<Id, Error> {
			Err(Error::InvalidConnection("unreachable".to_owned()))
		}
		async fn find(&self, _: Collection) -> Result<Vec<Record>, Error> {
			Err(Error::InvalidConnection("unreachable".to_owned()))
		}
		async fn find_one(&self, _: Collection, _: &Id) -> Result<Option<Record>, Error> {
			Err(Error::InvalidConnection("unreachable".to_owned()))
		}
		async fn update_one(
			&self,
			_: Collection,
			_: &Id,
			_: Object,
		) -> Result<Option<Record>, Error> {
			Err(Error::InvalidConnection("unreachable".to_owned()))
		}
		async fn delete_one(&self, _: Collection, _: &Id) -> Result<bool, Error> {
			Err(Error::InvalidConnection("unreachable".to_owned()))
		}
		async fn health(&self) -> Result<(), Error> {
			Err(Error::InvalidConnection("unreachable".to_owned()))
		}
	}

	#[test(tokio::test)]
	async fn graphql_over_http() -> Result<(), Box<dyn std::error::Error>> {
		let app = memory_app(false);
		// Create a student
		let id = {
			let query = "mutation { createStudent(name: \"Bo\", email: \"b@x.com\") { id name } }";
			let res = app.clone().oneshot(graphql(json!({ "query": query }))).await?;
			assert_eq!(res.status(), StatusCode::OK);
			let body: Value = serde_json::from_str(&text(res).await)?;
			assert_eq!(body["data"]["createStudent"]["name"], "Bo");
			body["data"]["createStudent"]["id"].as_str().unwrap().to_owned()
		};
		// The same router sees the new student
		{
			let query = "query($id: ID!) { student(id: $id) { id email } }";
			let req = graphql(json!({ "query": query, "variables": { "id": id } }));
			let res = app.clone().oneshot(req).await?;
			assert_eq!(res.status(), StatusCode::OK);
			let body: Value = serde_json::from_str(&text(res).await)?;
			assert_eq!(body["data"]["student"], json!({ "id": id, "email": "b@x.com" }));
		}
		// Resolver errors are reported in the response body
		{
			let query = "{ course(id: \"nope\") { id } }";
			let res = app.oneshot(graphql(json!({ "query": query }))).await?;
			assert_eq!(res.status(), StatusCode::OK);
			let body: Value = serde_json::from_str(&text(res).await)?;
			assert_eq!(body["errors"][0]["message"], "invalid identifier: nope");
		}
		Ok(())
	}

	#[test(tokio::test)]
	async fn graphiql_is_only_served_when_enabled() -> Result<(), Box<dyn std::error::Error>> {
		// Disabled by default
		{
			let res = memory_app(false).oneshot(get("/graphql")).await?;
			assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
		}
		// Served on the GraphQL path when enabled
		{
			let res = memory_app(true).oneshot(get("/graphql")).await?;
			assert_eq!(res.status(), StatusCode::OK);
			assert!(text(res).await.contains("graphiql"));
		}
		Ok(())
	}

	#[test(tokio::test)]
	async fn health_reflects_the_store() -> Result<(), Box<dyn std::error::Error>> {
		// A reachable store
		{
			let res = memory_app(false).oneshot(get("/health")).await?;
			assert_eq!(res.status(), StatusCode::OK);
		}
		// An unreachable store
		{
			let res = app(Arc::new(Unreachable), false).oneshot(get("/health")).await?;
			assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
		}
		Ok(())
	}

	#[test(tokio::test)]
	async fn store_failures_surface_as_graphql_errors() -> Result<(), Box<dyn std::error::Error>> {
		let app = app(Arc::new(Unreachable), false);
		let res = app.oneshot(graphql(json!({ "query": "{ students { id } }" }))).await?;
		assert_eq!(res.status(), StatusCode::OK);
		let body: Value = serde_json::from_str(&text(res).await)?;
		assert_eq!(body["data"], json!(null));
		assert!(body["errors"][0]["message"].as_str().unwrap().starts_with("database error"));
		Ok(())
	}

	#[test(tokio::test)]
	async fn version_reports_the_package() -> Result<(), Box<dyn std::error::Error>> {
		let res = memory_app(false).oneshot(get("/version")).await?;
		assert_eq!(res.status(), StatusCode::OK);
		assert!(text(res).await.starts_with("school-"));
		Ok(())
	}

	#[test(tokio::test)]
	async fn unknown_routes_are_not_found() -> Result<(), Box<dyn std::error::Error>> {
		let res = memory_app(false).oneshot(get("/sql")).await?;
		assert_eq!(res.status(), StatusCode::NOT_FOUND);
		Ok(())
	}
}
