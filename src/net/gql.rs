use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::Router;
use axum::response::{self, IntoResponse};
use axum::routing::{get, post_service};

use crate::cnf::GRAPHQL_PATH;
use crate::gql::AppSchema;

pub(super) fn router<S>(schema: AppSchema, graphiql: bool) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	let service = GraphQL::new(schema);
	if graphiql {
		Router::new().route(GRAPHQL_PATH, get(self::graphiql).post_service(service))
	} else {
		Router::new().route(GRAPHQL_PATH, post_service(service))
	}
}

async fn graphiql() -> impl IntoResponse {
	response::Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
