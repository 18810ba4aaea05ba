mod gql;
mod health;
mod signals;
mod version;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::dbs::Datastore;
use crate::err::Error;
use crate::gql::AppSchema;

const LOG: &str = "school::net";

/// State shared by the HTTP handlers
#[derive(Clone)]
pub struct AppState {
	pub datastore: Datastore,
}

/// Build the HTTP routes of the server
pub fn router(schema: AppSchema, datastore: Datastore, graphiql: bool) -> Router {
	Router::new()
		// GraphQL endpoint
		.merge(gql::router(schema, graphiql))
		// Health endpoint
		.merge(health::router())
		// Version endpoint
		.merge(version::router())
		.with_state(AppState {
			datastore,
		})
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
}

/// Serve the routes until a shutdown signal is received
pub async fn init(bind: SocketAddr, app: Router) -> Result<(), Error> {
	let listener = TcpListener::bind(bind).await?;
	info!(target: LOG, "Started web server on {}", listener.local_addr()?);
	axum::serve(listener, app).with_graceful_shutdown(signals::shutdown()).await?;
	info!(target: LOG, "Web server stopped. Bye!");
	Ok(())
}
