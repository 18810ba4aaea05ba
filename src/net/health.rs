use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;

use super::AppState;

pub(super) fn router() -> Router<AppState> {
	Router::new().route("/health", get(handler))
}

async fn handler(State(state): State<AppState>) -> StatusCode {
	match state.datastore.health().await {
		// The store responded
		Ok(()) => StatusCode::OK,
		// The store could not be reached
		Err(e) => {
			warn!(target: super::LOG, "Health check failed: {e}");
			StatusCode::INTERNAL_SERVER_ERROR
		}
	}
}
