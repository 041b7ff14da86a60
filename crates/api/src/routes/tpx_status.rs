use axum::routing::get;
use axum::Router;

use crate::handlers::tpx_status;
use crate::state::AppState;

/// Ingestion routes, mounted at the root for existing pipeline clients.
///
/// ```text
/// GET  /tpx_status   -> report_status
/// POST /tpx_status   -> report_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/tpx_status",
        get(tpx_status::report_status).post(tpx_status::report_status),
    )
}
