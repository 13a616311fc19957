use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/venues", get(handlers::venue::list_venues))
        .route("/venues/search", post(handlers::venue::search_venues))
        .route(
            "/venues/create",
            get(handlers::venue::create_venue_form).post(handlers::venue::create_venue),
        )
        .route("/venues/:venue_id", get(handlers::venue::show_venue))
        .route(
            "/venues/:venue_id/edit",
            get(handlers::venue::edit_venue).post(handlers::venue::update_venue),
        )
        .route("/venues/:venue_id/delete", delete(handlers::venue::delete_venue))
}
