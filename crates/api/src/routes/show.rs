use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/shows", get(handlers::show::list_shows))
        .route("/shows/search", post(handlers::show::search_shows))
        .route(
            "/shows/create",
            get(handlers::show::create_show_form).post(handlers::show::create_show),
        )
        .route(
            "/shows/:show_id/edit",
            get(handlers::show::edit_show).post(handlers::show::update_show),
        )
        .route("/shows/:show_id/delete", delete(handlers::show::delete_show))
}
