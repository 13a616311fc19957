use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/artists", get(handlers::artist::list_artists))
        .route("/artists/search", post(handlers::artist::search_artists))
        .route(
            "/artists/create",
            get(handlers::artist::create_artist_form).post(handlers::artist::create_artist),
        )
        .route("/artists/:artist_id", get(handlers::artist::show_artist))
        .route(
            "/artists/:artist_id/edit",
            get(handlers::artist::edit_artist).post(handlers::artist::update_artist),
        )
        .route("/artists/:artist_id/delete", delete(handlers::artist::delete_artist))
}
