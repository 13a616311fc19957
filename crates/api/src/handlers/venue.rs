use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use stagebook_core::{
    commands,
    models::venue::{VenueArea, VenueEdit, VenueForm, VenuePage, VenueSummary},
    pages,
    search::SearchResults,
    time,
    validation::{self, FormChoices},
};
use stagebook_db::PgDirectory;
use std::sync::Arc;

use super::{MutationResponse, SearchRequest};
use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_venues(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<VenueArea>>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let areas = pages::venue_areas(&mut PgDirectory::new(&mut conn), time::now()).await?;
    Ok(Json(areas))
}

#[axum::debug_handler]
pub async fn search_venues(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResults<VenueSummary>>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let results = pages::search_venues(
        &mut PgDirectory::new(&mut conn),
        &payload.search_term,
        time::now(),
    )
    .await?;
    Ok(Json(results))
}

#[axum::debug_handler]
pub async fn show_venue(
    State(state): State<Arc<ApiState>>,
    Path(venue_id): Path<i32>,
) -> Result<Json<VenuePage>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let page = pages::venue_page(&mut PgDirectory::new(&mut conn), venue_id, time::now()).await?;
    Ok(Json(page))
}

pub async fn create_venue_form() -> Json<FormChoices> {
    Json(validation::form_choices())
}

#[axum::debug_handler]
pub async fn create_venue(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<VenueForm>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let Json(payload) = payload?;
    let form = validation::validate(payload.normalized())?;

    let mut tx = state.db_pool.begin().await?;
    let venue = commands::create_venue(&mut PgDirectory::new(&mut tx), form).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::saved(
        venue.id,
        format!("Venue {} was successfully listed!", venue.name),
    )))
}

#[axum::debug_handler]
pub async fn edit_venue(
    State(state): State<Arc<ApiState>>,
    Path(venue_id): Path<i32>,
) -> Result<Json<VenueEdit>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let edit = pages::venue_edit(&mut PgDirectory::new(&mut conn), venue_id).await?;
    Ok(Json(edit))
}

#[axum::debug_handler]
pub async fn update_venue(
    State(state): State<Arc<ApiState>>,
    Path(venue_id): Path<i32>,
    payload: Result<Json<VenueForm>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let Json(payload) = payload?;
    let form = validation::validate(payload.normalized())?;

    let mut tx = state.db_pool.begin().await?;
    let venue = commands::update_venue(&mut PgDirectory::new(&mut tx), venue_id, form).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::saved(
        venue.id,
        format!("Venue {} was successfully updated!", venue.name),
    )))
}

#[axum::debug_handler]
pub async fn delete_venue(
    State(state): State<Arc<ApiState>>,
    Path(venue_id): Path<i32>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut tx = state.db_pool.begin().await?;
    commands::delete_venue(&mut PgDirectory::new(&mut tx), venue_id).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::deleted()))
}
