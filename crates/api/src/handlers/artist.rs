use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use stagebook_core::{
    commands,
    models::artist::{ArtistEdit, ArtistForm, ArtistListItem, ArtistPage, ArtistSummary},
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
pub async fn list_artists(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ArtistListItem>>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let artists = pages::artist_list(&mut PgDirectory::new(&mut conn)).await?;
    Ok(Json(artists))
}

#[axum::debug_handler]
pub async fn search_artists(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResults<ArtistSummary>>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let results = pages::search_artists(
        &mut PgDirectory::new(&mut conn),
        &payload.search_term,
        time::now(),
    )
    .await?;
    Ok(Json(results))
}

#[axum::debug_handler]
pub async fn show_artist(
    State(state): State<Arc<ApiState>>,
    Path(artist_id): Path<i32>,
) -> Result<Json<ArtistPage>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let page = pages::artist_page(&mut PgDirectory::new(&mut conn), artist_id, time::now()).await?;
    Ok(Json(page))
}

pub async fn create_artist_form() -> Json<FormChoices> {
    Json(validation::form_choices())
}

#[axum::debug_handler]
pub async fn create_artist(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ArtistForm>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let Json(payload) = payload?;
    let form = validation::validate(payload.normalized())?;

    let mut tx = state.db_pool.begin().await?;
    let artist = commands::create_artist(&mut PgDirectory::new(&mut tx), form).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::saved(
        artist.id,
        format!("Artist {} was successfully listed!", artist.name),
    )))
}

#[axum::debug_handler]
pub async fn edit_artist(
    State(state): State<Arc<ApiState>>,
    Path(artist_id): Path<i32>,
) -> Result<Json<ArtistEdit>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let edit = pages::artist_edit(&mut PgDirectory::new(&mut conn), artist_id).await?;
    Ok(Json(edit))
}

#[axum::debug_handler]
pub async fn update_artist(
    State(state): State<Arc<ApiState>>,
    Path(artist_id): Path<i32>,
    payload: Result<Json<ArtistForm>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let Json(payload) = payload?;
    let form = validation::validate(payload.normalized())?;

    let mut tx = state.db_pool.begin().await?;
    let artist = commands::update_artist(&mut PgDirectory::new(&mut tx), artist_id, form).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::saved(
        artist.id,
        format!("Artist {} was successfully updated!", artist.name),
    )))
}

#[axum::debug_handler]
pub async fn delete_artist(
    State(state): State<Arc<ApiState>>,
    Path(artist_id): Path<i32>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut tx = state.db_pool.begin().await?;
    commands::delete_artist(&mut PgDirectory::new(&mut tx), artist_id).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::deleted()))
}
