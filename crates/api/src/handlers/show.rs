use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use stagebook_core::{
    commands,
    models::show::{ShowEdit, ShowForm, ShowListing},
    pages,
    search::SearchResults,
    time, validation,
};
use stagebook_db::PgDirectory;
use std::sync::Arc;

use super::{MutationResponse, SearchRequest};
use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_shows(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ShowListing>>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let shows = pages::show_list(&mut PgDirectory::new(&mut conn)).await?;
    Ok(Json(shows))
}

#[axum::debug_handler]
pub async fn search_shows(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResults<ShowListing>>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let results = pages::search_shows(&mut PgDirectory::new(&mut conn), &payload.search_term).await?;
    Ok(Json(results))
}

/// Blank show form with the start time preset to now.
pub async fn create_show_form() -> Json<ShowForm> {
    Json(ShowForm {
        start_time: time::format_start_time(time::now()),
        ..ShowForm::default()
    })
}

#[axum::debug_handler]
pub async fn create_show(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ShowForm>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let Json(payload) = payload?;
    let form = validation::validate(payload.normalized())?;

    let mut tx = state.db_pool.begin().await?;
    let show = commands::create_show(&mut PgDirectory::new(&mut tx), form).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::saved(
        show.id,
        format!("Show {} was successfully listed!", show.title),
    )))
}

#[axum::debug_handler]
pub async fn edit_show(
    State(state): State<Arc<ApiState>>,
    Path(show_id): Path<i32>,
) -> Result<Json<ShowEdit>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let edit = pages::show_edit(&mut PgDirectory::new(&mut conn), show_id).await?;
    Ok(Json(edit))
}

#[axum::debug_handler]
pub async fn update_show(
    State(state): State<Arc<ApiState>>,
    Path(show_id): Path<i32>,
    payload: Result<Json<ShowForm>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let Json(payload) = payload?;
    let form = validation::validate(payload.normalized())?;

    let mut tx = state.db_pool.begin().await?;
    let show = commands::update_show(&mut PgDirectory::new(&mut tx), show_id, form).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::saved(
        show.id,
        format!("Show {} was successfully updated!", show.title),
    )))
}

#[axum::debug_handler]
pub async fn delete_show(
    State(state): State<Arc<ApiState>>,
    Path(show_id): Path<i32>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut tx = state.db_pool.begin().await?;
    commands::delete_show(&mut PgDirectory::new(&mut tx), show_id).await?;
    tx.commit().await?;

    Ok(Json(MutationResponse::deleted()))
}
