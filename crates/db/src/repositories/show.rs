use crate::models::DbShow;
use eyre::Result;
use sqlx::PgConnection;
use stagebook_core::models::show::ShowForm;

const SHOW_COLUMNS: &str =
    "id, title, artist_id, venue_id, start_time, description, register_link";

pub async fn create_show(conn: &mut PgConnection, form: &ShowForm) -> Result<DbShow> {
    tracing::debug!(
        "Creating show: title={}, artist_id={}, venue_id={}, start_time={}",
        form.title, form.artist_id, form.venue_id, form.start_time
    );

    let show = sqlx::query_as::<_, DbShow>(&format!(
        r#"
        INSERT INTO shows (title, artist_id, venue_id, start_time, description, register_link)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {}
        "#,
        SHOW_COLUMNS
    ))
    .bind(&form.title)
    .bind(form.artist_id)
    .bind(form.venue_id)
    .bind(&form.start_time)
    .bind(&form.description)
    .bind(&form.register_link)
    .fetch_one(&mut *conn)
    .await?;

    Ok(show)
}

pub async fn get_show_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<DbShow>> {
    let show = sqlx::query_as::<_, DbShow>(&format!(
        "SELECT {} FROM shows WHERE id = $1",
        SHOW_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(show)
}

pub async fn list_shows(conn: &mut PgConnection) -> Result<Vec<DbShow>> {
    let shows = sqlx::query_as::<_, DbShow>(&format!(
        "SELECT {} FROM shows ORDER BY start_time ASC, id ASC",
        SHOW_COLUMNS
    ))
    .fetch_all(&mut *conn)
    .await?;

    Ok(shows)
}

pub async fn get_shows_by_venue_id(conn: &mut PgConnection, venue_id: i32) -> Result<Vec<DbShow>> {
    let shows = sqlx::query_as::<_, DbShow>(&format!(
        "SELECT {} FROM shows WHERE venue_id = $1 ORDER BY start_time ASC, id ASC",
        SHOW_COLUMNS
    ))
    .bind(venue_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(shows)
}

pub async fn get_shows_by_artist_id(conn: &mut PgConnection, artist_id: i32) -> Result<Vec<DbShow>> {
    let shows = sqlx::query_as::<_, DbShow>(&format!(
        "SELECT {} FROM shows WHERE artist_id = $1 ORDER BY start_time ASC, id ASC",
        SHOW_COLUMNS
    ))
    .bind(artist_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(shows)
}

pub async fn update_show(conn: &mut PgConnection, id: i32, form: &ShowForm) -> Result<Option<DbShow>> {
    let show = sqlx::query_as::<_, DbShow>(&format!(
        r#"
        UPDATE shows
        SET title = $2, artist_id = $3, venue_id = $4, start_time = $5,
            description = $6, register_link = $7
        WHERE id = $1
        RETURNING {}
        "#,
        SHOW_COLUMNS
    ))
    .bind(id)
    .bind(&form.title)
    .bind(form.artist_id)
    .bind(form.venue_id)
    .bind(&form.start_time)
    .bind(&form.description)
    .bind(&form.register_link)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(show)
}

pub async fn delete_show(conn: &mut PgConnection, id: i32) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM shows
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}
