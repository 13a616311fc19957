use crate::models::DbVenue;
use eyre::Result;
use sqlx::PgConnection;
use stagebook_core::models::venue::VenueForm;

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                             genres, seeking_talent, seeking_description";

pub async fn create_venue(conn: &mut PgConnection, form: &VenueForm) -> Result<DbVenue> {
    tracing::debug!("Creating venue: name={}, city={}, state={}", form.name, form.city, form.state);

    let venue = sqlx::query_as::<_, DbVenue>(&format!(
        r#"
        INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                            genres, seeking_talent, seeking_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {}
        "#,
        VENUE_COLUMNS
    ))
    .bind(&form.name)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.address)
    .bind(&form.phone)
    .bind(&form.image_link)
    .bind(&form.facebook_link)
    .bind(&form.genres)
    .bind(form.seeking_talent)
    .bind(&form.seeking_description)
    .fetch_one(&mut *conn)
    .await?;

    Ok(venue)
}

pub async fn get_venue_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<DbVenue>> {
    let venue = sqlx::query_as::<_, DbVenue>(&format!(
        "SELECT {} FROM venues WHERE id = $1",
        VENUE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    if venue.is_none() {
        tracing::debug!("Venue not found: id={}", id);
    }

    Ok(venue)
}

pub async fn get_venues_by_ids(conn: &mut PgConnection, ids: &[i32]) -> Result<Vec<DbVenue>> {
    let venues = sqlx::query_as::<_, DbVenue>(&format!(
        "SELECT {} FROM venues WHERE id = ANY($1) ORDER BY id ASC",
        VENUE_COLUMNS
    ))
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;

    Ok(venues)
}

pub async fn list_venues(conn: &mut PgConnection) -> Result<Vec<DbVenue>> {
    let venues = sqlx::query_as::<_, DbVenue>(&format!(
        "SELECT {} FROM venues ORDER BY id ASC",
        VENUE_COLUMNS
    ))
    .fetch_all(&mut *conn)
    .await?;

    Ok(venues)
}

pub async fn update_venue(
    conn: &mut PgConnection,
    id: i32,
    form: &VenueForm,
) -> Result<Option<DbVenue>> {
    let venue = sqlx::query_as::<_, DbVenue>(&format!(
        r#"
        UPDATE venues
        SET name = $2, city = $3, state = $4, address = $5, phone = $6, image_link = $7,
            facebook_link = $8, genres = $9, seeking_talent = $10, seeking_description = $11
        WHERE id = $1
        RETURNING {}
        "#,
        VENUE_COLUMNS
    ))
    .bind(id)
    .bind(&form.name)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.address)
    .bind(&form.phone)
    .bind(&form.image_link)
    .bind(&form.facebook_link)
    .bind(&form.genres)
    .bind(form.seeking_talent)
    .bind(&form.seeking_description)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(venue)
}

pub async fn delete_venue(conn: &mut PgConnection, id: i32) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM venues
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}
