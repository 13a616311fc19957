use crate::models::DbArtist;
use eyre::Result;
use sqlx::PgConnection;
use stagebook_core::models::artist::ArtistForm;

const ARTIST_COLUMNS: &str = "id, name, city, state, address, phone, website, image_link, \
                              facebook_link, genres, seeking_talent, seeking_description";

pub async fn create_artist(conn: &mut PgConnection, form: &ArtistForm) -> Result<DbArtist> {
    tracing::debug!("Creating artist: name={}, city={}, state={}", form.name, form.city, form.state);

    let artist = sqlx::query_as::<_, DbArtist>(&format!(
        r#"
        INSERT INTO artists (name, city, state, address, phone, website, image_link,
                             facebook_link, genres, seeking_talent, seeking_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {}
        "#,
        ARTIST_COLUMNS
    ))
    .bind(&form.name)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.address)
    .bind(&form.phone)
    .bind(&form.website)
    .bind(&form.image_link)
    .bind(&form.facebook_link)
    .bind(&form.genres)
    .bind(form.seeking_talent)
    .bind(&form.seeking_description)
    .fetch_one(&mut *conn)
    .await?;

    Ok(artist)
}

pub async fn get_artist_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<DbArtist>> {
    let artist = sqlx::query_as::<_, DbArtist>(&format!(
        "SELECT {} FROM artists WHERE id = $1",
        ARTIST_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    if artist.is_none() {
        tracing::debug!("Artist not found: id={}", id);
    }

    Ok(artist)
}

pub async fn get_artists_by_ids(conn: &mut PgConnection, ids: &[i32]) -> Result<Vec<DbArtist>> {
    let artists = sqlx::query_as::<_, DbArtist>(&format!(
        "SELECT {} FROM artists WHERE id = ANY($1) ORDER BY id ASC",
        ARTIST_COLUMNS
    ))
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;

    Ok(artists)
}

pub async fn list_artists(conn: &mut PgConnection) -> Result<Vec<DbArtist>> {
    let artists = sqlx::query_as::<_, DbArtist>(&format!(
        "SELECT {} FROM artists ORDER BY id ASC",
        ARTIST_COLUMNS
    ))
    .fetch_all(&mut *conn)
    .await?;

    Ok(artists)
}

pub async fn update_artist(
    conn: &mut PgConnection,
    id: i32,
    form: &ArtistForm,
) -> Result<Option<DbArtist>> {
    let artist = sqlx::query_as::<_, DbArtist>(&format!(
        r#"
        UPDATE artists
        SET name = $2, city = $3, state = $4, address = $5, phone = $6, website = $7,
            image_link = $8, facebook_link = $9, genres = $10, seeking_talent = $11,
            seeking_description = $12
        WHERE id = $1
        RETURNING {}
        "#,
        ARTIST_COLUMNS
    ))
    .bind(id)
    .bind(&form.name)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.address)
    .bind(&form.phone)
    .bind(&form.website)
    .bind(&form.image_link)
    .bind(&form.facebook_link)
    .bind(&form.genres)
    .bind(form.seeking_talent)
    .bind(&form.seeking_description)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(artist)
}

pub async fn delete_artist(conn: &mut PgConnection, id: i32) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM artists
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}
