use async_trait::async_trait;
use sqlx::PgConnection;
use stagebook_core::{
    errors::{BookingError, BookingResult},
    models::{
        artist::{Artist, ArtistForm},
        show::{Show, ShowForm},
        venue::{Venue, VenueForm},
    },
    store::DirectoryStore,
};

use crate::repositories::{artist, show, venue};

/// [`DirectoryStore`] over one borrowed Postgres connection.
///
/// Borrow the connection from a pool for reads, or from a
/// `sqlx::Transaction` for writes so that the caller decides whether the
/// unit of work is committed.
pub struct PgDirectory<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgDirectory<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

/// Classifies a repository failure.
///
/// Foreign-key violations become [`BookingError::Integrity`]; everything else
/// is a [`BookingError::Database`] error.
pub fn classify_error(report: eyre::Report) -> BookingError {
    if let Some(sqlx::Error::Database(db_error)) = report.downcast_ref::<sqlx::Error>() {
        if db_error.is_foreign_key_violation() {
            return BookingError::Integrity(db_error.message().to_string());
        }
    }
    BookingError::Database(report)
}

fn rows<T, U: From<T>>(rows: Vec<T>) -> Vec<U> {
    rows.into_iter().map(U::from).collect()
}

#[async_trait]
impl<'c> DirectoryStore for PgDirectory<'c> {
    async fn find_venue(&mut self, id: i32) -> BookingResult<Option<Venue>> {
        let row = venue::get_venue_by_id(&mut *self.conn, id).await.map_err(classify_error)?;
        Ok(row.map(Venue::from))
    }

    async fn find_artist(&mut self, id: i32) -> BookingResult<Option<Artist>> {
        let row = artist::get_artist_by_id(&mut *self.conn, id).await.map_err(classify_error)?;
        Ok(row.map(Artist::from))
    }

    async fn find_show(&mut self, id: i32) -> BookingResult<Option<Show>> {
        let row = show::get_show_by_id(&mut *self.conn, id).await.map_err(classify_error)?;
        Ok(row.map(Show::from))
    }

    async fn list_venues(&mut self) -> BookingResult<Vec<Venue>> {
        Ok(rows(venue::list_venues(&mut *self.conn).await.map_err(classify_error)?))
    }

    async fn list_artists(&mut self) -> BookingResult<Vec<Artist>> {
        Ok(rows(artist::list_artists(&mut *self.conn).await.map_err(classify_error)?))
    }

    async fn list_shows(&mut self) -> BookingResult<Vec<Show>> {
        Ok(rows(show::list_shows(&mut *self.conn).await.map_err(classify_error)?))
    }

    async fn venues_by_ids(&mut self, ids: &[i32]) -> BookingResult<Vec<Venue>> {
        Ok(rows(venue::get_venues_by_ids(&mut *self.conn, ids).await.map_err(classify_error)?))
    }

    async fn artists_by_ids(&mut self, ids: &[i32]) -> BookingResult<Vec<Artist>> {
        Ok(rows(artist::get_artists_by_ids(&mut *self.conn, ids).await.map_err(classify_error)?))
    }

    async fn shows_for_venue(&mut self, venue_id: i32) -> BookingResult<Vec<Show>> {
        Ok(rows(show::get_shows_by_venue_id(&mut *self.conn, venue_id).await.map_err(classify_error)?))
    }

    async fn shows_for_artist(&mut self, artist_id: i32) -> BookingResult<Vec<Show>> {
        Ok(rows(show::get_shows_by_artist_id(&mut *self.conn, artist_id).await.map_err(classify_error)?))
    }

    async fn insert_venue(&mut self, form: &VenueForm) -> BookingResult<Venue> {
        let row = venue::create_venue(&mut *self.conn, form).await.map_err(classify_error)?;
        Ok(row.into())
    }

    async fn update_venue(&mut self, id: i32, form: &VenueForm) -> BookingResult<Option<Venue>> {
        let row = venue::update_venue(&mut *self.conn, id, form).await.map_err(classify_error)?;
        Ok(row.map(Venue::from))
    }

    async fn delete_venue(&mut self, id: i32) -> BookingResult<u64> {
        venue::delete_venue(&mut *self.conn, id).await.map_err(classify_error)
    }

    async fn insert_artist(&mut self, form: &ArtistForm) -> BookingResult<Artist> {
        let row = artist::create_artist(&mut *self.conn, form).await.map_err(classify_error)?;
        Ok(row.into())
    }

    async fn update_artist(&mut self, id: i32, form: &ArtistForm) -> BookingResult<Option<Artist>> {
        let row = artist::update_artist(&mut *self.conn, id, form).await.map_err(classify_error)?;
        Ok(row.map(Artist::from))
    }

    async fn delete_artist(&mut self, id: i32) -> BookingResult<u64> {
        artist::delete_artist(&mut *self.conn, id).await.map_err(classify_error)
    }

    async fn insert_show(&mut self, form: &ShowForm) -> BookingResult<Show> {
        let row = show::create_show(&mut *self.conn, form).await.map_err(classify_error)?;
        Ok(row.into())
    }

    async fn update_show(&mut self, id: i32, form: &ShowForm) -> BookingResult<Option<Show>> {
        let row = show::update_show(&mut *self.conn, id, form).await.map_err(classify_error)?;
        Ok(row.map(Show::from))
    }

    async fn delete_show(&mut self, id: i32) -> BookingResult<u64> {
        show::delete_show(&mut *self.conn, id).await.map_err(classify_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_report_as_database() {
        let error = classify_error(eyre::eyre!("connection refused"));
        assert!(matches!(error, BookingError::Database(_)));
    }

    #[test]
    fn test_classify_non_constraint_sqlx_error_as_database() {
        let error = classify_error(eyre::Report::new(sqlx::Error::RowNotFound));
        assert!(matches!(error, BookingError::Database(_)));
    }
}
