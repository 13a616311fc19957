//! Create, update, and delete operations.
//!
//! Callers run these inside a transaction and commit only on `Ok`. Forms
//! arrive already validated ([`Valid`]); referential checks happen here so a
//! bad reference is reported as [`BookingError::Integrity`] before any write.
//!
//! Deleting a venue or artist that still has shows is rejected. Deleting an id
//! that does not exist succeeds without doing anything.

use tracing::{debug, info};

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    artist::{Artist, ArtistForm},
    show::{Show, ShowForm},
    venue::{Venue, VenueForm},
};
use crate::store::DirectoryStore;
use crate::validation::Valid;

pub async fn create_venue<S>(store: &mut S, form: Valid<VenueForm>) -> BookingResult<Venue>
where
    S: DirectoryStore + ?Sized,
{
    let venue = store.insert_venue(&form).await?;
    info!("Created venue: id={}, name={}", venue.id, venue.name);
    Ok(venue)
}

pub async fn update_venue<S>(store: &mut S, id: i32, form: Valid<VenueForm>) -> BookingResult<Venue>
where
    S: DirectoryStore + ?Sized,
{
    let venue = store
        .update_venue(id, &form)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Venue with ID {} not found", id)))?;
    info!("Updated venue: id={}", venue.id);
    Ok(venue)
}

pub async fn delete_venue<S>(store: &mut S, id: i32) -> BookingResult<()>
where
    S: DirectoryStore + ?Sized,
{
    if store.find_venue(id).await?.is_none() {
        debug!("Venue {} already absent, nothing to delete", id);
        return Ok(());
    }
    let shows = store.shows_for_venue(id).await?;
    if !shows.is_empty() {
        return Err(BookingError::Integrity(format!(
            "Venue with ID {} still has {} show(s)",
            id,
            shows.len()
        )));
    }
    store.delete_venue(id).await?;
    info!("Deleted venue: id={}", id);
    Ok(())
}

pub async fn create_artist<S>(store: &mut S, form: Valid<ArtistForm>) -> BookingResult<Artist>
where
    S: DirectoryStore + ?Sized,
{
    let artist = store.insert_artist(&form).await?;
    info!("Created artist: id={}, name={}", artist.id, artist.name);
    Ok(artist)
}

pub async fn update_artist<S>(store: &mut S, id: i32, form: Valid<ArtistForm>) -> BookingResult<Artist>
where
    S: DirectoryStore + ?Sized,
{
    let artist = store
        .update_artist(id, &form)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Artist with ID {} not found", id)))?;
    info!("Updated artist: id={}", artist.id);
    Ok(artist)
}

pub async fn delete_artist<S>(store: &mut S, id: i32) -> BookingResult<()>
where
    S: DirectoryStore + ?Sized,
{
    if store.find_artist(id).await?.is_none() {
        debug!("Artist {} already absent, nothing to delete", id);
        return Ok(());
    }
    let shows = store.shows_for_artist(id).await?;
    if !shows.is_empty() {
        return Err(BookingError::Integrity(format!(
            "Artist with ID {} still has {} show(s)",
            id,
            shows.len()
        )));
    }
    store.delete_artist(id).await?;
    info!("Deleted artist: id={}", id);
    Ok(())
}

async fn check_references<S>(store: &mut S, form: &ShowForm) -> BookingResult<()>
where
    S: DirectoryStore + ?Sized,
{
    if store.find_artist(form.artist_id).await?.is_none() {
        return Err(BookingError::Integrity(format!(
            "Artist with ID {} does not exist",
            form.artist_id
        )));
    }
    if store.find_venue(form.venue_id).await?.is_none() {
        return Err(BookingError::Integrity(format!(
            "Venue with ID {} does not exist",
            form.venue_id
        )));
    }
    Ok(())
}

pub async fn create_show<S>(store: &mut S, form: Valid<ShowForm>) -> BookingResult<Show>
where
    S: DirectoryStore + ?Sized,
{
    check_references(store, &form).await?;
    let show = store.insert_show(&form).await?;
    info!(
        "Created show: id={}, artist_id={}, venue_id={}",
        show.id, show.artist_id, show.venue_id
    );
    Ok(show)
}

pub async fn update_show<S>(store: &mut S, id: i32, form: Valid<ShowForm>) -> BookingResult<Show>
where
    S: DirectoryStore + ?Sized,
{
    check_references(store, &form).await?;
    let show = store
        .update_show(id, &form)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Show with ID {} not found", id)))?;
    info!("Updated show: id={}", show.id);
    Ok(show)
}

pub async fn delete_show<S>(store: &mut S, id: i32) -> BookingResult<()>
where
    S: DirectoryStore + ?Sized,
{
    let removed = store.delete_show(id).await?;
    debug!("Deleted show: id={}, rows={}", id, removed);
    Ok(())
}
