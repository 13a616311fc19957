//! Persistence seam for the directory.
//!
//! A `DirectoryStore` value represents one unit of work against the store:
//! the database crate implements it over a connection borrowed from a pool
//! (reads) or from an open transaction (writes). Operations in [`crate::pages`]
//! and [`crate::commands`] receive it explicitly and never reach for global
//! state.

use async_trait::async_trait;
use mockall::automock;

use crate::errors::BookingResult;
use crate::models::{
    artist::{Artist, ArtistForm},
    show::{Show, ShowForm},
    venue::{Venue, VenueForm},
};

#[automock]
#[async_trait]
pub trait DirectoryStore: Send {
    async fn find_venue(&mut self, id: i32) -> BookingResult<Option<Venue>>;
    async fn find_artist(&mut self, id: i32) -> BookingResult<Option<Artist>>;
    async fn find_show(&mut self, id: i32) -> BookingResult<Option<Show>>;

    async fn list_venues(&mut self) -> BookingResult<Vec<Venue>>;
    async fn list_artists(&mut self) -> BookingResult<Vec<Artist>>;
    async fn list_shows(&mut self) -> BookingResult<Vec<Show>>;

    async fn venues_by_ids(&mut self, ids: &[i32]) -> BookingResult<Vec<Venue>>;
    async fn artists_by_ids(&mut self, ids: &[i32]) -> BookingResult<Vec<Artist>>;

    async fn shows_for_venue(&mut self, venue_id: i32) -> BookingResult<Vec<Show>>;
    async fn shows_for_artist(&mut self, artist_id: i32) -> BookingResult<Vec<Show>>;

    async fn insert_venue(&mut self, form: &VenueForm) -> BookingResult<Venue>;
    /// Returns `None` when no venue has this id.
    async fn update_venue(&mut self, id: i32, form: &VenueForm) -> BookingResult<Option<Venue>>;
    /// Returns the number of rows removed.
    async fn delete_venue(&mut self, id: i32) -> BookingResult<u64>;

    async fn insert_artist(&mut self, form: &ArtistForm) -> BookingResult<Artist>;
    async fn update_artist(&mut self, id: i32, form: &ArtistForm) -> BookingResult<Option<Artist>>;
    async fn delete_artist(&mut self, id: i32) -> BookingResult<u64>;

    async fn insert_show(&mut self, form: &ShowForm) -> BookingResult<Show>;
    async fn update_show(&mut self, id: i32, form: &ShowForm) -> BookingResult<Option<Show>>;
    async fn delete_show(&mut self, id: i32) -> BookingResult<u64>;
}
