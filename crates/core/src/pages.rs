//! View-model assembly for every read-only page.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    artist::{Artist, ArtistEdit, ArtistListItem, ArtistPage, ArtistSummary},
    show::{ArtistShow, Show, ShowEdit, ShowListing, VenueShow},
    venue::{Venue, VenueArea, VenueEdit, VenuePage, VenueSummary},
};
use crate::partition::{counterpart, partition_shows, upcoming_counts_by};
use crate::search::{SearchQuery, SearchResults, filter_matches, group_by_area};
use crate::store::DirectoryStore;
use crate::time::{DisplayStyle, display_start_time};

fn distinct_ids<F>(shows: &[Show], key: F) -> Vec<i32>
where
    F: Fn(&Show) -> i32,
{
    shows.iter().map(key).collect::<BTreeSet<_>>().into_iter().collect()
}

async fn artists_for<S>(store: &mut S, shows: &[Show]) -> BookingResult<HashMap<i32, Artist>>
where
    S: DirectoryStore + ?Sized,
{
    if shows.is_empty() {
        return Ok(HashMap::new());
    }
    let ids = distinct_ids(shows, |s| s.artist_id);
    let artists = store.artists_by_ids(&ids).await?;
    Ok(artists.into_iter().map(|a| (a.id, a)).collect())
}

async fn venues_for<S>(store: &mut S, shows: &[Show]) -> BookingResult<HashMap<i32, Venue>>
where
    S: DirectoryStore + ?Sized,
{
    if shows.is_empty() {
        return Ok(HashMap::new());
    }
    let ids = distinct_ids(shows, |s| s.venue_id);
    let venues = store.venues_by_ids(&ids).await?;
    Ok(venues.into_iter().map(|v| (v.id, v)).collect())
}

fn venue_not_found(id: i32) -> BookingError {
    BookingError::NotFound(format!("Venue with ID {} not found", id))
}

fn artist_not_found(id: i32) -> BookingError {
    BookingError::NotFound(format!("Artist with ID {} not found", id))
}

fn show_not_found(id: i32) -> BookingError {
    BookingError::NotFound(format!("Show with ID {} not found", id))
}

/// Venue detail page: attributes plus its shows split around `now`.
pub async fn venue_page<S>(store: &mut S, venue_id: i32, now: NaiveDateTime) -> BookingResult<VenuePage>
where
    S: DirectoryStore + ?Sized,
{
    let venue = store
        .find_venue(venue_id)
        .await?
        .ok_or_else(|| venue_not_found(venue_id))?;
    let shows = store.shows_for_venue(venue_id).await?;
    let artists = artists_for(store, &shows).await?;

    let partition = partition_shows(&shows, now, |show| {
        let artist = counterpart(&artists, show.artist_id, "artist")?;
        let display = display_start_time(&show.start_time, DisplayStyle::Full)?;
        Ok(ArtistShow::new(show, artist, display))
    })?;

    Ok(VenuePage {
        venue,
        past_shows_count: partition.past_count(),
        upcoming_shows_count: partition.upcoming_count(),
        past_shows: partition.past,
        upcoming_shows: partition.upcoming,
    })
}

/// Artist detail page: attributes plus its shows split around `now`.
pub async fn artist_page<S>(store: &mut S, artist_id: i32, now: NaiveDateTime) -> BookingResult<ArtistPage>
where
    S: DirectoryStore + ?Sized,
{
    let artist = store
        .find_artist(artist_id)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;
    let shows = store.shows_for_artist(artist_id).await?;
    let venues = venues_for(store, &shows).await?;

    let partition = partition_shows(&shows, now, |show| {
        let venue = counterpart(&venues, show.venue_id, "venue")?;
        let display = display_start_time(&show.start_time, DisplayStyle::Full)?;
        Ok(VenueShow::new(show, venue, display))
    })?;

    Ok(ArtistPage {
        artist,
        past_shows_count: partition.past_count(),
        upcoming_shows_count: partition.upcoming_count(),
        past_shows: partition.past,
        upcoming_shows: partition.upcoming,
    })
}

/// All venues grouped by (city, state) with their upcoming-show counts.
pub async fn venue_areas<S>(store: &mut S, now: NaiveDateTime) -> BookingResult<Vec<VenueArea>>
where
    S: DirectoryStore + ?Sized,
{
    let venues = store.list_venues().await?;
    if venues.is_empty() {
        return Ok(Vec::new());
    }
    let shows = store.list_shows().await?;
    let counts = upcoming_counts_by(&shows, now, |s| s.venue_id)?;

    Ok(group_by_area(venues.into_iter().map(|venue| {
        let summary = VenueSummary {
            id: venue.id,
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        };
        (venue.city, venue.state, summary)
    })))
}

pub async fn search_venues<S>(
    store: &mut S,
    search_term: &str,
    now: NaiveDateTime,
) -> BookingResult<SearchResults<VenueSummary>>
where
    S: DirectoryStore + ?Sized,
{
    let query = SearchQuery::parse(search_term);
    if query == SearchQuery::Empty {
        return Ok(SearchResults::new(Vec::new(), search_term));
    }

    let matches = filter_matches(store.list_venues().await?, &query);
    if matches.is_empty() {
        return Ok(SearchResults::new(Vec::new(), search_term));
    }
    let shows = store.list_shows().await?;
    let counts = upcoming_counts_by(&shows, now, |s| s.venue_id)?;

    let data = matches
        .into_iter()
        .map(|venue| VenueSummary {
            id: venue.id,
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        })
        .collect();
    Ok(SearchResults::new(data, search_term))
}

pub async fn artist_list<S>(store: &mut S) -> BookingResult<Vec<ArtistListItem>>
where
    S: DirectoryStore + ?Sized,
{
    let artists = store.list_artists().await?;
    Ok(artists
        .into_iter()
        .map(|artist| ArtistListItem {
            id: artist.id,
            name: artist.name,
        })
        .collect())
}

pub async fn search_artists<S>(
    store: &mut S,
    search_term: &str,
    now: NaiveDateTime,
) -> BookingResult<SearchResults<ArtistSummary>>
where
    S: DirectoryStore + ?Sized,
{
    let query = SearchQuery::parse(search_term);
    if query == SearchQuery::Empty {
        return Ok(SearchResults::new(Vec::new(), search_term));
    }

    let matches = filter_matches(store.list_artists().await?, &query);
    if matches.is_empty() {
        return Ok(SearchResults::new(Vec::new(), search_term));
    }
    let shows = store.list_shows().await?;
    let counts = upcoming_counts_by(&shows, now, |s| s.artist_id)?;

    let data = matches
        .into_iter()
        .map(|artist| ArtistSummary {
            id: artist.id,
            num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or(0),
            name: artist.name,
        })
        .collect();
    Ok(SearchResults::new(data, search_term))
}

async fn show_listings<S>(store: &mut S, shows: Vec<Show>) -> BookingResult<Vec<ShowListing>>
where
    S: DirectoryStore + ?Sized,
{
    let venues = venues_for(store, &shows).await?;
    let artists = artists_for(store, &shows).await?;

    shows
        .into_iter()
        .map(|show| {
            let venue = counterpart(&venues, show.venue_id, "venue")?;
            let artist = counterpart(&artists, show.artist_id, "artist")?;
            let display = display_start_time(&show.start_time, DisplayStyle::Medium)?;
            Ok(ShowListing::new(show, venue, artist, display))
        })
        .collect()
}

pub async fn show_list<S>(store: &mut S) -> BookingResult<Vec<ShowListing>>
where
    S: DirectoryStore + ?Sized,
{
    let shows = store.list_shows().await?;
    show_listings(store, shows).await
}

/// Show search matches the whole term against titles; commas are literal.
pub async fn search_shows<S>(store: &mut S, search_term: &str) -> BookingResult<SearchResults<ShowListing>>
where
    S: DirectoryStore + ?Sized,
{
    let query = SearchQuery::parse_plain(search_term);
    if query == SearchQuery::Empty {
        return Ok(SearchResults::new(Vec::new(), search_term));
    }

    let shows: Vec<Show> = store
        .list_shows()
        .await?
        .into_iter()
        .filter(|show| query.matches_show(show))
        .collect();
    let data = show_listings(store, shows).await?;
    Ok(SearchResults::new(data, search_term))
}

pub async fn venue_edit<S>(store: &mut S, venue_id: i32) -> BookingResult<VenueEdit>
where
    S: DirectoryStore + ?Sized,
{
    let venue = store
        .find_venue(venue_id)
        .await?
        .ok_or_else(|| venue_not_found(venue_id))?;
    Ok(VenueEdit {
        id: venue.id,
        form: venue.into(),
    })
}

pub async fn artist_edit<S>(store: &mut S, artist_id: i32) -> BookingResult<ArtistEdit>
where
    S: DirectoryStore + ?Sized,
{
    let artist = store
        .find_artist(artist_id)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;
    Ok(ArtistEdit {
        id: artist.id,
        form: artist.into(),
    })
}

pub async fn show_edit<S>(store: &mut S, show_id: i32) -> BookingResult<ShowEdit>
where
    S: DirectoryStore + ?Sized,
{
    let show = store
        .find_show(show_id)
        .await?
        .ok_or_else(|| show_not_found(show_id))?;
    Ok(ShowEdit {
        id: show.id,
        form: show.into(),
    })
}
