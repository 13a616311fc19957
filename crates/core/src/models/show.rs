use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{artist::Artist, venue::Venue};
use crate::validation::{blank_to_none, validate_required, validate_start_time};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub venue_id: i32,
    /// Canonical `%Y-%m-%d %H:%M:%S` text, see [`crate::time`].
    pub start_time: String,
    pub description: Option<String>,
    pub register_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ShowForm {
    #[validate(custom(function = "validate_required"))]
    #[serde(default)]
    pub title: String,

    #[validate(range(min = 1, message = "Invalid artist id."))]
    #[serde(default)]
    pub artist_id: i32,

    #[validate(range(min = 1, message = "Invalid venue id."))]
    #[serde(default)]
    pub venue_id: i32,

    #[validate(custom(function = "validate_start_time"))]
    #[serde(default)]
    pub start_time: String,

    #[validate(length(max = 500, message = "Field cannot be longer than 500 characters."))]
    #[serde(default)]
    pub description: Option<String>,

    #[validate(
        url(message = "Invalid URL."),
        length(max = 500, message = "Field cannot be longer than 500 characters.")
    )]
    #[serde(default)]
    pub register_link: Option<String>,
}

impl ShowForm {
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            artist_id: self.artist_id,
            venue_id: self.venue_id,
            start_time: self.start_time.trim().to_string(),
            description: blank_to_none(self.description),
            register_link: blank_to_none(self.register_link),
        }
    }
}

impl From<Show> for ShowForm {
    fn from(show: Show) -> Self {
        Self {
            title: show.title,
            artist_id: show.artist_id,
            venue_id: show.venue_id,
            start_time: show.start_time,
            description: show.description,
            register_link: show.register_link,
        }
    }
}

/// A show on a venue page, described by the artist playing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
    /// `start_time` rendered for display.
    pub start_time_display: String,
    pub title: String,
    pub register_link: Option<String>,
    pub description: Option<String>,
}

impl ArtistShow {
    pub fn new(show: &Show, artist: &Artist, start_time_display: String) -> Self {
        Self {
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: show.start_time.clone(),
            start_time_display,
            title: show.title.clone(),
            register_link: show.register_link.clone(),
            description: show.description.clone(),
        }
    }
}

/// A show on an artist page, described by the venue hosting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
    /// `start_time` rendered for display.
    pub start_time_display: String,
    pub title: String,
    pub register_link: Option<String>,
    pub description: Option<String>,
}

impl VenueShow {
    pub fn new(show: &Show, venue: &Venue, start_time_display: String) -> Self {
        Self {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            start_time: show.start_time.clone(),
            start_time_display,
            title: show.title.clone(),
            register_link: show.register_link.clone(),
            description: show.description.clone(),
        }
    }
}

/// A row of the show listing and show search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowListing {
    pub id: i32,
    pub title: String,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
    pub start_time_display: String,
    pub description: Option<String>,
    pub register_link: Option<String>,
}

impl ShowListing {
    pub fn new(show: Show, venue: &Venue, artist: &Artist, start_time_display: String) -> Self {
        Self {
            id: show.id,
            title: show.title,
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: show.start_time,
            start_time_display,
            description: show.description,
            register_link: show.register_link,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowEdit {
    pub id: i32,
    pub form: ShowForm,
}
