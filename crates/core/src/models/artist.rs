use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::show::VenueShow;
use crate::validation::{
    blank_to_none, distinct_genres, validate_genres, validate_phone, validate_required,
    validate_state,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: String,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Submitted fields for creating or editing an artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ArtistForm {
    #[validate(custom(function = "validate_required"))]
    #[serde(default)]
    pub name: String,

    #[validate(
        custom(function = "validate_required"),
        length(max = 120, message = "Field cannot be longer than 120 characters.")
    )]
    #[serde(default)]
    pub city: String,

    #[validate(custom(function = "validate_state"))]
    #[serde(default)]
    pub state: String,

    #[validate(length(max = 120, message = "Field cannot be longer than 120 characters."))]
    #[serde(default)]
    pub address: Option<String>,

    #[validate(
        custom(function = "validate_phone"),
        length(max = 120, message = "Field cannot be longer than 120 characters.")
    )]
    #[serde(default)]
    pub phone: String,

    #[validate(
        url(message = "Invalid URL."),
        length(max = 500, message = "Field cannot be longer than 500 characters.")
    )]
    #[serde(default)]
    pub website: Option<String>,

    #[validate(
        url(message = "Invalid URL."),
        length(max = 500, message = "Field cannot be longer than 500 characters.")
    )]
    #[serde(default)]
    pub image_link: Option<String>,

    #[validate(custom(function = "validate_genres"))]
    #[serde(default)]
    pub genres: Vec<String>,

    #[validate(
        url(message = "Invalid URL."),
        length(max = 120, message = "Field cannot be longer than 120 characters.")
    )]
    #[serde(default)]
    pub facebook_link: Option<String>,

    #[serde(default)]
    pub seeking_talent: bool,

    #[validate(length(max = 500, message = "Field cannot be longer than 500 characters."))]
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Trims every text field and turns blank optional fields into `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: blank_to_none(self.address),
            phone: self.phone.trim().to_string(),
            website: blank_to_none(self.website),
            image_link: blank_to_none(self.image_link),
            genres: distinct_genres(self.genres),
            facebook_link: blank_to_none(self.facebook_link),
            seeking_talent: self.seeking_talent,
            seeking_description: blank_to_none(self.seeking_description),
        }
    }
}

impl From<Artist> for ArtistForm {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            address: artist.address,
            phone: artist.phone,
            website: artist.website,
            image_link: artist.image_link,
            genres: artist.genres,
            facebook_link: artist.facebook_link,
            seeking_talent: artist.seeking_talent,
            seeking_description: artist.seeking_description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistListItem {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistPage {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistEdit {
    pub id: i32,
    pub form: ArtistForm,
}
