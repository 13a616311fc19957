use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::show::ArtistShow;
use crate::validation::{
    blank_to_none, distinct_genres, validate_genres, validate_phone, validate_required,
    validate_state,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Submitted fields for creating or editing a venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VenueForm {
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
    pub image_link: Option<String>,

    #[validate(custom(function = "validate_genres"))]
    #[serde(default)]
    pub genres: Vec<String>,

    #[validate(
        url(message = "Invalid URL."),
        length(max = 500, message = "Field cannot be longer than 500 characters.")
    )]
    #[serde(default)]
    pub facebook_link: Option<String>,

    #[serde(default)]
    pub seeking_talent: bool,

    #[validate(length(max = 500, message = "Field cannot be longer than 500 characters."))]
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Trims every text field and turns blank optional fields into `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: blank_to_none(self.address),
            phone: self.phone.trim().to_string(),
            image_link: blank_to_none(self.image_link),
            genres: distinct_genres(self.genres),
            facebook_link: blank_to_none(self.facebook_link),
            seeking_talent: self.seeking_talent,
            seeking_description: blank_to_none(self.seeking_description),
        }
    }
}

impl From<Venue> for VenueForm {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            genres: venue.genres,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

/// A venue as it appears in listings and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenuePage {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Prefill data for the venue edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueEdit {
    pub id: i32,
    pub form: VenueForm,
}
