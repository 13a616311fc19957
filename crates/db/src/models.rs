use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stagebook_core::models::{artist::Artist, show::Show, venue::Venue};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbVenue {
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

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbArtist {
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

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShow {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: String,
    pub description: Option<String>,
    pub register_link: Option<String>,
}

impl From<DbVenue> for Venue {
    fn from(row: DbVenue) -> Self {
        Venue {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            genres: row.genres,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        }
    }
}

impl From<DbArtist> for Artist {
    fn from(row: DbArtist) -> Self {
        Artist {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            website: row.website,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            genres: row.genres,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
        }
    }
}

impl From<DbShow> for Show {
    fn from(row: DbShow) -> Self {
        Show {
            id: row.id,
            title: row.title,
            artist_id: row.artist_id,
            venue_id: row.venue_id,
            start_time: row.start_time,
            description: row.description,
            register_link: row.register_link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn show_row_converts_field_for_field() {
        let row = DbShow {
            id: 7,
            title: "Guns N Petals".to_string(),
            artist_id: 4,
            venue_id: 1,
            start_time: "2019-05-21 21:30:00".to_string(),
            description: None,
            register_link: Some("https://example.com/register".to_string()),
        };

        let show: Show = row.into();

        assert_eq!(show.id, 7);
        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.start_time, "2019-05-21 21:30:00");
        assert_eq!(show.register_link.as_deref(), Some("https://example.com/register"));
    }

    #[test]
    fn venue_row_keeps_genres_in_order() {
        let row = DbVenue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: Some("1015 Folsom Street".to_string()),
            phone: "123-123-1234".to_string(),
            image_link: None,
            facebook_link: None,
            genres: vec!["Jazz".to_string(), "Reggae".to_string(), "Swing".to_string()],
            seeking_talent: true,
            seeking_description: None,
        };

        let venue: Venue = row.into();

        assert_eq!(venue.genres, vec!["Jazz", "Reggae", "Swing"]);
        assert!(venue.seeking_talent);
    }
}
