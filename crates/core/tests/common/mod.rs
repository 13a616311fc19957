#![allow(dead_code)]

use chrono::NaiveDateTime;
use stagebook_core::models::{artist::Artist, show::Show, venue::Venue};
use stagebook_core::time::parse_start_time;

pub fn at(value: &str) -> NaiveDateTime {
    parse_start_time(value).expect("fixture time is canonical")
}

pub fn venue(id: i32, name: &str, city: &str, state: &str) -> Venue {
    Venue {
        id,
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: "123-123-1234".to_string(),
        image_link: Some(format!("https://images.example.com/venues/{}.jpg", id)),
        facebook_link: None,
        genres: vec!["Jazz".to_string()],
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn artist(id: i32, name: &str, city: &str, state: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: None,
        phone: "326-123-5000".to_string(),
        website: None,
        image_link: Some(format!("https://images.example.com/artists/{}.jpg", id)),
        facebook_link: None,
        genres: vec!["Rock n Roll".to_string()],
        seeking_talent: true,
        seeking_description: Some("Looking for shows in the Bay Area".to_string()),
    }
}

pub fn show(id: i32, artist_id: i32, venue_id: i32, start_time: &str) -> Show {
    Show {
        id,
        title: format!("Show {}", id),
        artist_id,
        venue_id,
        start_time: start_time.to_string(),
        description: None,
        register_link: None,
    }
}
