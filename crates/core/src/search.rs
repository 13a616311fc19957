//! Directory search and area grouping.
//!
//! A query containing a comma is read as `city, state`: the text before the
//! first comma must occur in the city and the text after it in the state.
//! Any other query must occur in the name. Matching ignores case. A query
//! that is blank after trimming, or a location query with both parts blank,
//! matches nothing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{artist::Artist, show::Show, venue::Venue, venue::VenueArea, venue::VenueSummary};

/// Entities that can be found by name or by location.
pub trait Searchable {
    fn name(&self) -> &str;
    fn city(&self) -> &str;
    fn state(&self) -> &str;
}

impl Searchable for Venue {
    fn name(&self) -> &str {
        &self.name
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

impl Searchable for Artist {
    fn name(&self) -> &str {
        &self.name
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn state(&self) -> &str {
        &self.state
    }
}

/// A parsed search term. Needles are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    Empty,
    Name(String),
    Location { city: String, state: String },
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SearchQuery::Empty;
        }
        if trimmed.contains(',') {
            let mut parts = trimmed.split(',');
            let city = parts.next().unwrap_or_default().trim().to_lowercase();
            let state = parts.next().unwrap_or_default().trim().to_lowercase();
            if city.is_empty() && state.is_empty() {
                return SearchQuery::Empty;
            }
            return SearchQuery::Location { city, state };
        }
        SearchQuery::Name(trimmed.to_lowercase())
    }

    /// Parses a term that is always matched as a whole, commas included.
    pub fn parse_plain(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            SearchQuery::Empty
        } else {
            SearchQuery::Name(trimmed.to_lowercase())
        }
    }

    pub fn matches<T: Searchable + ?Sized>(&self, entity: &T) -> bool {
        match self {
            SearchQuery::Empty => false,
            SearchQuery::Name(needle) => contains_ignore_case(entity.name(), needle),
            SearchQuery::Location { city, state } => {
                contains_ignore_case(entity.city(), city) && contains_ignore_case(entity.state(), state)
            }
        }
    }

    /// Matches a show by title. Location queries never match shows.
    pub fn matches_show(&self, show: &Show) -> bool {
        match self {
            SearchQuery::Name(needle) => contains_ignore_case(&show.title, needle),
            _ => false,
        }
    }
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Keeps the entities matching `query`, in input order.
pub fn filter_matches<T: Searchable>(entities: Vec<T>, query: &SearchQuery) -> Vec<T> {
    entities.into_iter().filter(|e| query.matches(e)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
    /// The query exactly as submitted, for redisplay.
    pub search_term: String,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>, search_term: &str) -> Self {
        Self {
            count: data.len(),
            data,
            search_term: search_term.to_string(),
        }
    }
}

/// Groups venue summaries by exact (city, state), ordered by that pair.
pub fn group_by_area<I>(venues: I) -> Vec<VenueArea>
where
    I: IntoIterator<Item = (String, String, VenueSummary)>,
{
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for (city, state, summary) in venues {
        areas.entry((city, state)).or_default().push(summary);
    }
    areas
        .into_iter()
        .map(|((city, state), venues)| VenueArea { city, state, venues })
        .collect()
}
