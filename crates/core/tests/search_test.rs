mod common;

use common::{artist, show, venue};
use pretty_assertions::assert_eq;
use rstest::rstest;
use stagebook_core::models::venue::VenueSummary;
use stagebook_core::search::{SearchQuery, SearchResults, filter_matches, group_by_area};

fn summary(id: i32, name: &str) -> VenueSummary {
    VenueSummary {
        id,
        name: name.to_string(),
        num_upcoming_shows: 0,
    }
}

#[rstest]
#[case("Hop", SearchQuery::Name("hop".to_string()))]
#[case("  The Musical HOP ", SearchQuery::Name("the musical hop".to_string()))]
#[case("San Francisco, CA", SearchQuery::Location { city: "san francisco".to_string(), state: "ca".to_string() })]
#[case("San Francisco,CA,extra", SearchQuery::Location { city: "san francisco".to_string(), state: "ca".to_string() })]
#[case(",CA", SearchQuery::Location { city: String::new(), state: "ca".to_string() })]
#[case(",", SearchQuery::Empty)]
#[case(" , ,", SearchQuery::Empty)]
#[case("", SearchQuery::Empty)]
#[case("   ", SearchQuery::Empty)]
fn parses_terms(#[case] raw: &str, #[case] expected: SearchQuery) {
    assert_eq!(SearchQuery::parse(raw), expected);
}

#[test]
fn plain_terms_keep_commas() {
    assert_eq!(
        SearchQuery::parse_plain("Live, Loud"),
        SearchQuery::Name("live, loud".to_string())
    );
    assert_eq!(SearchQuery::parse_plain(" \t"), SearchQuery::Empty);
}

#[test]
fn name_search_is_case_insensitive_substring() {
    let venues = vec![
        venue(1, "The Musical Hop", "San Francisco", "CA"),
        venue(2, "The Dueling Pianos Bar", "New York", "NY"),
        venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
    ];

    let hop: Vec<i32> = filter_matches(venues.clone(), &SearchQuery::parse("Hop"))
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(hop, vec![1]);

    let music: Vec<i32> = filter_matches(venues, &SearchQuery::parse("MUSIC"))
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(music, vec![1, 3]);
}

#[test]
fn location_search_requires_city_and_state() {
    let venues = vec![
        venue(1, "The Musical Hop", "San Francisco", "CA"),
        venue(2, "The Dueling Pianos Bar", "New York", "NY"),
        venue(3, "Fake Frisco", "San Francisco", "TX"),
        venue(4, "Park Square Live Music & Coffee", "San Francisco", "CA"),
    ];

    let found: Vec<i32> = filter_matches(venues, &SearchQuery::parse("san francisco, ca"))
        .iter()
        .map(|v| v.id)
        .collect();

    assert_eq!(found, vec![1, 4]);
}

#[test]
fn location_search_ignores_names() {
    let artists = vec![
        artist(1, "San Francisco Sound", "Oakland", "CA"),
        artist(2, "Guns N Petals", "San Francisco", "CA"),
    ];

    let found: Vec<i32> = filter_matches(artists, &SearchQuery::parse("San Francisco, CA"))
        .iter()
        .map(|a| a.id)
        .collect();

    assert_eq!(found, vec![2]);
}

#[test]
fn empty_query_matches_nothing() {
    let venues = vec![venue(1, "The Musical Hop", "San Francisco", "CA")];

    assert!(filter_matches(venues.clone(), &SearchQuery::parse("")).is_empty());
    assert!(filter_matches(venues.clone(), &SearchQuery::parse("   ")).is_empty());
    assert!(filter_matches(venues, &SearchQuery::parse(",")).is_empty());
}

#[test]
fn shows_match_by_title_only() {
    let mut jam = show(1, 1, 1, "2035-04-01 20:00:00");
    jam.title = "Friday Night Jam".to_string();

    assert!(SearchQuery::parse_plain("night").matches_show(&jam));
    assert!(!SearchQuery::parse_plain("matinee").matches_show(&jam));
    assert!(!SearchQuery::parse("San Francisco, CA").matches_show(&jam));
    assert!(!SearchQuery::Empty.matches_show(&jam));
}

#[test]
fn results_echo_the_submitted_term() {
    let results = SearchResults::new(vec![summary(1, "The Musical Hop")], "  Hop ");

    assert_eq!(results.count, 1);
    assert_eq!(results.search_term, "  Hop ");
    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        serde_json::json!({
            "count": 1,
            "data": [{"id": 1, "name": "The Musical Hop", "num_upcoming_shows": 0}],
            "search_term": "  Hop ",
        })
    );
}

#[test]
fn groups_each_venue_under_its_exact_area() {
    let areas = group_by_area(vec![
        ("San Francisco".to_string(), "CA".to_string(), summary(1, "The Musical Hop")),
        ("New York".to_string(), "NY".to_string(), summary(2, "The Dueling Pianos Bar")),
        ("San Francisco".to_string(), "CA".to_string(), summary(3, "Park Square")),
        ("San Francisco".to_string(), "TX".to_string(), summary(4, "Fake Frisco")),
    ]);

    let keys: Vec<(&str, &str)> = areas
        .iter()
        .map(|a| (a.city.as_str(), a.state.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![("New York", "NY"), ("San Francisco", "CA"), ("San Francisco", "TX")]
    );

    let sf: Vec<i32> = areas[1].venues.iter().map(|v| v.id).collect();
    assert_eq!(sf, vec![1, 3]);

    let total: usize = areas.iter().map(|a| a.venues.len()).sum();
    assert_eq!(total, 4);
    assert!(areas.iter().all(|a| !a.venues.is_empty()));
}

#[test]
fn grouping_nothing_yields_no_areas() {
    assert!(group_by_area(Vec::new()).is_empty());
}
