use pretty_assertions::assert_eq;
use rstest::rstest;
use stagebook_core::errors::BookingError;
use stagebook_core::models::{artist::ArtistForm, show::ShowForm, venue::VenueForm};
use stagebook_core::validation::{GENRE_CHOICES, STATE_CHOICES, form_choices, validate};

fn venue_form() -> VenueForm {
    VenueForm {
        name: "The Musical Hop".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: "123-123-1234".to_string(),
        image_link: Some("https://images.example.com/hop.jpg".to_string()),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
    }
}

fn artist_form() -> ArtistForm {
    ArtistForm {
        name: "Guns N Petals".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        website: Some("https://www.gunsnpetalsband.com".to_string()),
        genres: vec!["Rock n Roll".to_string()],
        ..ArtistForm::default()
    }
}

fn show_form() -> ShowForm {
    ShowForm {
        title: "Spring Session".to_string(),
        artist_id: 4,
        venue_id: 1,
        start_time: "2035-04-01 20:00:00".to_string(),
        description: None,
        register_link: Some("https://tickets.example.com/spring".to_string()),
    }
}

fn field_messages<T: validator::Validate>(form: T, field: &str) -> Vec<String> {
    match validate(form) {
        Err(BookingError::Validation(fields)) => fields
            .get(field)
            .map(|m| m.to_vec())
            .unwrap_or_default(),
        Err(other) => panic!("expected validation error, got {:?}", other),
        Ok(_) => Vec::new(),
    }
}

#[test]
fn accepts_complete_forms() {
    let valid = validate(venue_form()).unwrap();
    assert_eq!(valid.name, "The Musical Hop");
    assert_eq!(valid.into_inner(), venue_form());

    assert!(validate(artist_form()).is_ok());
    assert!(validate(show_form()).is_ok());
}

#[rstest]
#[case("1234567890")]
#[case("123-1234-123")]
#[case("(123) 123-1234")]
#[case("123-123-12345")]
#[case("")]
fn rejects_malformed_phone(#[case] phone: &str) {
    let form = VenueForm {
        phone: phone.to_string(),
        ..venue_form()
    };

    assert_eq!(field_messages(form, "phone"), vec!["Invalid phone number."]);
}

#[test]
fn rejects_blank_required_fields() {
    let form = VenueForm {
        name: "   ".to_string(),
        city: String::new(),
        ..venue_form()
    };

    match validate(form) {
        Err(BookingError::Validation(fields)) => {
            assert_eq!(fields.get("name"), Some(&["This field is required.".to_string()][..]));
            assert_eq!(fields.get("city"), Some(&["This field is required.".to_string()][..]));
            assert!(!fields.contains("phone"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn state_must_be_a_known_code() {
    let unknown = VenueForm {
        state: "ZZ".to_string(),
        ..venue_form()
    };
    assert_eq!(field_messages(unknown, "state"), vec!["Not a valid choice."]);

    let lowercase = ArtistForm {
        state: "ca".to_string(),
        ..artist_form()
    };
    assert_eq!(field_messages(lowercase, "state"), vec!["Not a valid choice."]);

    let blank = ArtistForm {
        state: String::new(),
        ..artist_form()
    };
    assert_eq!(field_messages(blank, "state"), vec!["This field is required."]);
}

#[test]
fn genres_must_be_known_and_present() {
    let unknown = VenueForm {
        genres: vec!["Jazz".to_string(), "Polka".to_string()],
        ..venue_form()
    };
    assert_eq!(field_messages(unknown, "genres"), vec!["Invalid genres value."]);

    let none = ArtistForm {
        genres: Vec::new(),
        ..artist_form()
    };
    assert_eq!(field_messages(none, "genres"), vec!["This field is required."]);
}

#[test]
fn links_must_be_urls() {
    let form = ArtistForm {
        facebook_link: Some("not a url".to_string()),
        ..artist_form()
    };
    assert_eq!(field_messages(form, "facebook_link"), vec!["Invalid URL."]);

    let show = ShowForm {
        register_link: Some("tickets".to_string()),
        ..show_form()
    };
    assert_eq!(field_messages(show, "register_link"), vec!["Invalid URL."]);
}

#[test]
fn long_fields_are_rejected() {
    let form = VenueForm {
        city: "x".repeat(121),
        ..venue_form()
    };
    assert_eq!(
        field_messages(form, "city"),
        vec!["Field cannot be longer than 120 characters."]
    );
}

#[rstest]
#[case("")]
#[case("2035-04-01")]
#[case("2035-04-01T20:00:00")]
#[case("2035-13-01 20:00:00")]
#[case("tomorrow night")]
fn show_start_time_must_be_canonical(#[case] start_time: &str) {
    let form = ShowForm {
        start_time: start_time.to_string(),
        ..show_form()
    };
    assert_eq!(
        field_messages(form, "start_time"),
        vec!["Not a valid datetime value."]
    );
}

#[test]
fn show_references_must_be_positive() {
    let form = ShowForm {
        artist_id: 0,
        venue_id: -3,
        ..show_form()
    };

    match validate(form) {
        Err(BookingError::Validation(fields)) => {
            assert!(fields.contains("artist_id"));
            assert!(fields.contains("venue_id"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn normalizing_trims_and_blanks_optionals() {
    let raw = VenueForm {
        name: "  The Musical Hop ".to_string(),
        address: Some("   ".to_string()),
        facebook_link: Some(String::new()),
        seeking_description: Some(" open mic ".to_string()),
        phone: " 123-123-1234 ".to_string(),
        ..venue_form()
    };

    let form = raw.normalized();

    assert_eq!(form.name, "The Musical Hop");
    assert_eq!(form.address, None);
    assert_eq!(form.facebook_link, None);
    assert_eq!(form.seeking_description.as_deref(), Some("open mic"));
    assert!(validate(form).is_ok());
}

#[test]
fn blank_show_link_passes_after_normalizing() {
    let form = ShowForm {
        register_link: Some("  ".to_string()),
        title: " Spring Session ".to_string(),
        ..show_form()
    }
    .normalized();

    assert_eq!(form.register_link, None);
    assert_eq!(form.title, "Spring Session");
    assert!(validate(form).is_ok());
}

#[test]
fn choices_list_every_option() {
    let choices = form_choices();

    assert_eq!(choices.states.len(), STATE_CHOICES.len());
    assert!(choices.states.contains(&"CA"));
    assert!(choices.genres.contains(&"Hip-Hop"));
    assert_eq!(choices.genres, GENRE_CHOICES);
}

#[test]
fn normalizing_drops_repeated_genres() {
    let venue = VenueForm {
        genres: vec![
            "Jazz".to_string(),
            " Reggae".to_string(),
            "Jazz ".to_string(),
            "Reggae".to_string(),
        ],
        ..venue_form()
    }
    .normalized();
    assert_eq!(venue.genres, vec!["Jazz", "Reggae"]);

    let artist = ArtistForm {
        genres: vec!["Soul".to_string(), "Funk".to_string(), "Soul".to_string()],
        ..artist_form()
    }
    .normalized();
    assert_eq!(artist.genres, vec!["Soul", "Funk"]);
}
