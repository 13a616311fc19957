use std::error::Error;
use stagebook_core::errors::{BookingError, BookingResult, FieldErrors};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Venue with ID 3 not found".to_string());
    let integrity = BookingError::Integrity("Venue with ID 3 still has 2 show(s)".to_string());
    let parse = BookingError::Parse("bad start time".to_string());
    let database = BookingError::Database(eyre::eyre!("Database connection failed"));
    let internal = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Venue with ID 3 not found"
    );
    assert_eq!(
        integrity.to_string(),
        "Integrity error: Venue with ID 3 still has 2 show(s)"
    );
    assert_eq!(parse.to_string(), "Parse error: bad start time");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_validation_error_lists_fields() {
    let mut fields = FieldErrors::new();
    fields.add("phone", "Invalid phone number.");
    fields.add("genres", "This field is required.");
    fields.add("genres", "Invalid genres value.");

    let error = BookingError::Validation(fields);

    assert_eq!(
        error.to_string(),
        "Validation error: genres: This field is required., Invalid genres value.; phone: Invalid phone number."
    );
}

#[test]
fn test_invalid_field_shorthand() {
    match BookingError::invalid_field("start_time", "Not a valid datetime value.") {
        BookingError::Validation(fields) => {
            assert_eq!(
                fields.get("start_time"),
                Some(&["Not a valid datetime value.".to_string()][..])
            );
            assert!(!fields.contains("title"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_field_errors_serialize_as_map() {
    let mut fields = FieldErrors::new();
    fields.add("phone", "Invalid phone number.");

    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(json, serde_json::json!({ "phone": ["Invalid phone number."] }));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let booking_error = BookingError::from(boxed_error);

    assert!(booking_error.to_string().contains("IO error"));
    assert!(booking_error.source().is_some());
}

#[test]
fn test_eyre_conversion() {
    let booking_error = BookingError::from(eyre::eyre!("pool timed out"));

    assert!(matches!(booking_error, BookingError::Database(_)));
}
