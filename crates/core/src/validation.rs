//! Form schemas and validation.
//!
//! Each form struct derives [`Validate`]; the custom rules below cover what the
//! built-in validators cannot express. [`validate`] turns the outcome into a
//! [`Valid`] wrapper or a [`BookingError::Validation`] carrying one message
//! list per field, so callers never persist an unchecked form.

use std::borrow::Cow;
use std::collections::HashSet;
use std::ops::Deref;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::{BookingError, BookingResult, FieldErrors};
use crate::time::parse_start_time;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern is valid"));

pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Allowed values for the select fields of the venue and artist forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormChoices {
    pub states: &'static [&'static str],
    pub genres: &'static [&'static str],
}

pub fn form_choices() -> FormChoices {
    FormChoices {
        states: STATE_CHOICES,
        genres: GENRE_CHOICES,
    }
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valid<T>(T);

impl<T> Valid<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Valid<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Checks `form` against its schema.
pub fn validate<T: Validate>(form: T) -> BookingResult<Valid<T>> {
    match form.validate() {
        Ok(()) => Ok(Valid(form)),
        Err(errors) => Err(BookingError::Validation(field_errors(&errors))),
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, list) in errors.field_errors() {
        for error in list.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            fields.add(field.to_string(), message);
        }
    }
    fields
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "This field is required."));
    }
    Ok(())
}

pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(error("invalid_phone", "Invalid phone number."))
    }
}

pub(crate) fn validate_state(state: &str) -> Result<(), ValidationError> {
    if state.trim().is_empty() {
        return Err(error("required", "This field is required."));
    }
    if !STATE_CHOICES.contains(&state) {
        return Err(error("invalid_choice", "Not a valid choice."));
    }
    Ok(())
}

pub(crate) fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(error("required", "This field is required."));
    }
    if genres.iter().any(|g| !GENRE_CHOICES.contains(&g.as_str())) {
        return Err(error("invalid_genre", "Invalid genres value."));
    }
    Ok(())
}

pub(crate) fn validate_start_time(value: &str) -> Result<(), ValidationError> {
    parse_start_time(value)
        .map(|_| ())
        .map_err(|_| error("invalid_datetime", "Not a valid datetime value."))
}

pub(crate) fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims each genre and drops repeats, keeping first-seen order.
pub(crate) fn distinct_genres(genres: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    genres
        .into_iter()
        .map(|g| g.trim().to_string())
        .filter(|g| seen.insert(g.clone()))
        .collect()
}
