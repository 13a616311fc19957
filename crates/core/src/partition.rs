//! Splitting an entity's shows into past and upcoming.
//!
//! A show is upcoming when its start time is strictly after the reference
//! instant; a show starting exactly at `now` counts as past. Every caller
//! (detail pages, listings, search results) goes through [`is_upcoming`], so
//! counts and lists always agree.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::errors::{BookingError, BookingResult};
use crate::models::show::Show;
use crate::time::parse_start_time;

/// Shows of one entity, split around a reference instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Partition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

pub fn is_upcoming(show: &Show, now: NaiveDateTime) -> BookingResult<bool> {
    Ok(parse_start_time(&show.start_time)? > now)
}

/// Splits `shows` around `now`, keeping input order within each side.
///
/// `summarize` turns a show into the record kept in the partition; an error
/// from it (or from parsing a start time) aborts the whole partition.
pub fn partition_shows<T, F>(
    shows: &[Show],
    now: NaiveDateTime,
    mut summarize: F,
) -> BookingResult<Partition<T>>
where
    F: FnMut(&Show) -> BookingResult<T>,
{
    let mut partition = Partition::default();
    for show in shows {
        let upcoming = is_upcoming(show, now)?;
        let record = summarize(show)?;
        if upcoming {
            partition.upcoming.push(record);
        } else {
            partition.past.push(record);
        }
    }
    Ok(partition)
}

/// Upcoming-show counts keyed by the id `key` picks out of each show.
pub fn upcoming_counts_by<F>(
    shows: &[Show],
    now: NaiveDateTime,
    key: F,
) -> BookingResult<HashMap<i32, usize>>
where
    F: Fn(&Show) -> i32,
{
    let mut counts = HashMap::new();
    for show in shows {
        if is_upcoming(show, now)? {
            *counts.entry(key(show)).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

/// Looks up the counterpart of a show in a map built from an id list.
pub fn counterpart<'a, T>(lookup: &'a HashMap<i32, T>, id: i32, kind: &str) -> BookingResult<&'a T> {
    lookup.get(&id).ok_or_else(|| {
        BookingError::Integrity(format!("show references missing {} with ID {}", kind, id))
    })
}
