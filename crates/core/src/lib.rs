//! # Stagebook core
//!
//! Domain types and rules for the venue/artist/show directory: show-time
//! partitioning, directory search, form validation, and the page and command
//! operations built on top of the [`store::DirectoryStore`] seam.

pub mod commands;
pub mod errors;
pub mod models;
pub mod pages;
pub mod partition;
pub mod search;
pub mod store;
pub mod time;
pub mod validation;
