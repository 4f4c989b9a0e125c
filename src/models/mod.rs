//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for frontend consumption.
//! - `listing`: Entry, EntryKind, Category, Listing for the file grid

pub mod listing;

pub use listing::*;
