//! Domain model types for vehicle storage search.
//!
//! Provides the core abstractions: vehicle demands that expand into a
//! length multiset, rectangular listings with two usable orientations, a
//! catalog grouping listings by location, and the per-location result row.

mod catalog;
mod demand;
mod listing;
mod result;

pub use catalog::{Catalog, Location};
pub use demand::{expand_lengths, VehicleDemand};
pub use listing::Listing;
pub use result::BestListings;
