//! # u-stowage
//!
//! Vehicle storage search library: given a multiset of vehicles (length and
//! quantity) and per-location storage listing catalogs, finds the cheapest
//! combination of listings at each location that can physically hold all
//! vehicles at once, and ranks locations by that best price.
//!
//! Each listing is a rectangular footprint usable in either orientation;
//! one orientation yields parallel parking lanes packed end-to-end. The
//! engine enumerates listing subsets and orientation assignments per
//! location and decides feasibility with a deterministic greedy lane
//! packing heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (VehicleDemand, Listing, Catalog, BestListings)
//! - [`packing`] — Lane derivation and the greedy packing feasibility check
//! - [`search`] — Subset/orientation enumeration and cross-location ranking
//! - [`error`] — Error type for validation and catalog loading
//!
//! ## Example
//!
//! ```
//! use u_stowage::models::{Catalog, Listing, VehicleDemand};
//! use u_stowage::search::best_listings;
//!
//! let catalog = Catalog::from_listings(vec![
//!     Listing::new("L1", "loc-a", 20, 20, 5000),
//!     Listing::new("L2", "loc-a", 10, 30, 4000),
//!     Listing::new("L3", "loc-b", 40, 10, 3000),
//! ]);
//! let demand = vec![VehicleDemand::new(40, 1)];
//!
//! let results = best_listings(&catalog, &demand).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].location_id(), "loc-b");
//! assert_eq!(results[0].total_price_in_cents(), 3000);
//! ```

pub mod error;
pub mod models;
pub mod packing;
pub mod search;

#[cfg(feature = "ffi")]
pub mod ffi;
