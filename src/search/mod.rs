//! Subset/orientation search and cross-location ranking.
//!
//! - [`Combinations`] — Lazy lexicographic k-subset index enumeration
//! - [`find_cheapest_selection`] — Per-location search over subsets and orientation masks
//! - [`best_listings`] — Full search: validate, expand demand, search every location, rank by price
//!
//! With the `parallel` feature enabled, [`best_listings`] fans the
//! per-location searches out on rayon; locations share no mutable state,
//! and the final stable sort makes the output identical to the sequential
//! path.

mod combinations;
mod engine;

pub use combinations::Combinations;
pub use engine::{find_cheapest_selection, SearchOptions, Selection};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Result, SearchError};
use crate::models::{expand_lengths, BestListings, Catalog, Location, VehicleDemand};

/// Finds the cheapest feasible listing combination per location, ranked by
/// total price ascending.
///
/// Locations where no listing subset and orientation can host every
/// vehicle are omitted. An empty demand (or one with only zero quantities)
/// yields an empty result. Equal-priced locations are ordered by location
/// id ascending.
///
/// # Errors
///
/// Returns [`SearchError`] if a demand has zero length or a listing has a
/// zero dimension.
///
/// # Examples
///
/// ```
/// use u_stowage::models::{Catalog, Listing, VehicleDemand};
/// use u_stowage::search::best_listings;
///
/// let catalog = Catalog::from_listings(vec![
///     Listing::new("L1", "loc-a", 20, 20, 5000),
///     Listing::new("L2", "loc-a", 10, 30, 4000),
///     Listing::new("L3", "loc-b", 40, 10, 3000),
/// ]);
///
/// let results = best_listings(&catalog, &[VehicleDemand::new(10, 1)]).unwrap();
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].location_id(), "loc-b");
/// assert_eq!(results[1].location_id(), "loc-a");
/// ```
pub fn best_listings(catalog: &Catalog, demands: &[VehicleDemand]) -> Result<Vec<BestListings>> {
    best_listings_with(catalog, demands, &SearchOptions::default())
}

/// Like [`best_listings`], with explicit per-location search options.
pub fn best_listings_with(
    catalog: &Catalog,
    demands: &[VehicleDemand],
    options: &SearchOptions,
) -> Result<Vec<BestListings>> {
    validate(catalog, demands)?;

    let lengths = expand_lengths(demands);
    if lengths.is_empty() {
        log::info!("search skipped: empty vehicle demand");
        return Ok(Vec::new());
    }

    let mut results = search_locations(catalog, &lengths, options);
    results.sort_by(|a, b| {
        a.total_price_in_cents()
            .cmp(&b.total_price_in_cents())
            .then_with(|| a.location_id().cmp(b.location_id()))
    });

    log::info!(
        "search complete: {} vehicles, {} of {} locations feasible",
        lengths.len(),
        results.len(),
        catalog.num_locations()
    );
    Ok(results)
}

fn search_locations(
    catalog: &Catalog,
    lengths: &[u32],
    options: &SearchOptions,
) -> Vec<BestListings> {
    let search_one = |loc: &Location| -> Option<BestListings> {
        let selection = find_cheapest_selection(loc.listings(), lengths, options)?;
        let (listing_ids, total) = selection.into_parts();
        log::debug!(
            "location {}: cheapest feasible selection is {} listings for {} cents",
            loc.id(),
            listing_ids.len(),
            total
        );
        Some(BestListings::new(loc.id(), listing_ids, total))
    };

    #[cfg(feature = "parallel")]
    {
        catalog.locations().par_iter().filter_map(search_one).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        catalog.locations().iter().filter_map(search_one).collect()
    }
}

fn validate(catalog: &Catalog, demands: &[VehicleDemand]) -> Result<()> {
    for (index, d) in demands.iter().enumerate() {
        if d.length() == 0 {
            return Err(SearchError::ZeroVehicleLength { index });
        }
    }
    for loc in catalog.locations() {
        for listing in loc.listings() {
            if listing.length() == 0 || listing.width() == 0 {
                return Err(SearchError::ZeroListingDimension {
                    id: listing.id().to_string(),
                    location_id: loc.id().to_string(),
                });
            }
        }
    }
    Ok(())
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::models::Listing;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn demands_strategy() -> impl Strategy<Value = Vec<VehicleDemand>> {
        proptest::collection::vec(
            (1u32..=20, 0u32..=2).prop_map(|(len, qty)| VehicleDemand::new(len, qty)),
            0..3,
        )
    }

    fn listings_strategy() -> impl Strategy<Value = Vec<Listing>> {
        proptest::collection::vec((0u8..3, 1u32..=30, 1u32..=30, 0u32..=10_000), 0..5).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (loc, len, width, price))| {
                        Listing::new(format!("L{i}"), format!("loc-{loc}"), len, width, price)
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_output_sorted_by_price(
            demands in demands_strategy(),
            listings in listings_strategy(),
        ) {
            let catalog = Catalog::from_listings(listings);
            let results = best_listings(&catalog, &demands).expect("valid input");
            for pair in results.windows(2) {
                prop_assert!(pair[0].total_price_in_cents() <= pair[1].total_price_in_cents());
            }
        }

        #[test]
        fn prop_totals_match_named_listings(
            demands in demands_strategy(),
            listings in listings_strategy(),
        ) {
            let catalog = Catalog::from_listings(listings);
            let results = best_listings(&catalog, &demands).expect("valid input");
            for row in &results {
                let location = catalog.get(row.location_id()).expect("known location");
                let mut seen = HashSet::new();
                let mut sum = 0u64;
                for id in row.listing_ids() {
                    prop_assert!(seen.insert(id.clone()), "duplicate listing id {}", id);
                    let listing = location
                        .iter()
                        .find(|l| l.id() == id)
                        .expect("id from this location's catalog");
                    sum += u64::from(listing.price_in_cents());
                }
                prop_assert_eq!(sum, row.total_price_in_cents());
            }
        }

        #[test]
        fn prop_idempotent(
            demands in demands_strategy(),
            listings in listings_strategy(),
        ) {
            let catalog = Catalog::from_listings(listings);
            let first = best_listings(&catalog, &demands).expect("valid input");
            let second = best_listings(&catalog, &demands).expect("valid input");
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_empty_demand_always_empty(listings in listings_strategy()) {
            let catalog = Catalog::from_listings(listings);
            let results = best_listings(&catalog, &[]).expect("valid input");
            prop_assert!(results.is_empty());
        }
    }
}
