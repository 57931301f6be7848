//! Per-location subset and orientation search.
//!
//! Enumerates listing subsets of growing size and, per subset, every
//! orientation assignment, keeping the cheapest combination that the
//! greedy packer accepts. Cost grows as the sum over k of C(n,k)·2^k, so
//! this is viable for the small per-location catalogs it is meant for; the
//! optional step budget in [`SearchOptions`] caps the work spent on one
//! location.

use crate::models::Listing;
use crate::packing::{can_pack, lanes_for_mask};
use crate::search::Combinations;

/// Options bounding a per-location search.
///
/// The default is unbounded, which examines every subset and orientation.
///
/// # Examples
///
/// ```
/// use u_stowage::search::SearchOptions;
///
/// let opts = SearchOptions::new().with_max_steps(10_000);
/// assert_eq!(opts.max_steps(), Some(10_000));
/// assert_eq!(SearchOptions::default().max_steps(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    max_steps: Option<u64>,
}

impl SearchOptions {
    /// Creates unbounded options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of (subset, orientation) pairs examined per
    /// location. When the cap is reached the search stops and keeps the
    /// best selection found so far.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// The step cap, if any.
    pub fn max_steps(&self) -> Option<u64> {
        self.max_steps
    }
}

/// The cheapest feasible listing subset found at one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    listing_ids: Vec<String>,
    total_price_in_cents: u64,
}

impl Selection {
    /// Ids of the selected listings, in price-ascending discovery order.
    pub fn listing_ids(&self) -> &[String] {
        &self.listing_ids
    }

    /// Sum of the selected listings' prices.
    pub fn total_price_in_cents(&self) -> u64 {
        self.total_price_in_cents
    }

    /// Consumes the selection into its parts.
    pub fn into_parts(self) -> (Vec<String>, u64) {
        (self.listing_ids, self.total_price_in_cents)
    }
}

/// Finds the cheapest listing subset at one location that can host every
/// vehicle, or `None` if no subset and orientation works.
///
/// Listings are examined in price-ascending order (stable, so equal prices
/// keep catalog order) and subsets in lexicographic index order with
/// orientation masks ascending; the first feasible combination at a given
/// price wins and later price ties never replace it.
///
/// # Examples
///
/// ```
/// use u_stowage::models::Listing;
/// use u_stowage::search::{find_cheapest_selection, SearchOptions};
///
/// let listings = vec![
///     Listing::new("L1", "loc-a", 20, 20, 5000),
///     Listing::new("L2", "loc-a", 10, 30, 4000),
/// ];
/// // A 10-length vehicle fits L2's rotated 30-lanes; L2 is also cheaper.
/// let sel = find_cheapest_selection(&listings, &[10], &SearchOptions::default()).unwrap();
/// assert_eq!(sel.listing_ids(), ["L2"]);
/// assert_eq!(sel.total_price_in_cents(), 4000);
/// ```
pub fn find_cheapest_selection(
    listings: &[Listing],
    vehicle_lengths: &[u32],
    options: &SearchOptions,
) -> Option<Selection> {
    if vehicle_lengths.is_empty() || listings.is_empty() {
        return None;
    }
    let total_vehicles = vehicle_lengths.len();
    let max_vehicle_len = vehicle_lengths.iter().copied().max().unwrap_or(0);
    let max_subset_size = total_vehicles.min(listings.len());

    // Price order decides which of two equal-priced subsets is seen first.
    let mut sorted: Vec<&Listing> = listings.iter().collect();
    sorted.sort_by_key(|l| l.price_in_cents());

    let mut best: Option<Selection> = None;
    let mut steps: u64 = 0;

    'search: for k in 1..=max_subset_size {
        for combo in Combinations::new(sorted.len(), k) {
            let subset: Vec<&Listing> = combo.iter().map(|&i| sorted[i]).collect();

            // No orientation of any listing here can host the longest
            // vehicle, so no mask of this subset can ever be feasible.
            let max_dim = subset.iter().map(|l| l.max_dim()).max().unwrap_or(0);
            if max_dim < max_vehicle_len {
                continue;
            }

            let price_sum: u64 = subset.iter().map(|l| u64::from(l.price_in_cents())).sum();

            for mask in 0..(1u64 << k) {
                if let Some(limit) = options.max_steps() {
                    if steps >= limit {
                        log::warn!(
                            "location search budget of {limit} steps exhausted, \
                             keeping best selection found so far"
                        );
                        break 'search;
                    }
                }
                steps += 1;

                let lanes = lanes_for_mask(&subset, mask, max_vehicle_len);
                if lanes.len() < total_vehicles {
                    continue;
                }
                if !can_pack(vehicle_lengths, &lanes) {
                    continue;
                }

                let improves = best
                    .as_ref()
                    .map_or(true, |b| price_sum < b.total_price_in_cents);
                if improves {
                    best = Some(Selection {
                        listing_ids: subset.iter().map(|l| l.id().to_string()).collect(),
                        total_price_in_cents: price_sum,
                    });
                }
            }
        }
    }
    best
}
