//! Greedy packing feasibility check.
//!
//! Decides whether a vehicle-length multiset fits into a lane-capacity
//! multiset: vehicles are placed largest first, each into the smallest
//! lane that still holds it, with lane remainders reusable for later
//! vehicles. No backtracking is attempted, so the check is a heuristic
//! decision procedure: a `false` answer means this placement order failed,
//! not that no packing exists.
//!
//! # Complexity
//!
//! O(v log v + v log c) for v vehicles and c distinct capacities.

use crate::packing::LanePool;

/// Returns `true` if every vehicle can be placed by the greedy procedure.
///
/// Vehicles are sorted descending and fitted one by one, best-fit by
/// ceiling. The same inputs always produce the same answer.
///
/// # Examples
///
/// ```
/// use u_stowage::packing::can_pack;
///
/// assert!(can_pack(&[5, 5], &[10]));      // share one lane end-to-end
/// assert!(can_pack(&[6, 6], &[10, 10]));  // one vehicle per lane
/// assert!(!can_pack(&[11], &[10]));       // nothing holds it
/// ```
pub fn can_pack(vehicle_lengths: &[u32], lane_capacities: &[u32]) -> bool {
    let mut vehicles = vehicle_lengths.to_vec();
    vehicles.sort_unstable_by(|a, b| b.cmp(a));

    let mut pool = LanePool::from_capacities(lane_capacities);
    for v in vehicles {
        if !pool.fit(v) {
            return false;
        }
    }
    true
}
