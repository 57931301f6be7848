//! Lane derivation from listing orientations.

use crate::models::Listing;

/// Derives the lane capacity multiset offered by a listing subset under one
/// orientation mask.
///
/// Bit `i` of `mask` set means listing `i` is used rotated (length and
/// width swapped). A listing whose lane length under its assigned
/// orientation is below `min_lane_len` contributes no lanes at all: every
/// lane the search hands to the packer must be able to host the longest
/// demanded vehicle. Otherwise the listing contributes `lane_count` lanes
/// of capacity `lane_len`.
///
/// # Examples
///
/// ```
/// use u_stowage::models::Listing;
/// use u_stowage::packing::lanes_for_mask;
///
/// let a = Listing::new("A", "loc", 40, 2, 1000);
/// let subset = vec![&a];
/// // Unrotated: two lanes of 40.
/// assert_eq!(lanes_for_mask(&subset, 0, 40), vec![40, 40]);
/// // Rotated the lanes are only 2 long, below the 40 cutoff: none usable.
/// assert_eq!(lanes_for_mask(&subset, 1, 40), Vec::<u32>::new());
/// ```
pub fn lanes_for_mask(subset: &[&Listing], mask: u64, min_lane_len: u32) -> Vec<u32> {
    let mut lanes = Vec::new();
    for (i, listing) in subset.iter().enumerate() {
        let rotated = (mask >> i) & 1 == 1;
        let (lane_len, lane_count) = listing.lane_dims(rotated);
        if lane_len < min_lane_len {
            continue;
        }
        for _ in 0..lane_count {
            lanes.push(lane_len);
        }
    }
    lanes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrotated_lanes() {
        let l = Listing::new("A", "loc", 40, 3, 1000);
        assert_eq!(lanes_for_mask(&[&l], 0, 10), vec![40, 40, 40]);
    }

    #[test]
    fn test_rotated_lanes() {
        let l = Listing::new("A", "loc", 3, 40, 1000);
        // Rotated: lane length 40, lane count 3.
        assert_eq!(lanes_for_mask(&[&l], 1, 10), vec![40, 40, 40]);
    }

    #[test]
    fn test_mask_mixes_orientations() {
        let a = Listing::new("A", "loc", 30, 2, 1000);
        let b = Listing::new("B", "loc", 2, 30, 1000);
        // A unrotated (two 30-lanes), B rotated (two 30-lanes).
        assert_eq!(lanes_for_mask(&[&a, &b], 0b10, 20), vec![30, 30, 30, 30]);
    }

    #[test]
    fn test_short_orientation_contributes_nothing() {
        let l = Listing::new("A", "loc", 40, 10, 1000);
        assert_eq!(lanes_for_mask(&[&l], 1, 40), Vec::<u32>::new());
    }

    #[test]
    fn test_short_lanes_dropped_even_for_mixed_demand() {
        // One long vehicle (40) and one short (10). Listing B only ever
        // offers lanes of 10, which could hold the short vehicle, yet it
        // contributes nothing because 10 < 40. The long-vehicle cutoff
        // applies to every listing in the subset, not just the one hosting
        // the longest vehicle.
        let a = Listing::new("A", "loc", 40, 1, 1000);
        let b = Listing::new("B", "loc", 10, 1, 500);
        for mask in 0..4u64 {
            let lanes = lanes_for_mask(&[&a, &b], mask, 40);
            assert!(
                !lanes.contains(&10),
                "mask {mask}: short lanes must be discarded"
            );
        }
        // Best case for the pair is still just A's single 40-lane.
        assert_eq!(lanes_for_mask(&[&a, &b], 0, 40), vec![40]);
    }
}
