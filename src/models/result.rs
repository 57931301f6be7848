//! Search result type.

use serde::{Deserialize, Serialize};

/// The cheapest feasible listing combination found at one location.
///
/// `listing_ids` names exactly the winning subset; `total_price_in_cents`
/// is the sum of those listings' prices.
///
/// # Examples
///
/// ```
/// use u_stowage::models::BestListings;
///
/// let best = BestListings::new("loc-b", vec!["L3".to_string()], 3000);
/// assert_eq!(best.location_id(), "loc-b");
/// assert_eq!(best.listing_ids(), ["L3"]);
/// assert_eq!(best.total_price_in_cents(), 3000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestListings {
    location_id: String,
    listing_ids: Vec<String>,
    total_price_in_cents: u64,
}

impl BestListings {
    /// Creates a result row for one location.
    pub fn new(
        location_id: impl Into<String>,
        listing_ids: Vec<String>,
        total_price_in_cents: u64,
    ) -> Self {
        Self {
            location_id: location_id.into(),
            listing_ids,
            total_price_in_cents,
        }
    }

    /// Location this result belongs to.
    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    /// Ids of the winning listing subset.
    pub fn listing_ids(&self) -> &[String] {
        &self.listing_ids
    }

    /// Total price of the winning subset.
    pub fn total_price_in_cents(&self) -> u64 {
        self.total_price_in_cents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let best = BestListings::new("loc-b", vec!["L3".to_string()], 3000);
        let json = serde_json::to_string(&best).expect("serializable");
        assert_eq!(
            json,
            r#"{"locationId":"loc-b","listingIds":["L3"],"totalPriceInCents":3000}"#
        );
    }
}
