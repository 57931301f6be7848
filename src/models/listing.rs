//! Storage listing type.

use serde::{Deserialize, Serialize};

/// A rectangular storage listing at one location.
///
/// A listing can be used in either orientation: unrotated it offers
/// `width` parking lanes of capacity `length`, rotated it offers `length`
/// lanes of capacity `width`.
///
/// # Examples
///
/// ```
/// use u_stowage::models::Listing;
///
/// let l = Listing::new("L3", "loc-b", 40, 10, 3000);
/// assert_eq!(l.id(), "L3");
/// assert_eq!(l.lane_dims(false), (40, 10));
/// assert_eq!(l.lane_dims(true), (10, 40));
/// assert_eq!(l.max_dim(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    id: String,
    location_id: String,
    length: u32,
    width: u32,
    price_in_cents: u32,
}

impl Listing {
    /// Creates a new listing.
    pub fn new(
        id: impl Into<String>,
        location_id: impl Into<String>,
        length: u32,
        width: u32,
        price_in_cents: u32,
    ) -> Self {
        Self {
            id: id.into(),
            location_id: location_id.into(),
            length,
            width,
            price_in_cents,
        }
    }

    /// Listing id, unique within its location.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Location this listing belongs to.
    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    /// Footprint length.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Footprint width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Monthly price in cents.
    pub fn price_in_cents(&self) -> u32 {
        self.price_in_cents
    }

    /// Lane length and lane count for one orientation.
    ///
    /// Unrotated, vehicles park along `length` and the footprint fits
    /// `width` lanes side by side; rotated swaps the two.
    pub fn lane_dims(&self, rotated: bool) -> (u32, u32) {
        if rotated {
            (self.width, self.length)
        } else {
            (self.length, self.width)
        }
    }

    /// Longest side of the footprint.
    ///
    /// An upper bound on the lane capacity any orientation can offer.
    pub fn max_dim(&self) -> u32 {
        self.length.max(self.width)
    }
}
