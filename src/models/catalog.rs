//! Listing catalog grouped by location.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::models::Listing;

/// Listings at a single location, in catalog order.
#[derive(Debug, Clone)]
pub struct Location {
    id: String,
    listings: Vec<Listing>,
}

impl Location {
    /// Location id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Listings at this location.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }
}

/// An immutable listing catalog, grouped by location.
///
/// Locations keep the order in which they first appear in the flat listing
/// sequence, so iteration and search results are deterministic for a given
/// input file.
///
/// # Examples
///
/// ```
/// use u_stowage::models::{Catalog, Listing};
///
/// let catalog = Catalog::from_listings(vec![
///     Listing::new("L1", "loc-a", 20, 20, 5000),
///     Listing::new("L3", "loc-b", 40, 10, 3000),
///     Listing::new("L2", "loc-a", 10, 30, 4000),
/// ]);
/// assert_eq!(catalog.num_locations(), 2);
/// assert_eq!(catalog.num_listings(), 3);
/// assert_eq!(catalog.get("loc-a").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// Groups a flat listing sequence by location.
    ///
    /// Within a location, listings keep their input order.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut locations: Vec<Location> = Vec::new();
        for listing in listings {
            match locations
                .iter_mut()
                .find(|loc| loc.id == listing.location_id())
            {
                Some(loc) => loc.listings.push(listing),
                None => locations.push(Location {
                    id: listing.location_id().to_string(),
                    listings: vec![listing],
                }),
            }
        }
        Self { locations }
    }

    /// Parses a catalog from the flat JSON listing array format.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_stowage::models::Catalog;
    ///
    /// let json = r#"[
    ///   {"id": "L1", "locationId": "loc-a", "length": 10, "width": 20, "priceInCents": 1000}
    /// ]"#;
    /// let catalog = Catalog::from_json_str(json).unwrap();
    /// assert_eq!(catalog.num_listings(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Ok(Self::from_listings(listings))
    }

    /// Reads and parses a catalog from a JSON reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)?;
        Ok(Self::from_listings(listings))
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Locations in first-appearance order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Listings at the given location, if present.
    pub fn get(&self, location_id: &str) -> Option<&[Listing]> {
        self.locations
            .iter()
            .find(|loc| loc.id == location_id)
            .map(|loc| loc.listings.as_slice())
    }

    /// Number of locations.
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// Total number of listings across all locations.
    pub fn num_listings(&self) -> usize {
        self.locations.iter().map(|loc| loc.listings.len()).sum()
    }

    /// Returns `true` if the catalog has no listings.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
