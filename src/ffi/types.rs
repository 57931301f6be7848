//! FFI request type.

use serde::{Deserialize, Serialize};

use crate::models::{Listing, VehicleDemand};

/// A complete search request: the vehicle demand and a flat listing
/// sequence, grouped into a catalog by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Vehicles to store.
    pub vehicles: Vec<VehicleDemand>,
    /// Available listings across all locations.
    pub listings: Vec<Listing>,
}
