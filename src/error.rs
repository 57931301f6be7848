//! Error type for input validation and catalog loading.

use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// The search itself cannot fail: an infeasible location is omitted from
/// the result, not an error. Errors come from malformed input (zero
/// dimensions, which the data model forbids) or from loading a catalog
/// from JSON.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A vehicle demand entry has length 0.
    #[error("vehicle demand at index {index} has zero length")]
    ZeroVehicleLength {
        /// Position of the offending entry in the demand sequence.
        index: usize,
    },

    /// A listing has a zero length or width.
    #[error("listing '{id}' at location '{location_id}' has a zero dimension")]
    ZeroListingDimension {
        /// Listing id.
        id: String,
        /// Location the listing belongs to.
        location_id: String,
    },

    /// Catalog JSON could not be parsed.
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog JSON could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, SearchError>;
