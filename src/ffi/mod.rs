//! C FFI interface for the storage search engine.
//!
//! Provides a C-compatible JSON-in/JSON-out surface for using u-stowage
//! from other languages like C#, Python, etc.
//!
//! ## Functions
//!
//! - [`ustowage_search`] - Runs a search for a JSON request, returns JSON results
//! - [`ustowage_free_string`] - Frees result strings
//!
//! ## Error Codes
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `USTOWAGE_OK` | Success |
//! | -1 | `USTOWAGE_ERR_NULL_PTR` | Null pointer passed |
//! | -2 | `USTOWAGE_ERR_INVALID_JSON` | Invalid JSON input |
//! | -3 | `USTOWAGE_ERR_INVALID_INPUT` | Input failed validation |
//!
//! ## JSON Request Format
//!
//! ```json
//! {
//!   "vehicles": [
//!     {"length": 10, "quantity": 2}
//!   ],
//!   "listings": [
//!     {"id": "L1", "locationId": "loc-a", "length": 10, "width": 20, "priceInCents": 1000}
//!   ]
//! }
//! ```
//!
//! The response is the JSON array of best listings per feasible location,
//! sorted by total price ascending.

mod api;
mod types;

pub use api::*;
pub use types::*;
