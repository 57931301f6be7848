//! Vehicle demand type and multiset expansion.

use serde::{Deserialize, Serialize};

/// A demand for storing some quantity of vehicles of one length.
///
/// # Examples
///
/// ```
/// use u_stowage::models::VehicleDemand;
///
/// let d = VehicleDemand::new(10, 3);
/// assert_eq!(d.length(), 10);
/// assert_eq!(d.quantity(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDemand {
    length: u32,
    quantity: u32,
}

impl VehicleDemand {
    /// Creates a demand for `quantity` vehicles of the given length.
    pub fn new(length: u32, quantity: u32) -> Self {
        Self { length, quantity }
    }

    /// Vehicle length.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Number of vehicles of this length.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Expands demands into a flat multiset of vehicle lengths.
///
/// Each demand contributes `quantity` copies of its length; a demand with
/// quantity 0 contributes nothing. Order carries no meaning downstream.
///
/// # Examples
///
/// ```
/// use u_stowage::models::{expand_lengths, VehicleDemand};
///
/// let demands = vec![VehicleDemand::new(10, 2), VehicleDemand::new(25, 1)];
/// assert_eq!(expand_lengths(&demands), vec![10, 10, 25]);
/// ```
pub fn expand_lengths(demands: &[VehicleDemand]) -> Vec<u32> {
    let mut lengths = Vec::new();
    for d in demands {
        for _ in 0..d.quantity {
            lengths.push(d.length);
        }
    }
    lengths
}
