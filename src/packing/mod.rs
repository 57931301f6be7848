//! Lane derivation and packing feasibility.
//!
//! - [`lanes_for_mask`] — Lane capacities offered by a listing subset under one orientation mask
//! - [`LanePool`] — Ordered capacity pool with ceiling lookup and remainder merge
//! - [`can_pack`] — Greedy largest-first, best-fit-by-ceiling feasibility check

mod greedy;
mod lane_pool;
mod lanes;

pub use greedy::can_pack;
pub use lane_pool::LanePool;
pub use lanes::lanes_for_mask;
