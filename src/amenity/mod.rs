//! Amenity selection store and its wire codec.

pub mod codec;
mod store;

pub use codec::{encode, parse};
pub use store::{AmenitySet, AmenityStore, AmenityValue, RangePatch};
