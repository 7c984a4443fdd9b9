//! Per-lane aggregation of kernel descriptors.
//!
//! Each lane collects its share of every kernel during setup and forwards
//! the queue to its address generator when traffic starts.

pub mod lane;

pub use lane::LaneAggregator;
