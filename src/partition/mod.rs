//! Trace partitioning across lanes.

pub mod partitioner;

pub use partitioner::partition_trace;
