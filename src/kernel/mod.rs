//! Kernel descriptors handed to the address generators.

pub mod descriptor;

pub use descriptor::{KernelCallArgs, KernelDescriptor};
