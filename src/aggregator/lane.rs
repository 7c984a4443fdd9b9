//! One lane's kernel queue and generator.
//!
//! Kernels are appended during setup in trace-file order and handed to the
//! lane's generator, in that same order, when traffic starts.

use crate::generator::model::{AddressGenerator, LaneSetup};
use crate::kernel::KernelDescriptor;
use crate::utils::config::{AddressConfig, GeneratorConfig};
use log::{debug, info, warn};

/// Owns one lane's generator, its hardware parameters and its kernel queue
#[derive(Debug)]
pub struct LaneAggregator<G> {
    lane: usize,
    generator: G,
    setup: LaneSetup,
    kernels: Vec<KernelDescriptor>,
    frozen: bool,
}

impl<G: AddressGenerator> LaneAggregator<G> {
    /// Create an empty lane around a generator built from `setup`
    pub fn new(setup: LaneSetup, generator: G) -> Self {
        Self {
            lane: setup.lane,
            generator,
            setup,
            kernels: Vec::new(),
            frozen: false,
        }
    }

    /// Append a kernel to the queue
    ///
    /// Kernels added after [`LaneAggregator::start_traffic`] are dropped
    /// with a warning.
    pub fn add_kernel(&mut self, kernel: KernelDescriptor) {
        if self.frozen {
            warn!(
                "Lane {}: ignoring kernel {} added after traffic started",
                self.lane,
                kernel.id()
            );
            return;
        }
        debug!(
            "Lane {}: queued kernel {} ({} indices)",
            self.lane,
            kernel.id(),
            kernel.trace().len()
        );
        self.kernels.push(kernel);
    }

    /// Register every queued kernel with the generator, in queue order
    ///
    /// # Returns
    /// Number of registration calls issued
    pub fn start_traffic(&mut self) -> usize {
        if self.frozen {
            warn!("Lane {}: traffic already started", self.lane);
            return 0;
        }
        self.frozen = true;

        for kernel in &self.kernels {
            info!("Lane {}: adding kernel: {}", self.lane, kernel);
            self.generator.add_kernel(kernel.call_args());
        }

        self.kernels.len()
    }
}

impl<G> LaneAggregator<G> {
    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn kernels(&self) -> &[KernelDescriptor] {
        &self.kernels
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn into_generator(self) -> G {
        self.generator
    }

    pub fn setup(&self) -> &LaneSetup {
        &self.setup
    }

    pub fn generator_config(&self) -> &GeneratorConfig {
        &self.setup.generator
    }

    pub fn addressing(&self) -> &AddressConfig {
        &self.setup.addressing
    }

    pub fn clock(&self) -> Option<&str> {
        self.setup.clock.as_deref()
    }

    /// True once traffic has started
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}
