//! Boundary to the address-generation hardware model.
//!
//! Each lane drives one generator. Registration is fire-and-forget: the
//! generator queues the kernel and issues its requests on its own schedule.

use crate::kernel::KernelCallArgs;
use crate::utils::config::{AddressConfig, GeneratorConfig};
use serde::{Deserialize, Serialize};

/// Everything a lane's generator is built from
///
/// Handed to the generator factory once per lane, in lane order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneSetup {
    pub lane: usize,

    /// Hardware parameters, passed through unchanged
    pub generator: GeneratorConfig,

    pub addressing: AddressConfig,

    /// Clock frequency override for this lane's generator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<String>,
}

/// Kernel registration entry point of an address generator
pub trait AddressGenerator {
    /// Queue one kernel given its positional arguments
    /// `(id, delta, count, type_code, trace)`.
    fn add_kernel(&mut self, args: KernelCallArgs<'_>);
}

impl<G: AddressGenerator + ?Sized> AddressGenerator for Box<G> {
    fn add_kernel(&mut self, args: KernelCallArgs<'_>) {
        (**self).add_kernel(args)
    }
}

/// One registration call as received by a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedCall {
    pub id: usize,
    pub delta: i64,
    pub count: u64,
    pub type_code: u8,
    pub trace: Vec<u64>,
}

impl From<KernelCallArgs<'_>> for RecordedCall {
    fn from((id, delta, count, type_code, trace): KernelCallArgs<'_>) -> Self {
        Self {
            id,
            delta,
            count,
            type_code,
            trace: trace.to_vec(),
        }
    }
}

/// Generator that keeps its setup and every registration call in arrival order
///
/// Used for schedule export and in tests.
#[derive(Debug, Clone)]
pub struct RecordingGenerator {
    setup: LaneSetup,
    calls: Vec<RecordedCall>,
}

impl RecordingGenerator {
    pub fn new(setup: &LaneSetup) -> Self {
        Self {
            setup: setup.clone(),
            calls: Vec::new(),
        }
    }

    /// Configuration this generator was built with
    pub fn setup(&self) -> &LaneSetup {
        &self.setup
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    pub fn into_parts(self) -> (LaneSetup, Vec<RecordedCall>) {
        (self.setup, self.calls)
    }
}

impl AddressGenerator for RecordingGenerator {
    fn add_kernel(&mut self, args: KernelCallArgs<'_>) {
        self.calls.push(args.into());
    }
}
