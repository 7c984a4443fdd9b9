use pretty_assertions::assert_eq;
use serde_json::json;
use spatter_gen::generator::{LaneSetup, Phase, RecordingGenerator, TraceOrchestrator};
use spatter_gen::kernel::KernelDescriptor;
use spatter_gen::parser::{KernelSpec, KernelType};
use spatter_gen::utils::config::{AddressConfig, GeneratorConfig, OrchestratorConfig};
use spatter_gen::utils::error::{KernelError, OrchestratorError, PartitionError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_trace(contents: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

fn recording(setup: &LaneSetup) -> RecordingGenerator {
    RecordingGenerator::new(setup)
}

#[test]
fn test_descriptor_call_args_round_trip() {
    let spec = KernelSpec {
        delta: 2,
        count: 3,
        kernel_type: KernelType::Gather,
        trace: vec![5, 6, 7],
    };
    let descriptor = KernelDescriptor::new(0, &spec, spec.trace.clone(), AddressConfig::default());

    let (id, delta, count, type_code, trace) = descriptor.call_args();
    assert_eq!(id, 0);
    assert_eq!(delta, 2);
    assert_eq!(count, 3);
    assert_eq!(KernelType::from_code(type_code), Some(KernelType::Gather));
    assert_eq!(trace, &[5, 6, 7]);
}

#[test]
fn test_descriptor_carries_addressing() {
    let spec = KernelSpec {
        delta: 0,
        count: 1,
        kernel_type: KernelType::Scatter,
        trace: vec![1],
    };
    let addressing = AddressConfig {
        base_index_addr: 0x1000,
        base_value_addr: 0x2000,
        index_size: 4,
        value_size: 8,
    };
    let descriptor = KernelDescriptor::new(9, &spec, vec![1], addressing);

    assert_eq!(descriptor.base_index_addr(), 0x1000);
    assert_eq!(descriptor.base_value_addr(), 0x2000);
    assert_eq!(descriptor.index_size(), 4);
    assert_eq!(descriptor.value_size(), 8);
}

#[test]
fn test_skips_record_missing_kernel() {
    let trace = write_trace(&json!([
        {"kernel": "gather", "pattern": [0, 1, 2, 3]},
        {"delta": 4, "pattern": [4, 5, 6, 7]},
        {"kernel": "scatter", "count": 2, "pattern": [8, 9, 10, 11]}
    ]));

    let config = OrchestratorConfig::new(2);
    let orchestrator = TraceOrchestrator::from_trace_file(&config, trace.path(), recording).unwrap();

    assert_eq!(orchestrator.kernels_scheduled(), 2);
    assert_eq!(orchestrator.skipped().len(), 1);
    assert_eq!(orchestrator.skipped()[0].index, 1);
    assert_eq!(orchestrator.skipped()[0].error, KernelError::MissingOperationType);
    assert_eq!(
        orchestrator.skipped()[0].error.to_string(),
        "Keyword 'kernel' not found"
    );

    for lane in orchestrator.lanes() {
        let ids: Vec<usize> = lane.kernels().iter().map(|k| k.id()).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}

#[test]
fn test_descriptors_share_metadata_and_split_trace() {
    let records = vec![json!({"delta": 3, "count": 5, "kernel": "scatter", "pattern": [0, 1, 2, 3, 4, 5, 6]})];
    let config = OrchestratorConfig::new(3);
    let orchestrator = TraceOrchestrator::from_records(&config, records, recording).unwrap();

    let traces: Vec<Vec<u64>> = orchestrator
        .lanes()
        .iter()
        .map(|lane| {
            let kernel = &lane.kernels()[0];
            assert_eq!(kernel.id(), 0);
            assert_eq!(kernel.delta(), 3);
            assert_eq!(kernel.count(), 5);
            assert_eq!(kernel.kernel_type(), KernelType::Scatter);
            kernel.trace().to_vec()
        })
        .collect();

    assert_eq!(traces, vec![vec![0, 1], vec![2, 3], vec![4, 5, 6]]);
}

#[test]
fn test_start_traffic_issues_calls_in_lane_order() {
    let records = vec![
        json!({"kernel": "gather", "pattern": [10, 11, 12, 13]}),
        json!({"kernel": "scatter", "delta": 1, "pattern": [20, 21]}),
    ];
    let config = OrchestratorConfig::new(2);
    let mut orchestrator = TraceOrchestrator::from_records(&config, records, recording).unwrap();

    assert_eq!(orchestrator.phase(), Phase::Setup);
    assert_eq!(orchestrator.start_traffic().unwrap(), 4);
    assert_eq!(orchestrator.phase(), Phase::Running);

    let generators = orchestrator.into_generators();
    let lane0: Vec<(usize, u8, Vec<u64>)> = generators[0]
        .calls()
        .iter()
        .map(|c| (c.id, c.type_code, c.trace.clone()))
        .collect();
    assert_eq!(lane0, vec![(0, 0, vec![10, 11]), (1, 1, vec![20])]);

    let lane1: Vec<(usize, u8, Vec<u64>)> = generators[1]
        .calls()
        .iter()
        .map(|c| (c.id, c.type_code, c.trace.clone()))
        .collect();
    assert_eq!(lane1, vec![(0, 0, vec![12, 13]), (1, 1, vec![21])]);
}

#[test]
fn test_start_traffic_twice_fails() {
    let config = OrchestratorConfig::new(1);
    let mut orchestrator =
        TraceOrchestrator::from_records(&config, vec![json!({"kernel": "gather", "pattern": [1]})], recording)
            .unwrap();

    orchestrator.start_traffic().unwrap();
    assert!(matches!(
        orchestrator.start_traffic(),
        Err(OrchestratorError::AlreadyRunning)
    ));
    assert_eq!(orchestrator.lanes()[0].generator().calls().len(), 1);
}

#[test]
fn test_start_traffic_with_empty_lanes() {
    let records = vec![json!({"pattern": [1, 2]}), json!({"kernel": "gather", "pattern": []})];
    let config = OrchestratorConfig::new(3);
    let mut orchestrator = TraceOrchestrator::from_records(&config, records, recording).unwrap();

    assert_eq!(orchestrator.start_traffic().unwrap(), 0);
    for lane in orchestrator.lanes() {
        assert!(lane.generator().calls().is_empty());
    }
    assert_eq!(orchestrator.skipped().len(), 2);
}

#[test]
fn test_partition_too_fine_aborts_setup() {
    let records = vec![
        json!({"kernel": "gather", "pattern": [0, 1, 2, 3]}),
        json!({"kernel": "gather", "pattern": [0, 1]}),
    ];
    let config = OrchestratorConfig::new(4);

    match TraceOrchestrator::from_records(&config, records, recording) {
        Err(OrchestratorError::Partition { index, source }) => {
            assert_eq!(index, 1);
            assert_eq!(source, PartitionError::TooFine { len: 2, lanes: 4 });
        }
        other => panic!("expected partition error, got {:?}", other.map(|o| o.kernels_scheduled())),
    }
}

#[test]
fn test_missing_trace_file() {
    let config = OrchestratorConfig::new(2);
    let result =
        TraceOrchestrator::from_trace_file(&config, "/nonexistent/kernels.json", recording);
    assert!(matches!(result, Err(OrchestratorError::TraceRead { .. })));
}

#[test]
fn test_zero_lanes_rejected() {
    let config = OrchestratorConfig::new(0);
    let result = TraceOrchestrator::from_records(&config, Vec::new(), recording);
    assert!(matches!(result, Err(OrchestratorError::NoLanes)));
}

#[test]
fn test_lanes_share_configuration() {
    let config = OrchestratorConfig::new(4).with_clock("4GHz");
    let orchestrator = TraceOrchestrator::from_records(&config, Vec::new(), recording).unwrap();

    assert_eq!(orchestrator.num_lanes(), 4);
    assert_eq!(orchestrator.clock(), Some("4GHz"));
    for (i, lane) in orchestrator.lanes().iter().enumerate() {
        assert_eq!(lane.lane(), i);
        assert_eq!(lane.addressing(), &config.addressing);
        assert_eq!(lane.generator_config(), &config.generator);
        assert_eq!(lane.clock(), Some("4GHz"));
    }
}

#[test]
fn test_generator_factory_receives_lane_setup() {
    let generator = GeneratorConfig {
        request_buffer_size: 64,
        send_bandwidth: 1,
        ..Default::default()
    };
    let addressing = AddressConfig {
        base_index_addr: 0x100,
        base_value_addr: 0x8000_0000,
        index_size: 8,
        value_size: 4,
    };
    let mut config = OrchestratorConfig::new(3)
        .with_addressing(addressing)
        .with_clock("4GHz");
    config.generator = generator;

    let mut received: Vec<LaneSetup> = Vec::new();
    let _orchestrator = TraceOrchestrator::from_records(&config, Vec::new(), |setup| {
        received.push(setup.clone());
        RecordingGenerator::new(setup)
    })
    .unwrap();

    let lanes: Vec<usize> = received.iter().map(|s| s.lane).collect();
    assert_eq!(lanes, vec![0, 1, 2]);
    for setup in &received {
        assert_eq!(setup.generator, config.generator);
        assert_eq!(setup.addressing, config.addressing);
        assert_eq!(setup.clock, config.clock);
    }
}

#[test]
fn test_generators_keep_their_setup() {
    let config = OrchestratorConfig::new(2).with_clock("2GHz");
    let orchestrator = TraceOrchestrator::from_records(&config, Vec::new(), recording).unwrap();

    for (lane, generator) in orchestrator.into_generators().iter().enumerate() {
        assert_eq!(generator.setup().lane, lane);
        assert_eq!(generator.setup().clock.as_deref(), Some("2GHz"));
        assert_eq!(generator.setup().generator.request_buffer_size, 32);
    }
}
