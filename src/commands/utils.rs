use crate::utils::config::SCHEMA_VERSION;

/// Display schedule schema information
pub fn display_schema(show_details: bool) {
    println!("Spatter Gen Schedule Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schedule Structure:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  trace_file: string        - Trace file the schedule was built from");
        println!("  config: object            - Lane, addressing and generator parameters");
        println!("  kernels_total: number     - Records in the trace file");
        println!("  kernels_scheduled: number - Records queued on the lanes");
        println!("  skipped: array            - Rejected records");
        println!("    index: number           - Record position in the trace");
        println!("    error: string           - Reason for rejection");
        println!("  lanes: array              - Per-lane registration calls");
        println!("    lane: number            - Lane index");
        println!("    setup: object           - Hardware block, addressing and clock the generator was built with");
        println!("    calls: array            - Calls in issue order");
        println!("      id: number            - Kernel record index");
        println!("      delta: number         - Stride per repetition");
        println!("      count: number         - Repetitions");
        println!("      type_code: number     - 0 = gather, 1 = scatter");
        println!("      trace: array          - This lane's indices");
        println!("  generated_at: string      - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Spatter Gen v{}", env!("CARGO_PKG_VERSION"));
    println!("Schedule Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Gather/scatter trace ingestion and per-lane kernel scheduling.");
}
