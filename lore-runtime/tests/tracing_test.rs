use lore_runtime::tracing_setup::{init_tracing, init_tracing_with_filter};

#[test]
fn both_initializers_can_run_in_one_process() {
    init_tracing_with_filter("warn");
    init_tracing();
    init_tracing_with_filter("debug");
    init_tracing();
    tracing::info!("still logging after repeated init");
}
