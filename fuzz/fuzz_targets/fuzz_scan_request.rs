#![no_main]
use footprint_score::{EngineConfig, ScanOrchestrator, ScanRequest};
use libfuzzer_sys::fuzz_target;
use std::sync::LazyLock;

static ORCHESTRATOR: LazyLock<ScanOrchestrator> = LazyLock::new(|| {
    ScanOrchestrator::new(EngineConfig::default()).expect("default tables are valid")
});

/// Fuzz request parsing and the full scan path.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(request) = ScanRequest::from_json(s) {
            let scan = ORCHESTRATOR.run(&request, chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);
            assert!(scan.scores.overall <= 100);
        }
    }
});
