#![no_main]
use footprint_score::model::Platform;
use libfuzzer_sys::fuzz_target;

/// Fuzz payload normalization.
///
/// Any JSON document is fed to every platform's normalizer, which must
/// either produce a profile or reject it, never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        for platform in Platform::all() {
            let _ = footprint_score::normalize::normalize(*platform, &value);
        }
    }
});
