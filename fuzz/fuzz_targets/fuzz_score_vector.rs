#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the full parse → populate → compute chain.
///
/// Any vector that scores must produce every field within [0, 10].
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(scored) = cvss_scorer::score_vector(s) {
            let r = scored.result;
            for value in [
                r.impact_subscore_base,
                r.impact_subscore,
                r.exploitability,
                r.base_score,
                r.temporal_score,
                r.modified_impact_subscore,
                r.modified_impact,
                r.modified_exploitability,
                r.environmental_score,
                r.overall_score,
            ] {
                assert!((0.0..=10.0).contains(&value), "{s}: {value}");
            }
        }
    }
});
