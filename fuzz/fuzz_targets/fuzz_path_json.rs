#![no_main]

use libfuzzer_sys::fuzz_target;
use path_speed_planner::app::parse_path;
use path_speed_planner::{calculate, PathConfig};

/// Koordinaten jenseits davon erzeugen beliebig viele Ausgabepunkte.
const MAX_COORDINATE: f64 = 1.0e4;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(path) = parse_path(json) else {
        return;
    };
    let bounded = path.segments.iter().all(|segment| {
        segment
            .control_positions()
            .iter()
            .all(|p| p.abs().max_element() <= MAX_COORDINATE)
    });
    if !bounded {
        return;
    }

    let result = calculate(&path, &PathConfig::default());
    assert_eq!(result.segment_indexes.len(), path.segment_count());
});
