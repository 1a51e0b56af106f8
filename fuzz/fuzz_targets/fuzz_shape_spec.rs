#![no_main]

use libfuzzer_sys::fuzz_target;
use solid_shapes::{Shape, ShapeSpec};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must never panic; accepted specs must build a shape
        if let Ok(spec) = input.parse::<ShapeSpec>() {
            let _ = spec.to_shape().area();
            let _ = spec.to_string().parse::<ShapeSpec>();
        }
    }
});
