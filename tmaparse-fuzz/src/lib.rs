//! Fuzzing entry points for tmaparse-core parsers
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_launch_params

use serde_json::Value;

/// Bytes as a query string, then as a JSON document if they decode as one
fn inputs(data: &[u8]) -> Vec<Value> {
    let text = String::from_utf8_lossy(data).into_owned();
    let mut values = Vec::with_capacity(2);
    if let Ok(json) = serde_json::from_str::<Value>(&text) {
        values.push(json);
    }
    values.push(Value::String(text));
    values
}

pub fn fuzz_init_data(data: &[u8]) {
    use tmaparse_core::init_data;

    // Parsing must fail cleanly, never panic
    for value in inputs(data) {
        let _ = init_data::parse(value);
    }
    let _ = init_data::parse(String::from_utf8_lossy(data).as_ref());
}

pub fn fuzz_launch_params(data: &[u8]) {
    use tmaparse_core::launch_params;

    for value in inputs(data) {
        let _ = launch_params::parse(value);
    }
    let text = String::from_utf8_lossy(data);
    let _ = launch_params::parse(text.as_ref());
    let _ = launch_params::parse_url(&text);
}

pub fn fuzz_theme_params(data: &[u8]) {
    use tmaparse_core::theme_params;

    for value in inputs(data) {
        let _ = theme_params::parse(value);
    }
}

pub fn fuzz_rgb(data: &[u8]) {
    let _ = String::from_utf8_lossy(data).parse::<tmaparse_core::Rgb>();
}
