#![no_main]

use camelspace_core::transform::{camel_space, check_growth};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let name: String = input.chars().take(255).collect();

    let spaced = camel_space(&name);
    check_growth(&name, &spaced).expect("transform output exceeded growth bound");
    assert_eq!(camel_space(&spaced), spaced, "transform is not idempotent");
});
