#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use shared::{FuzzPrefix, FuzzQuantity, ohm_with};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct FuzzData {
    quantity: FuzzQuantity,
    chain: Vec<FuzzPrefix>,
}

fuzz_target!(|data: FuzzData| {
    let original = data.quantity.quantity;

    let mut current = original.clone();
    for prefix in data.chain {
        current = current
            .to(&ohm_with(Some(prefix)))
            .expect("prefixed units have the same dimension");
    }

    let back = current
        .to(original.unit())
        .expect("prefixed units have the same dimension");

    assert_eq!(back, original, "round trip through prefixes changed the magnitude");
});
