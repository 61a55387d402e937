#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use shared::FuzzQuantity;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct FuzzData {
    lhs: FuzzQuantity,
    rhs: FuzzQuantity,
}

fuzz_target!(|data: FuzzData| {
    let lhs = data.lhs.quantity;
    let rhs = data.rhs.quantity;

    let forward = lhs.checked_add(&rhs).expect("same dimension");
    let backward = rhs.checked_add(&lhs).expect("same dimension");

    assert_eq!(forward, backward, "addition is not commutative");
    assert!(forward.is_integral(), "sum of integral quantities is not integral");
    assert!(
        forward.unit() == lhs.unit() || forward.unit() == rhs.unit(),
        "sum is not in one of the operand units"
    );
});
