use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};
use measura_builtins::{prefixes, units};
use measura_quantity::BigQuantity;
use measura_unit::{BigInt, Prefix, Unit};

/// One of the metric prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzPrefix(pub Prefix);

impl<'a> Arbitrary<'a> for FuzzPrefix {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let all = prefixes::metric_prefixes().collect::<Vec<_>>();
        let prefix = u.choose(&all)?;
        Ok(Self(*prefix))
    }
}

/// An ohm quantity with a prefixed unit and an arbitrarily large
/// magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzQuantity {
    pub prefix: Option<FuzzPrefix>,
    pub quantity: BigQuantity,
}

impl<'a> Arbitrary<'a> for FuzzQuantity {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let magnitude = BigInt::from_signed_bytes_le(&Vec::<u8>::arbitrary(u)?);
        let prefix = Option::<FuzzPrefix>::arbitrary(u)?;

        Ok(Self {
            prefix,
            quantity: BigQuantity::new(magnitude, ohm_with(prefix)),
        })
    }
}

/// The ohm, with the prefix applied if there is one.
pub fn ohm_with(prefix: Option<FuzzPrefix>) -> Unit {
    match prefix {
        Some(FuzzPrefix(prefix)) => units::ohm().prefix(&prefix),
        None => units::ohm(),
    }
}
