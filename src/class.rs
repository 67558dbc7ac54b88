//! Classification of single-precision values.

use super::utils::mask;

/// Number of bits in the exponent of an IEEE-754 binary32 value.
const EXPONENT: usize = 8;
/// Number of explicitly stored mantissa bits of a binary32 value.
const MANTISSA: usize = 23;

/// Declare the different categories of a floating point number, following
/// the C `fpclassify` categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Normal,
    NaN,
    Infinite,
    Zero,
    Subnormal,
}

impl Classification {
    /// The categories that are reported for a result, in print order. Normal
    /// results are not reported.
    pub const REPORTED: [Classification; 4] = [
        Classification::NaN,
        Classification::Infinite,
        Classification::Zero,
        Classification::Subnormal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Normal => "FP_NORMAL",
            Classification::NaN => "FP_NAN",
            Classification::Infinite => "FP_INFINITE",
            Classification::Zero => "FP_ZERO",
            Classification::Subnormal => "FP_SUBNORMAL",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Classification::Normal)
    }
}

/// Classify `val` by decoding its bit pattern. This does not touch the
/// floating-point environment, so it never raises or clears flags.
pub fn classify(val: f32) -> Classification {
    let bits = val.to_bits();
    // Extract the biased exponent (wipe the sign and mantissa).
    let biased_exp = (bits >> MANTISSA) & mask(EXPONENT);
    // Wipe the sign and exponent.
    let mantissa = bits & mask(MANTISSA);

    match (biased_exp, mantissa) {
        (0, 0) => Classification::Zero,
        (0, _) => Classification::Subnormal,
        (e, 0) if e == mask(EXPONENT) => Classification::Infinite,
        (e, _) if e == mask(EXPONENT) => Classification::NaN,
        _ => Classification::Normal,
    }
}

#[test]
fn test_classify_special_values() {
    assert_eq!(classify(0.0), Classification::Zero);
    assert_eq!(classify(-0.0), Classification::Zero);
    assert_eq!(classify(1.0), Classification::Normal);
    assert_eq!(classify(f32::MIN_POSITIVE), Classification::Normal);
    assert_eq!(classify(f32::MIN_POSITIVE / 2.), Classification::Subnormal);
    assert_eq!(classify(f32::from_bits(1)), Classification::Subnormal);
    assert_eq!(classify(f32::MAX), Classification::Normal);
    assert_eq!(classify(f32::INFINITY), Classification::Infinite);
    assert_eq!(classify(f32::NEG_INFINITY), Classification::Infinite);
    assert_eq!(classify(f32::NAN), Classification::NaN);
    assert_eq!(classify(-f32::NAN), Classification::NaN);
}

#[test]
fn test_classify_matches_native() {
    use super::utils;
    use core::num::FpCategory;

    fn check(val: f32) {
        let expected = match val.classify() {
            FpCategory::Nan => Classification::NaN,
            FpCategory::Infinite => Classification::Infinite,
            FpCategory::Zero => Classification::Zero,
            FpCategory::Subnormal => Classification::Subnormal,
            FpCategory::Normal => Classification::Normal,
        };
        assert_eq!(classify(val), expected, "bits {:#010x}", val.to_bits());
    }

    for val in utils::get_special_test_values() {
        check(val);
    }

    // Try a bunch of random bit patterns, including NaN payloads.
    let mut lfsr = utils::Lfsr::new();
    for _ in 0..5000 {
        check(f32::from_bits(lfsr.get()));
    }
}

#[test]
fn test_reported_order() {
    let names: Vec<&str> =
        Classification::REPORTED.iter().map(|c| c.as_str()).collect();
    assert_eq!(names, ["FP_NAN", "FP_INFINITE", "FP_ZERO", "FP_SUBNORMAL"]);
    assert!(!Classification::REPORTED.contains(&Classification::Normal));
}
