//! The expression prober: evaluate `(1 + 1/n)^n` on a clean floating-point
//! environment and record what the evaluation raised.

use core::hint::black_box;

use tracing::debug;

use super::class::{classify, Classification};
use super::error::FenvError;
use super::fenv::{self, ExceptionFlags};

/// The outcome of probing a single input.
#[derive(Debug, Clone, Copy)]
pub struct ProbeResult {
    /// The value of `n`.
    pub input: f32,
    /// The value of `(1 + 1/n)^n`.
    pub output: f32,
    /// The exceptions raised while computing `output`.
    pub exceptions: ExceptionFlags,
    /// The category of `output`.
    pub class: Classification,
}

impl ProbeResult {
    /// Returns true if the two results carry the same observation. Output
    /// values are compared bitwise so that NaN results compare equal.
    pub fn same_observation(&self, other: &ProbeResult) -> bool {
        self.input.to_bits() == other.input.to_bits()
            && self.output.to_bits() == other.output.to_bits()
            && self.exceptions == other.exceptions
            && self.class == other.class
    }
}

/// Computes `(1 + 1/n)^n` in single precision. `powf` is the C library's
/// single precision power function, not a promoted double computation.
pub fn expression(n: f32) -> f32 {
    (1.0 + 1.0 / n).powf(n)
}

/// Clear the exception flags, evaluate the expression for `n`, and collect
/// the flags and the classification of the result.
///
/// The input and output are routed through `black_box` so that the compiler
/// can neither fold the computation at build time nor move it across the
/// calls that clear and read the flag register.
pub fn probe(n: f32) -> Result<ProbeResult, FenvError> {
    fenv::clear_exceptions()?;
    let output = black_box(expression(black_box(n)));
    let exceptions = fenv::test_exceptions();

    let class = classify(output);
    debug!(input = n, output, ?exceptions, ?class, "probed");
    Ok(ProbeResult {
        input: n,
        output,
        exceptions,
        class,
    })
}

#[cfg(test)]
use super::fenv::Exception;

#[test]
fn test_probe_one() {
    let res = probe(1.0).unwrap();
    assert_eq!(res.output, 2.0);
    assert_eq!(res.class, Classification::Normal);
    // Only inexact may be raised by the power function internals.
    let allowed: ExceptionFlags = [Exception::Inexact].into_iter().collect();
    assert!(res.exceptions.is_subset(&allowed), "{:?}", res.exceptions);
}

#[test]
fn test_probe_zero() {
    // 1/0 is +inf, and pow(inf, 0) is exactly one.
    let res = probe(0.0).unwrap();
    assert_eq!(res.output, 1.0);
    assert_eq!(res.class, Classification::Normal);
    if fenv::is_supported() {
        assert!(res.exceptions.contains(Exception::DivByZero));
    }
}

#[test]
fn test_probe_infinity() {
    // 1/inf is zero, so the base collapses to exactly one, and pow(1, y) is
    // one for every y.
    let res = probe(f32::INFINITY).unwrap();
    assert_eq!(res.output, 1.0);
    assert_eq!(res.class, Classification::Normal);
    assert!(!res.exceptions.contains(Exception::DivByZero));
    assert!(!res.exceptions.contains(Exception::Invalid));
}

#[test]
fn test_probe_approaches_e() {
    let res = probe(10000.0).unwrap();
    assert!(res.output > 2.70 && res.output < 2.73, "{}", res.output);
    assert_eq!(res.class, Classification::Normal);
    if fenv::is_supported() {
        // 1/10000 is not representable.
        assert!(res.exceptions.contains(Exception::Inexact));
    }

    // Past 2^24 the term 1/n is below half an ulp of one.
    let res = probe(1.0e8).unwrap();
    assert_eq!(res.output, 1.0);
}

#[test]
fn test_probe_negative_and_nan() {
    // (1 + 1/-0.5)^-0.5 = (-1)^-0.5, which has no real value.
    let res = probe(-0.5).unwrap();
    assert_eq!(res.class, Classification::NaN);
    if fenv::is_supported() {
        assert!(res.exceptions.contains(Exception::Invalid));
    }

    let res = probe(f32::NAN).unwrap();
    assert_eq!(res.class, Classification::NaN);
}

#[test]
fn test_probe_is_idempotent() {
    use super::utils;

    for n in utils::get_special_test_values() {
        let first = probe(n).unwrap();
        let second = probe(n).unwrap();
        assert!(first.same_observation(&second), "n = {}", n);
    }
}

#[test]
fn test_flags_do_not_leak() {
    // n = 0 raises divide-by-zero; the next probe must not see it.
    let dirty = probe(0.0).unwrap();
    let clean = probe(1.0).unwrap();
    assert!(!clean.exceptions.contains(Exception::DivByZero));
    if fenv::is_supported() {
        assert!(dirty.exceptions.contains(Exception::DivByZero));
    }

    // Residue raised outside of a probe is cleared too.
    black_box(black_box(0.0f32) / black_box(0.0f32));
    let after = probe(1.0).unwrap();
    assert!(!after.exceptions.contains(Exception::Invalid));
    assert!(after.same_observation(&clean));
}

#[cfg(test)]
mod prop {
    use super::*;
    use proptest::prelude::*;

    fn any_input() -> impl Strategy<Value = f32> {
        prop_oneof![
            proptest::num::f32::ANY,
            Just(0.0f32),
            Just(f32::INFINITY),
            Just(f32::NEG_INFINITY),
            Just(f32::NAN),
        ]
    }

    proptest! {
        #[test]
        fn probe_twice_is_identical(n in any_input()) {
            let first = probe(n).unwrap();
            let second = probe(n).unwrap();
            prop_assert!(first.same_observation(&second));
        }

        #[test]
        fn flags_reflect_only_the_latest_probe(a in any_input(), b in any_input()) {
            let alone = probe(b).unwrap();
            probe(a).unwrap();
            let after = probe(b).unwrap();
            prop_assert!(alone.same_observation(&after));
        }

        #[test]
        fn class_matches_output(n in any_input()) {
            let res = probe(n).unwrap();
            prop_assert_eq!(res.class, classify(res.output));
            prop_assert_eq!(res.class == Classification::NaN, res.output.is_nan());
        }
    }
}
