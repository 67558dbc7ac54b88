//! This module renders probe results as text.

use core::fmt::{Display, Formatter, Result};

use super::class::Classification;
use super::probe::ProbeResult;

/// Formats a float the way C's `printf("%.*f")` does. Rust spells the
/// special values `inf` and `NaN`, while C prints `inf` and `nan` with an
/// optional sign.
pub struct Fixed(pub f32, pub usize);

impl Display for Fixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let Fixed(val, precision) = *self;
        let sign = if val.is_sign_negative() { "-" } else { "" };
        if val.is_nan() {
            write!(f, "{}nan", sign)
        } else if val.is_infinite() {
            write!(f, "{}inf", sign)
        } else {
            write!(f, "{:.*}", precision, val)
        }
    }
}

/// The printed form of one probe. Classification lines are only emitted when
/// `classify` is set and the result is not a normal number.
pub struct Report<'a> {
    pub result: &'a ProbeResult,
    pub classify: bool,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a ProbeResult, classify: bool) -> Self {
        Report { result, classify }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let res = self.result;
        writeln!(
            f,
            "Result with n={}: {}",
            Fixed(res.input, 1),
            Fixed(res.output, 6)
        )?;

        for e in res.exceptions.iter() {
            writeln!(f, "Exception {}", e)?;
        }

        if self.classify && !res.class.is_normal() {
            for c in Classification::REPORTED {
                if c == res.class {
                    writeln!(f, "Classification {}", c.as_str())?;
                }
            }
        }

        writeln!(f, "Done.")?;
        writeln!(f)
    }
}

#[cfg(test)]
use super::fenv::{Exception, ExceptionFlags};

#[cfg(test)]
fn make_result(input: f32, output: f32, flags: &[Exception]) -> ProbeResult {
    ProbeResult {
        input,
        output,
        exceptions: flags.iter().copied().collect(),
        class: super::class::classify(output),
    }
}

#[test]
fn test_fixed_matches_printf() {
    fn check(val: f32, precision: usize, expected: &str) {
        assert_eq!(Fixed(val, precision).to_string(), expected);
    }
    check(0.0, 1, "0.0");
    check(-0.0, 1, "-0.0");
    check(10000.0, 1, "10000.0");
    check(2.0, 6, "2.000000");
    check(core::f32::consts::E, 6, "2.718282");
    check(0.25, 6, "0.250000");
    check(f32::INFINITY, 1, "inf");
    check(f32::NEG_INFINITY, 6, "-inf");
    check(f32::NAN, 6, "nan");
    check(-f32::NAN, 6, "-nan");
}

#[test]
fn test_report_layout() {
    let res = make_result(0.0, 1.0, &[Exception::DivByZero]);
    let text = Report::new(&res, true).to_string();
    assert_eq!(
        text,
        "Result with n=0.0: 1.000000\nException FE_DIVBYZERO\nDone.\n\n"
    );

    let res = make_result(1.0, 2.0, &[]);
    let text = Report::new(&res, true).to_string();
    assert_eq!(text, "Result with n=1.0: 2.000000\nDone.\n\n");
}

#[test]
fn test_report_order() {
    // Flags come out in the fixed order even when inserted in reverse.
    let res = make_result(
        -0.5,
        f32::NAN,
        &[Exception::Underflow, Exception::Invalid, Exception::Inexact],
    );
    let text = Report::new(&res, true).to_string();
    assert_eq!(
        text,
        "Result with n=-0.5: nan\n\
         Exception FE_INEXACT\n\
         Exception FE_INVALID\n\
         Exception FE_UNDERFLOW\n\
         Classification FP_NAN\n\
         Done.\n\n"
    );
}

#[test]
fn test_report_classification_switch() {
    let res = ProbeResult {
        input: 3.0,
        output: f32::from_bits(1),
        exceptions: ExceptionFlags::empty(),
        class: Classification::Subnormal,
    };
    let with = Report::new(&res, true).to_string();
    assert!(with.contains("Classification FP_SUBNORMAL\n"));
    let without = Report::new(&res, false).to_string();
    assert!(!without.contains("Classification"));

    // Normal results never print a classification line.
    let res = make_result(100.0, 2.704811, &[Exception::Inexact]);
    let text = Report::new(&res, true).to_string();
    assert!(!text.contains("Classification"));
    assert!(text.ends_with("Exception FE_INEXACT\nDone.\n\n"));
}
