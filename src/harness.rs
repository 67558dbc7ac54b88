//! The driver: probe a fixed list of samples and print a report for each.

use std::io::Write;

use tracing::{info, warn};

use super::error::ProbeError;
use super::probe::probe;
use super::report::Report;

const EXCEPTION_SAMPLES: [f32; 5] = [0.0, 1.0, 100.0, 10000.0, f32::INFINITY];

const CLASSIFY_SAMPLES: [f32; 7] =
    [0.0, 1.0, 10.0, 100.0, 1000.0, 10000.0, f32::INFINITY];

/// The two flavors of the demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Report exception flags only.
    ExceptionsOnly,
    /// Report exception flags and the category of non-normal results.
    WithClassification,
}

impl Variant {
    /// The inputs that are probed, in order.
    pub fn samples(&self) -> &'static [f32] {
        match self {
            Variant::ExceptionsOnly => &EXCEPTION_SAMPLES,
            Variant::WithClassification => &CLASSIFY_SAMPLES,
        }
    }

    pub fn classifies(&self) -> bool {
        matches!(self, Variant::WithClassification)
    }
}

/// Probe every sample of `variant` in sequence and write the reports to
/// `out`.
pub fn run<W: Write>(variant: Variant, out: &mut W) -> Result<(), ProbeError> {
    if !super::fenv::is_supported() {
        warn!("exception flags are not available on this target");
    }
    info!(?variant, samples = variant.samples().len(), "probing");

    for &n in variant.samples() {
        let res = probe(n)?;
        write!(out, "{}", Report::new(&res, variant.classifies()))?;
    }
    out.flush()?;
    Ok(())
}

#[test]
fn test_samples() {
    let a = Variant::ExceptionsOnly.samples();
    assert_eq!(a, [0.0, 1.0, 100.0, 10000.0, f32::INFINITY]);
    assert!(!Variant::ExceptionsOnly.classifies());

    let b = Variant::WithClassification.samples();
    assert_eq!(b.len(), 7);
    assert_eq!(b[0], 0.0);
    assert!(b[6].is_infinite());
    assert!(Variant::WithClassification.classifies());
}

#[test]
fn test_run_writes_one_block_per_sample() {
    for variant in [Variant::ExceptionsOnly, Variant::WithClassification] {
        let mut out = Vec::new();
        run(variant, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Done.\n\n").count(), variant.samples().len());
        let results = text.lines().filter(|l| l.starts_with("Result"));
        assert_eq!(results.count(), variant.samples().len());
    }
}
