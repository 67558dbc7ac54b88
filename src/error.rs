//! Error types. Floating-point exceptions are data, not errors; the only
//! failures are the C environment refusing a request and writing the report.

use core::ffi::c_int;

use thiserror::Error;

/// A call into the C floating-point environment returned a non-zero status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{call} failed with status {status}")]
pub struct FenvError {
    /// Name of the C function that failed.
    pub call: &'static str,
    /// The raw return value.
    pub status: c_int,
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("floating-point environment: {0}")]
    Fenv(#[from] FenvError),
    #[error("writing report: {0}")]
    Io(#[from] std::io::Error),
}

#[test]
fn test_error_messages() {
    let err = FenvError {
        call: "feclearexcept",
        status: -1,
    };
    assert_eq!(err.to_string(), "feclearexcept failed with status -1");

    let err = ProbeError::from(err);
    assert!(matches!(err, ProbeError::Fenv(_)));
    assert_eq!(
        err.to_string(),
        "floating-point environment: feclearexcept failed with status -1"
    );

    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
    let err = ProbeError::from(io);
    assert!(err.to_string().starts_with("writing report: "));
}
