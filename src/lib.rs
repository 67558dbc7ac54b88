//! Observe the floating-point exceptions raised while computing
//! `(1 + 1/n)^n` in single precision, and the category of the result.

mod class;
mod error;
mod fenv;
mod harness;
mod probe;
mod report;
mod utils;

pub use self::class::{classify, Classification};
pub use self::error::{FenvError, ProbeError};
pub use self::fenv::{
    clear_exceptions, is_supported, test_exceptions, Exception, ExceptionFlags,
};
pub use self::harness::{run, Variant};
pub use self::probe::{expression, probe, ProbeResult};
pub use self::report::{Fixed, Report};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr logger for the demonstration binaries. Stdout carries
/// only the report. The level defaults to `warn` and follows `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
