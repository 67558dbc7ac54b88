//! Access to the floating-point exception flags of the current thread.
//!
//! The flags live in the floating-point status register (MXCSR and the x87
//! status word on x86, FPSR on arm, fflags on riscv), which Rust's standard
//! library does not expose. We bind the C99 `<fenv.h>` functions from the
//! platform's libm instead. The `FE_*` bit values differ between platforms
//! and are not part of any ABI crate, so they are listed here for each
//! supported target. On any other target clearing is a no-op and no flags
//! are ever reported.

use core::ffi::c_int;
use core::fmt::Display;

use super::error::FenvError;

/// The exception flags defined by IEEE 754-2019 Section 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exception {
    DivByZero,
    Inexact,
    Invalid,
    Overflow,
    Underflow,
}

impl Exception {
    /// All exceptions, in print order.
    pub const ALL: [Exception; 5] = [
        Exception::DivByZero,
        Exception::Inexact,
        Exception::Invalid,
        Exception::Overflow,
        Exception::Underflow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exception::DivByZero => "FE_DIVBYZERO",
            Exception::Inexact => "FE_INEXACT",
            Exception::Invalid => "FE_INVALID",
            Exception::Overflow => "FE_OVERFLOW",
            Exception::Underflow => "FE_UNDERFLOW",
        }
    }

    // Bit in the portable encoding used by ExceptionFlags.
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl Display for Exception {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of exception flags. Iteration always follows `Exception::ALL`, no
/// matter in which order the flags were inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExceptionFlags {
    bits: u8,
}

impl ExceptionFlags {
    pub const fn empty() -> Self {
        ExceptionFlags { bits: 0 }
    }

    pub fn all() -> Self {
        Exception::ALL.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn contains(&self, e: Exception) -> bool {
        self.bits & e.bit() != 0
    }

    pub fn insert(&mut self, e: Exception) {
        self.bits |= e.bit();
    }

    /// Returns the number of flags in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if every flag in `self` is also in `other`.
    pub fn is_subset(&self, other: &ExceptionFlags) -> bool {
        self.bits & !other.bits == 0
    }

    /// Iterate over the raised flags in print order.
    pub fn iter(&self) -> impl Iterator<Item = Exception> + '_ {
        Exception::ALL.into_iter().filter(|e| self.contains(*e))
    }
}

impl FromIterator<Exception> for ExceptionFlags {
    fn from_iter<I: IntoIterator<Item = Exception>>(iter: I) -> Self {
        let mut flags = ExceptionFlags::empty();
        for e in iter {
            flags.insert(e);
        }
        flags
    }
}

/// Returns true if this target gives us access to the exception flags.
pub fn is_supported() -> bool {
    sys::SUPPORTED
}

/// Clear all pending exception flags of the current thread.
pub fn clear_exceptions() -> Result<(), FenvError> {
    sys::clear()
}

/// Returns the exception flags that are currently raised in this thread.
pub fn test_exceptions() -> ExceptionFlags {
    sys::test()
}

// <fenv.h> values of the Microsoft CRT. These are the same on every arch.
#[cfg(all(windows, target_env = "msvc"))]
mod bits {
    use super::{c_int, Exception};
    pub const NATIVE: [(Exception, c_int); 5] = [
        (Exception::Inexact, 0x01),
        (Exception::Underflow, 0x02),
        (Exception::Overflow, 0x04),
        (Exception::DivByZero, 0x08),
        (Exception::Invalid, 0x10),
    ];
}

// glibc, musl and Apple libm on x86. Bit 0x02 is the x87 denormal-operand
// flag, which is not an IEEE exception and is left out.
#[cfg(all(unix, any(target_arch = "x86", target_arch = "x86_64")))]
mod bits {
    use super::{c_int, Exception};
    pub const NATIVE: [(Exception, c_int); 5] = [
        (Exception::Invalid, 0x01),
        (Exception::DivByZero, 0x04),
        (Exception::Overflow, 0x08),
        (Exception::Underflow, 0x10),
        (Exception::Inexact, 0x20),
    ];
}

// FPSR cumulative flags on arm and aarch64.
#[cfg(all(unix, any(target_arch = "arm", target_arch = "aarch64")))]
mod bits {
    use super::{c_int, Exception};
    pub const NATIVE: [(Exception, c_int); 5] = [
        (Exception::Invalid, 0x01),
        (Exception::DivByZero, 0x02),
        (Exception::Overflow, 0x04),
        (Exception::Underflow, 0x08),
        (Exception::Inexact, 0x10),
    ];
}

// The fflags CSR.
#[cfg(all(unix, target_arch = "riscv64"))]
mod bits {
    use super::{c_int, Exception};
    pub const NATIVE: [(Exception, c_int); 5] = [
        (Exception::Inexact, 0x01),
        (Exception::Underflow, 0x02),
        (Exception::Overflow, 0x04),
        (Exception::DivByZero, 0x08),
        (Exception::Invalid, 0x10),
    ];
}

#[cfg(any(
    all(windows, target_env = "msvc"),
    all(
        unix,
        any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "arm",
            target_arch = "aarch64",
            target_arch = "riscv64"
        )
    )
))]
mod sys {
    use super::bits::NATIVE;
    use super::{c_int, ExceptionFlags, FenvError};

    pub const SUPPORTED: bool = true;

    // On glibc these live in libm, not libc.
    #[cfg_attr(all(unix, not(target_vendor = "apple")), link(name = "m"))]
    extern "C" {
        fn feclearexcept(excepts: c_int) -> c_int;
        fn fetestexcept(excepts: c_int) -> c_int;
    }

    fn all_native() -> c_int {
        NATIVE.iter().fold(0, |acc, (_, bit)| acc | bit)
    }

    fn decode(native: c_int) -> ExceptionFlags {
        NATIVE
            .iter()
            .filter(|(_, bit)| native & bit != 0)
            .map(|(e, _)| *e)
            .collect()
    }

    pub fn clear() -> Result<(), FenvError> {
        // SAFETY: feclearexcept only touches the status register of the
        // calling thread, and the mask contains only valid FE_* bits.
        let status = unsafe { feclearexcept(all_native()) };
        if status != 0 {
            return Err(FenvError {
                call: "feclearexcept",
                status,
            });
        }
        Ok(())
    }

    pub fn test() -> ExceptionFlags {
        // SAFETY: fetestexcept only reads the status register.
        decode(unsafe { fetestexcept(all_native()) })
    }

    #[test]
    fn test_native_bits_are_distinct() {
        let all = all_native();
        assert_eq!(all.count_ones(), 5);
        assert_eq!(decode(all), ExceptionFlags::all());
        assert!(decode(0).is_empty());
    }
}

#[cfg(not(any(
    all(windows, target_env = "msvc"),
    all(
        unix,
        any(
            target_arch = "x86",
            target_arch = "x86_64",
            target_arch = "arm",
            target_arch = "aarch64",
            target_arch = "riscv64"
        )
    )
)))]
mod sys {
    use super::{ExceptionFlags, FenvError};

    pub const SUPPORTED: bool = false;

    pub fn clear() -> Result<(), FenvError> {
        Ok(())
    }

    pub fn test() -> ExceptionFlags {
        ExceptionFlags::empty()
    }
}

#[test]
fn test_flag_set_order() {
    // Insert in reverse, iterate in print order.
    let mut flags = ExceptionFlags::empty();
    for e in Exception::ALL.iter().rev() {
        flags.insert(*e);
    }
    let order: Vec<Exception> = flags.iter().collect();
    assert_eq!(order, Exception::ALL);
    assert_eq!(flags, ExceptionFlags::all());
    assert_eq!(flags.len(), 5);

    let flags: ExceptionFlags =
        [Exception::Underflow, Exception::DivByZero].into_iter().collect();
    let names: Vec<&str> = flags.iter().map(|e| e.as_str()).collect();
    assert_eq!(names, ["FE_DIVBYZERO", "FE_UNDERFLOW"]);
    assert!(flags.contains(Exception::Underflow));
    assert!(!flags.contains(Exception::Inexact));
    assert!(flags.is_subset(&ExceptionFlags::all()));
    assert!(!ExceptionFlags::all().is_subset(&flags));
    assert!(ExceptionFlags::empty().is_subset(&flags));
}

#[test]
fn test_raise_and_clear() {
    use core::hint::black_box;

    if !is_supported() {
        assert!(clear_exceptions().is_ok());
        assert!(test_exceptions().is_empty());
        return;
    }

    // Run `op` on a clean register and return what it raised.
    fn raised(op: impl Fn() -> f32) -> ExceptionFlags {
        clear_exceptions().unwrap();
        black_box(op());
        test_exceptions()
    }

    let flags = raised(|| black_box(1.0f32) / black_box(0.0f32));
    assert_eq!(flags.iter().collect::<Vec<_>>(), [Exception::DivByZero]);

    let flags = raised(|| black_box(0.0f32) / black_box(0.0f32));
    assert_eq!(flags.iter().collect::<Vec<_>>(), [Exception::Invalid]);

    let flags = raised(|| black_box(1.0f32) / black_box(3.0f32));
    assert_eq!(flags.iter().collect::<Vec<_>>(), [Exception::Inexact]);

    let flags = raised(|| black_box(f32::MAX) * black_box(2.0f32));
    assert!(flags.contains(Exception::Overflow));
    assert!(flags.contains(Exception::Inexact));

    let flags = raised(|| black_box(f32::MIN_POSITIVE) * black_box(0.1f32));
    assert!(flags.contains(Exception::Underflow));

    // Exact arithmetic raises nothing.
    let flags = raised(|| black_box(1.5f32) + black_box(0.5f32));
    assert!(flags.is_empty());

    // Flags are sticky until cleared.
    clear_exceptions().unwrap();
    black_box(black_box(1.0f32) / black_box(0.0f32));
    black_box(black_box(1.0f32) + black_box(1.0f32));
    assert!(test_exceptions().contains(Exception::DivByZero));
    clear_exceptions().unwrap();
    assert!(test_exceptions().is_empty());
}
