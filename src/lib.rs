//! Arbitrary-precision decimal arithmetic with repeating-decimal
//! detection.
//!
//! A [`BigDec`] is a signed decimal number of unbounded integer and
//! fractional length, stored as a digit-per-byte buffer plus a
//! decimal-point position. The crate implements the four elementary
//! operations, integer division with remainder, rounding, truncation,
//! comparison and string parsing/formatting. Division detects purely
//! periodic and mixed-periodic repetends and reports the repetend
//! length for bracket formatting.
//!
//! Values are created from literals or machine integers:
//!
//! ```
//! use bigdec::BigDec;
//!
//! let n1: BigDec = "7.005".parse().unwrap();
//! let n2 = BigDec::from(4);
//! let n3 = BigDec::new(); // zero
//! # let _ = (n1, n2, n3);
//! ```
//!
//! Arithmetic methods write into the receiver and return it for
//! chaining:
//!
//! ```
//! use bigdec::BigDec;
//!
//! let n1: BigDec = "7.005".parse().unwrap();
//! let n2 = BigDec::from(4);
//! let mut n3 = BigDec::new();
//! n3.add(&n1, &n2);
//! assert_eq!(n3.to_string(), "11.005");
//! ```
//!
//! Division reports repeating decimals, which the formatter can bracket:
//!
//! ```
//! use bigdec::{BigDec, DivOptions, FormatOptions};
//!
//! let a = BigDec::from(100);
//! let b: BigDec = "-0.7".parse().unwrap();
//! let mut q = BigDec::new();
//! let repetend = q.div(&a, &b, DivOptions::default()).unwrap();
//! assert_eq!(q.format(repetend, &FormatOptions::default()), "-142.(857142)");
//! ```
//!
//! Integer division keeps the remainder:
//!
//! ```
//! use bigdec::BigDec;
//!
//! let a = BigDec::from(23);
//! let b = BigDec::from(-11);
//! let mut q = BigDec::new();
//! let r = q.div_rem(&a, &b).unwrap();
//! assert_eq!((q.to_string(), r.to_string()), ("-2".to_string(), "1".to_string()));
//! ```

mod analyze;
mod bigdec;
mod div;
mod format;

pub use analyze::{ParseError, ParseErrorKind};
pub use bigdec::BigDec;
pub use div::DivOptions;
pub use format::FormatOptions;

use core::fmt;

/// Error type for decimal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    /// The input is not a valid decimal literal.
    Parse(ParseError),
    /// Division by zero.
    DivisionByZero,
    /// A negative decimal-place count where a non-negative one is
    /// required.
    InvalidDecimalPlaces,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::Parse(e) => write!(f, "{}", e),
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::InvalidDecimalPlaces => {
                write!(f, "decimal places must be 0 or positive")
            }
        }
    }
}

impl std::error::Error for DecimalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecimalError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for DecimalError {
    fn from(e: ParseError) -> Self {
        DecimalError::Parse(e)
    }
}

/// Alias for a `Result` with the error type [`DecimalError`].
pub type Result<T> = core::result::Result<T, DecimalError>;
