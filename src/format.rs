//! Rendering values as strings, with optional repetend brackets.

use core::fmt;

use crate::BigDec;

/// Options for [`BigDec::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    force_sign: bool,
    repeating_start: String,
    repeating_end: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            force_sign: false,
            repeating_start: "(".to_string(),
            repeating_end: ")".to_string(),
        }
    }
}

impl FormatOptions {
    /// Emits a `+` prefix for non-zero positive values.
    pub fn with_force_sign(mut self, force_sign: bool) -> Self {
        self.force_sign = force_sign;
        self
    }

    /// Markers placed before and after the repetend (default `(` and
    /// `)`); either may be empty.
    pub fn with_repeating_markers(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.repeating_start = start.into();
        self.repeating_end = end.into();
        self
    }
}

fn digit_str(digits: &[u8]) -> &str {
    // Digit buffers hold ASCII '0'..='9' bytes only.
    core::str::from_utf8(digits).unwrap()
}

impl BigDec {
    /// Formats the value, bracketing the trailing `repetend_len`
    /// fractional digits with the configured markers.
    ///
    /// A `repetend_len` of 0 renders plainly; [`BigDec::div`] returns
    /// the length to pass here.
    ///
    /// ```
    /// use bigdec::{BigDec, DivOptions, FormatOptions};
    ///
    /// let mut q = BigDec::new();
    /// let rep = q
    ///     .div(&BigDec::from(-1), &BigDec::from(70), DivOptions::default())
    ///     .unwrap();
    /// let options = FormatOptions::default().with_repeating_markers("r", "");
    /// assert_eq!(q.format(rep, &options), "-0.0r142857");
    /// ```
    pub fn format(&self, repetend_len: usize, options: &FormatOptions) -> String {
        let a = &self.analysis;
        let int_len = self.int_len();

        let mut out = String::with_capacity(
            a.digits.len()
                + 2
                + options.repeating_start.len()
                + options.repeating_end.len(),
        );

        if a.sign == -1 {
            out.push('-');
        } else if options.force_sign && !self.is_zero() {
            out.push('+');
        }

        out.push_str(digit_str(&a.digits[..int_len]));

        if a.decimals > 0 {
            out.push('.');
            let frac = &a.digits[int_len..];
            if repetend_len > 0 && repetend_len <= a.decimals {
                let split = a.decimals - repetend_len;
                out.push_str(digit_str(&frac[..split]));
                out.push_str(&options.repeating_start);
                out.push_str(digit_str(&frac[split..]));
                out.push_str(&options.repeating_end);
            } else {
                out.push_str(digit_str(frac));
            }
        }

        out
    }
}

impl fmt::Display for BigDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_len = self.int_len();
        if self.analysis.sign == -1 {
            f.write_str("-")?;
        }
        f.write_str(digit_str(&self.analysis.digits[..int_len]))?;
        if self.analysis.decimals > 0 {
            f.write_str(".")?;
            f.write_str(digit_str(&self.analysis.digits[int_len..]))?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // {:#?} shows the raw analysis record
            f.debug_struct("BigDec")
                .field("digits", &digit_str(&self.analysis.digits))
                .field("sign", &self.analysis.sign)
                .field("decimals", &self.analysis.decimals)
                .finish()
        } else {
            write!(f, "BigDec({})", self)
        }
    }
}
