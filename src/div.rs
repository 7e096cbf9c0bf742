//! Long division with repeating-decimal detection.
//!
//! The engine serves [`BigDec::div`] and [`BigDec::div_rem`]. Both
//! operands are first scaled to integers by a common power of ten, then
//! schoolbook division produces quotient digits while a map of running
//! remainders watches for a cycle. The loop stops on an exact
//! remainder, on a detected cycle, on the configured decimal budget, or
//! on the safety cap.

use core::cmp::Ordering;
use core::ops::Div;
use std::collections::HashMap;

use crate::analyze::Analysis;
use crate::{BigDec, DecimalError};

/// Options for [`BigDec::div`].
///
/// The default requests automatic precision: the division runs until it
/// terminates or a repetend is found, bounded by the safety cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivOptions {
    decimal_places: i32,
    max_decimal_places: usize,
}

impl Default for DivOptions {
    fn default() -> Self {
        DivOptions {
            decimal_places: -1,
            max_decimal_places: 10_000,
        }
    }
}

impl DivOptions {
    /// Fixes the number of fractional digits in the quotient; the
    /// engine rounds half-up to this length. `-1` restores automatic
    /// precision.
    pub fn with_decimal_places(mut self, decimal_places: i32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Caps the number of computed fractional digits (default 10 000).
    /// Effective for quotients whose repetend is impractically long.
    pub fn with_max_decimal_places(mut self, max_decimal_places: usize) -> Self {
        self.max_decimal_places = max_decimal_places;
        self
    }
}

/// Builds an unsigned integer value from raw quotient digits.
fn integer_from_digits(digits: Vec<u8>) -> BigDec {
    BigDec {
        analysis: Analysis {
            digits,
            sign: 1,
            decimals: 0,
        },
    }
}

/// Native value of a short ASCII digit prefix (at most 6 digits here).
fn digits_to_i64(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0, |acc, &d| acc * 10 + i64::from(d - b'0'))
}

impl BigDec {
    /// Divides `a / b` into the receiver and returns the repetend
    /// length: the number of trailing fractional digits that repeat
    /// forever, or 0 when the expansion terminates or a fixed
    /// `decimal_places` was requested.
    ///
    /// ```
    /// use bigdec::{BigDec, DivOptions, FormatOptions};
    ///
    /// let mut q = BigDec::new();
    /// let rep = q
    ///     .div(&BigDec::from(1), &BigDec::from(70), DivOptions::default())
    ///     .unwrap();
    /// assert_eq!(q.format(rep, &FormatOptions::default()), "0.0(142857)");
    /// ```
    ///
    /// No remainder is surfaced here; when one is needed use
    /// [`BigDec::div_rem`].
    ///
    /// # Errors
    ///
    /// [`DecimalError::DivisionByZero`] when `b` is zero; the receiver
    /// is left unchanged.
    pub fn div(&mut self, a: &BigDec, b: &BigDec, options: DivOptions) -> crate::Result<usize> {
        let (repetend, _) = self.div_impl(a, b, false, options)?;
        Ok(repetend)
    }

    /// Integer division with remainder: the quotient lands in the
    /// receiver and the remainder is returned.
    ///
    /// The quotient carries the sign product of the operands; the
    /// remainder is always non-negative and is scaled back to the
    /// operands' decimal places:
    ///
    /// ```
    /// use bigdec::BigDec;
    ///
    /// let a: BigDec = "-18".parse().unwrap();
    /// let b: BigDec = "7.2".parse().unwrap();
    /// let mut q = BigDec::new();
    /// let r = q.div_rem(&a, &b).unwrap();
    /// assert_eq!(q.to_string(), "-2");
    /// assert_eq!(r.to_string(), "3.6");
    /// ```
    ///
    /// # Errors
    ///
    /// [`DecimalError::DivisionByZero`] when `b` is zero; the receiver
    /// is left unchanged.
    pub fn div_rem(&mut self, a: &BigDec, b: &BigDec) -> crate::Result<BigDec> {
        let options = DivOptions::default().with_decimal_places(0);
        let (_, remainder) = self.div_impl(a, b, true, options)?;
        Ok(remainder)
    }

    fn div_impl(
        &mut self,
        a: &BigDec,
        b: &BigDec,
        truncate: bool,
        options: DivOptions,
    ) -> crate::Result<(usize, BigDec)> {
        if a.is_zero() {
            self.set_i64(0);
            if options.decimal_places >= 0 {
                self.set_decimals(options.decimal_places as usize);
            }
            return Ok((0, BigDec::new()));
        }
        if b.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }

        let sign = a.signum() * b.signum();

        // Scale both operands to integers by a common power of ten.
        let shift = a.decimals() + b.decimals();
        let mut dividend = a.clone();
        dividend.abs_mut().mul_pow10(shift);
        let mut divisor = b.clone();
        divisor.abs_mut().mul_pow10(shift);

        if divisor.is_i64(1) {
            self.analysis = dividend.analysis;
            self.set_sign(sign);
            if options.decimal_places >= 0 {
                self.set_decimals(options.decimal_places as usize);
            }
            return Ok((0, BigDec::new()));
        }

        let a_digits = &dividend.analysis.digits;
        let b_len = divisor.len();

        // Divisor head for the native quotient-digit estimate.
        let head_len = b_len.min(5);
        let divisor_head = digits_to_i64(&divisor.analysis.digits[..head_len]);

        // Working prefix of the dividend; integer division by a longer
        // divisor yields nothing for the first b_len - 1 digits.
        let init_len = (b_len - 1).min(a_digits.len());
        let mut div_part: Vec<u8> = a_digits[..init_len].to_vec();

        let mut result: Vec<u8> = Vec::with_capacity(a_digits.len() + b_len);
        let mut in_fraction = false;
        let mut remainder_seen: HashMap<Vec<u8>, usize> = HashMap::new();
        let mut repeat_start: Option<usize> = None;
        let mut decimals: usize = 0;
        let mut last_remainder = BigDec::new();

        // Compute one digit past a fixed target so it can be rounded.
        let goal: i64 = if options.decimal_places >= 0 {
            i64::from(options.decimal_places) + 1
        } else {
            -1
        };

        let mut i = b_len - 1;
        loop {
            let digit = if i >= a_digits.len() {
                in_fraction = true;
                b'0'
            } else {
                a_digits[i]
            };

            let exact = in_fraction && div_part == b"0";
            if exact || (goal > 0 && decimals as i64 == goal) {
                if exact && decimals == 0 {
                    // exact at the integer boundary: the residue is 0,
                    // not the remainder before the last quotient digit
                    last_remainder = BigDec::new();
                }
                break;
            }

            if in_fraction {
                if let Some(&seen) = remainder_seen.get(&div_part) {
                    repeat_start = Some(seen);
                    break;
                }
                remainder_seen.insert(div_part.clone(), decimals);
                decimals += 1;
            }

            last_remainder = integer_from_digits(div_part.clone());

            // A bare zero remainder is replaced, not appended, so the
            // working prefix never grows a leading zero.
            if div_part == b"0" {
                div_part[0] = digit;
            } else {
                div_part.push(digit);
            }

            let mut q: u8 = 0;
            if div_part.len() >= b_len {
                let take = div_part.len() - (b_len - head_len);
                let part_head = digits_to_i64(&div_part[..take]);
                q = (part_head / divisor_head) as u8;
            }

            if q > 0 {
                let mut product = divisor.clone();
                if q > 1 {
                    product.mul_i64(i64::from(q));
                }
                let mut current = integer_from_digits(div_part);

                // The truncated estimate can overshoot by at most one.
                if product.compare(&current) == Ordering::Greater {
                    q -= 1;
                    let p = product.clone();
                    BigDec::sub(&mut product, &p, &divisor);
                }

                let c = current.clone();
                BigDec::sub(&mut current, &c, &product);
                div_part = current.analysis.digits;
            }

            // Suppress leading integer zeros; once fractional, a '0'
            // integer digit precedes the first emitted digit.
            if q > 0 || !result.is_empty() || in_fraction {
                if in_fraction && result.is_empty() {
                    result.push(b'0');
                }
                result.push(b'0' + q);
                if decimals >= options.max_decimal_places {
                    break;
                }
            }

            i += 1;
        }

        let mut repetend = match repeat_start {
            Some(start) => decimals - start,
            None => 0,
        };

        // A fixed target longer than the natural expansion is covered
        // by repeating the repetend, or by zeros for exact results.
        if goal >= 0 && goal as usize > decimals {
            let shortfall = goal as usize - decimals;
            let pattern: Vec<u8> = if repetend > 0 {
                let p = result[result.len() - repetend..].to_vec();
                repetend = 0;
                p
            } else {
                vec![b'0']
            };
            let mut trail: Vec<u8> = Vec::with_capacity(shortfall + pattern.len());
            while trail.len() < shortfall {
                trail.extend_from_slice(&pattern);
            }
            trail.truncate(shortfall);
            result.extend_from_slice(&trail);
            decimals = goal as usize;
        }

        self.analysis = Analysis {
            digits: result,
            sign: 1,
            decimals,
        };
        self.set_sign(sign);

        if options.decimal_places >= 0 && (options.decimal_places as usize) < self.decimals() {
            if truncate {
                self.trunc_to(0)?;
            } else {
                self.round(options.decimal_places)?;
                self.set_decimals(options.decimal_places as usize);
            }
            let mut remainder = last_remainder;
            remainder.div_pow10(shift);
            return Ok((repetend, remainder));
        }

        Ok((repetend, BigDec::new()))
    }
}

impl Div for &BigDec {
    type Output = BigDec;

    fn div(self, rhs: &BigDec) -> BigDec {
        let mut out = BigDec::new();
        BigDec::div(&mut out, self, rhs, DivOptions::default())
            .expect("attempt to divide by zero");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatOptions;

    fn num(s: &str) -> BigDec {
        BigDec::parse(s).unwrap()
    }

    /// Divides and renders with default repetend brackets.
    fn div_str(a: &str, b: &str, decimal_places: i32) -> String {
        let options = DivOptions::default().with_decimal_places(decimal_places);
        let mut q = BigDec::new();
        let repetend = BigDec::div(&mut q, &num(a), &num(b), options).unwrap();
        q.format(repetend, &FormatOptions::default())
    }

    #[test]
    fn test_div_auto_detects_termination_and_repetends() {
        let cases: &[(&str, &str, &str)] = &[
            ("2", "0.002", "1000"),
            ("2", "-0.002", "-1000"),
            ("-2", "0.002", "-1000"),
            ("-2", "-0.002", "1000"),
            ("-0.01", "2", "-0.005"),
            ("-0.01", "3", "-0.00(3)"),
            ("0.01", "-3", "-0.00(3)"),
            ("0.01", "0.01", "1"),
            ("100", "-0.7", "-142.(857142)"),
            ("12345", "1", "12345"),
            ("-12345", "1", "-12345"),
            ("-12345", "-1", "12345"),
            ("12345", "-1", "-12345"),
            ("1", "22", "0.0(45)"),
            ("1", "6", "0.1(6)"),
            ("1", "9", "0.(1)"),
            ("1", "12", "0.08(3)"),
            ("1", "11", "0.(09)"),
            ("1", "3", "0.(3)"),
            ("1", "70", "0.0(142857)"),
            ("-1", "70", "-0.0(142857)"),
        ];
        for &(a, b, expected) in cases {
            assert_eq!(div_str(a, b, -1), expected, "{} / {}", a, b);
        }
    }

    #[test]
    fn test_div_fixed_decimal_places_rounds() {
        let cases: &[(&str, &str, i32, &str)] = &[
            ("0.01", "-3", 10, "-0.0033333333"),
            ("-1", "-1", 0, "1"),
            ("-1", "1", 0, "-1"),
            ("1", "-1", 0, "-1"),
            ("1", "-1", 2, "-1.00"),
            ("0", "1", 0, "0"),
            ("0", "-1", 0, "0"),
            ("0", "0.01", 0, "0"),
            ("0", "-0.01", 0, "0"),
            ("100", "-0.7", 5, "-142.85714"),
            ("100", "-0.7", 0, "-143"),
            ("100", "-0.7", 15, "-142.857142857142857"),
            ("-1", "20000", 5, "-0.00005"),
            ("1", "12345", 5, "0.00008"),
            ("1", "22", 5, "0.04545"),
            ("1", "22", 4, "0.0455"),
            ("17253428", "32459", 13, "531.5452724976124"),
            (
                "30",
                "15.0000001",
                53,
                "1.99999998666666675555555496296296691358022057613186283",
            ),
        ];
        for &(a, b, decimals, expected) in cases {
            assert_eq!(div_str(a, b, decimals), expected, "{} / {} @ {}", a, b, decimals);
        }
    }

    #[test]
    fn test_div_fixed_mode_reports_no_repetend() {
        let options = DivOptions::default().with_decimal_places(10);
        let mut q = BigDec::new();
        let repetend = BigDec::div(&mut q, &num("0.01"), &num("-3"), options).unwrap();
        assert_eq!(repetend, 0);
        assert_eq!(q.to_string(), "-0.0033333333");
    }

    #[test]
    fn test_div_repetend_lengths() {
        let cases: &[(&str, &str, usize)] = &[
            ("100", "-0.7", 6),
            ("1", "70", 6),
            ("1", "6", 1),
            ("1", "11", 2),
            ("2", "0.002", 0),
            ("0.01", "0.01", 0),
        ];
        for &(a, b, expected) in cases {
            let mut q = BigDec::new();
            let repetend = BigDec::div(&mut q, &num(a), &num(b), DivOptions::default()).unwrap();
            assert_eq!(repetend, expected, "{} / {}", a, b);
        }
    }

    #[test]
    fn test_div_safety_cap_bounds_undetected_repetends() {
        // The repetend of 300000000/150000001 is far longer than 100
        // digits; the cap must stop the loop at exactly 100.
        let options = DivOptions::default().with_max_decimal_places(100);
        let mut q = BigDec::new();
        let repetend = BigDec::div(&mut q, &num("30"), &num("15.0000001"), options).unwrap();
        assert_eq!(repetend, 0);
        assert_eq!(q.decimals(), 100);
        assert_eq!(
            q.to_string(),
            "1.9999999866666667555555549629629669135802205761318628257875811614161255905591627296055818026294546491",
        );
    }

    #[test]
    fn test_div_by_zero() {
        let mut q = num("7");
        assert_eq!(
            BigDec::div(&mut q, &num("1"), &num("0"), DivOptions::default()).unwrap_err(),
            DecimalError::DivisionByZero
        );
        assert_eq!(q.to_string(), "7");
        assert_eq!(
            q.div_rem(&num("1"), &num("0.00")).unwrap_err(),
            DecimalError::DivisionByZero
        );
    }

    #[test]
    fn test_div_zero_dividend_takes_target_decimals() {
        let mut q = num("7");
        let options = DivOptions::default().with_decimal_places(3);
        BigDec::div(&mut q, &num("0"), &num("5"), options).unwrap();
        assert_eq!(q.to_string(), "0.000");

        BigDec::div(&mut q, &num("0"), &num("5"), DivOptions::default()).unwrap();
        assert_eq!(q.to_string(), "0");
    }

    #[test]
    fn test_div_rem() {
        let cases: &[(&str, &str, &str, &str)] = &[
            ("1", "-3", "0", "1"),
            ("10", "7", "1", "3"),
            ("10", "5", "2", "0"),
            ("18", "7", "2", "4"),
            ("-18", "7", "-2", "4"),
            ("-18", "7.2", "-2", "3.6"),
            ("-1", "8", "0", "1"),
            ("-1", "20000", "0", "1"),
            ("2", "12345", "0", "2"),
            ("43", "22", "1", "21"),
            ("43", "-22", "-1", "21"),
            ("-43", "-22", "1", "21"),
            ("-43", "22", "-1", "21"),
        ];
        for &(a, b, expected_q, expected_r) in cases {
            let mut q = BigDec::new();
            let r = q.div_rem(&num(a), &num(b)).unwrap();
            assert_eq!(q.to_string(), expected_q, "{} div {}", a, b);
            assert_eq!(r.to_string(), expected_r, "{} mod {}", a, b);
        }
    }

    #[test]
    fn test_div_rem_identity() {
        // q * |b| + r == |a| at the integer boundary, 0 <= r < |b|.
        let cases: &[(&str, &str)] = &[
            ("43", "22"),
            ("-18", "7.2"),
            ("10", "7"),
            ("123.45", "0.7"),
            ("2", "12345"),
        ];
        for &(a, b) in cases {
            let mut q = BigDec::new();
            let r = q.div_rem(&num(a), &num(b)).unwrap();
            q.abs_mut();

            let mut b_abs = num(b);
            b_abs.abs_mut();
            assert!(r.cmp_abs(&b_abs) == core::cmp::Ordering::Less, "{} mod {}", a, b);
            assert_eq!(r.signum(), 1);

            let mut back = BigDec::new();
            BigDec::mul(&mut back, &q, &b_abs);
            let sum = &back + &r;
            let mut a_abs = num(a);
            a_abs.abs_mut();
            assert_eq!(sum, a_abs, "{} div {}", a, b);
        }
    }

    #[test]
    fn test_div_operator_uses_auto_precision() {
        let q = &num("1") / &num("-1");
        assert_eq!(q.to_string(), "-1");
    }

    #[test]
    fn test_div_destination_can_alias_a_prior_result() {
        let a = num("100");
        let b = num("-0.7");
        let mut q = num("99999.9");
        let repetend = BigDec::div(&mut q, &a, &b, DivOptions::default()).unwrap();
        assert_eq!(q.format(repetend, &FormatOptions::default()), "-142.(857142)");
    }
}
