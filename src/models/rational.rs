//! Rational (mixed-number) type for representing measurements
//!
//! Stores an exact value as `integer + numerator/denominator` over i64
//! fields to avoid floating-point display artifacts. Constructed from a
//! decimal string and consumed only for rendering.

use std::fmt;
use std::num::IntErrorKind;

/// An exact value expressed as a mixed number: `integer + numerator/denominator`
///
/// The fraction is always stored in lowest terms. When the value has no
/// fractional part, both `numerator` and `denominator` are 0. When the
/// integer part is 0, the numerator carries the sign of the whole value;
/// otherwise the integer part does and the numerator stays positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rational {
    integer: i64,
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Create a Rational from its raw parts
    ///
    /// # Examples
    /// ```
    /// use punchboard::models::Rational;
    /// let r = Rational::new(1, 1, 5); // 1 + 1/5
    /// ```
    pub const fn new(integer: i64, numerator: i64, denominator: i64) -> Self {
        Self {
            integer,
            numerator,
            denominator,
        }
    }

    /// Create a zero Rational
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Get the integer part
    pub const fn integer(&self) -> i64 {
        self.integer
    }

    /// Get the fraction numerator (0 when there is no fractional part)
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Get the fraction denominator (0 when there is no fractional part)
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Check if the value is exactly zero
    pub const fn is_zero(&self) -> bool {
        self.integer == 0 && self.numerator == 0
    }

    /// Parse a decimal string into an exact reduced Rational
    ///
    /// Accepts formats: "1", "-3", "1.25", "-.2", "+1.2", ".0", ""
    ///
    /// The string is split at the first decimal point. An empty integer
    /// portion, or a bare `+`/`-` sign, parses as 0. Leading zeros in the
    /// fractional portion are positionally significant ("1.05" is 1 + 1/20,
    /// not 1 + 1/2). A fractional value of exactly zero leaves both
    /// numerator and denominator at 0.
    ///
    /// # Errors
    ///
    /// Returns [`RationalParseError::MalformedNumber`] when a non-digit
    /// appears where a digit was required, and
    /// [`RationalParseError::RangeExceeded`] when the fractional digit
    /// count implies a power-of-ten denominator outside the i64 range.
    pub fn parse_decimal(s: &str) -> Result<Self, RationalParseError> {
        let sign: i64 = if s.starts_with('-') { -1 } else { 1 };

        let (int_part, frac_part) = match s.find('.') {
            Some(p) => (&s[..p], &s[p + 1..]),
            None => (s, ""),
        };

        let mut r = Rational::zero();

        if !int_part.is_empty() && int_part != "+" && int_part != "-" {
            r.integer = int_part.parse::<i64>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    RationalParseError::RangeExceeded(int_part.to_string())
                }
                _ => RationalParseError::MalformedNumber(int_part.to_string()),
            })?;
        }

        if !frac_part.is_empty() {
            // Unlike the integer portion, the fractional portion may not
            // carry its own sign.
            if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RationalParseError::MalformedNumber(frac_part.to_string()));
            }

            let n = frac_part
                .parse::<u64>()
                .map_err(|_| RationalParseError::RangeExceeded(frac_part.to_string()))?;

            let d = 10i64
                .checked_pow(frac_part.len() as u32)
                .ok_or_else(|| RationalParseError::RangeExceeded(frac_part.to_string()))?;

            r.numerator = n as i64;

            if r.numerator != 0 {
                r.denominator = d;
            }

            let g = gcd(r.numerator, r.denominator);
            if g != 0 {
                r.numerator /= g;
                r.denominator /= g;
            }

            // A nonzero integer part already carries the overall sign.
            if r.integer == 0 {
                r.numerator *= sign;
            }
        }

        Ok(r)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = false;

        if self.integer != 0 {
            write!(f, "{}", self.integer)?;
            rendered = true;
        }

        if self.numerator != 0 {
            if rendered {
                write!(f, " + ")?;
            }

            let (mut n, mut d) = (self.numerator, self.denominator);
            if d < 0 {
                n = -n;
                d = -d;
            }

            write!(f, "{}/{}", n, d)?;
            rendered = true;
        }

        if !rendered {
            write!(f, "0")?;
        }

        Ok(())
    }
}

/// Standard Euclidean GCD over signed integers, returning the non-negative
/// greatest common divisor. `gcd(0, 0)` is 0 so callers can skip the
/// reduction step instead of dividing by zero.
fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

/// Error type for decimal parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RationalParseError {
    /// A non-digit character appeared where a digit was required
    MalformedNumber(String),
    /// The fractional digit count implies a denominator outside the i64 range
    RangeExceeded(String),
}

impl fmt::Display for RationalParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalParseError::MalformedNumber(s) => {
                write!(f, "Invalid decimal number: {}", s)
            }
            RationalParseError::RangeExceeded(s) => {
                write!(f, "Value out of range: {}", s)
            }
        }
    }
}

impl std::error::Error for RationalParseError {}
