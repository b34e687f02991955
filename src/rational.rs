use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;

use crate::error::RationalError;
use crate::gcd::gcd;

/// An exact fraction `numerator/denominator`.
///
/// Values are not kept in lowest terms. `equal` and the ordering work on any
/// representation, `to_lowest_terms` gives the reduced one.
///
/// A zero denominator is only checked by `try_new`, `divide` and `invert`.
/// Everything else treats it as a caller error: float conversions return
/// inf/NaN and the gcd based operations panic on integer division by zero.
#[derive(Debug, Clone, Copy)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

#[allow(clippy::should_implement_trait)]
impl Rational {
    /// Placeholder 0/0 for callers that want a value next to a failed `divide` or `invert`.
    pub const DEGENERATE: Rational = Rational::new(0, 0);

    pub const fn new(numerator: i64, denominator: i64) -> Rational {
        Rational {
            numerator,
            denominator,
        }
    }

    pub fn try_new(numerator: i64, denominator: i64) -> Result<Rational, RationalError> {
        if denominator == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Rational::new(numerator, denominator))
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn split(&self) -> (i64, i64) {
        (self.numerator, self.denominator)
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn equal(self, other: Rational) -> bool {
        let lhs = self.to_lowest_terms();
        let rhs = other.to_lowest_terms();
        lhs.numerator == rhs.numerator && lhs.denominator == rhs.denominator
    }

    // float approximation, may misorder pairs that only differ past f64 precision
    pub fn less_than(self, other: Rational) -> bool {
        self.to_f64() < other.to_f64()
    }

    pub fn is_int(self) -> bool {
        self.numerator % self.denominator == 0
    }

    pub fn add(self, other: Rational) -> Rational {
        let a = self.numerator * other.denominator + other.numerator * self.denominator;
        let b = self.denominator * other.denominator;
        reduced(a, b)
    }

    pub fn multiply(self, other: Rational) -> Rational {
        let a = self.numerator * other.numerator;
        let b = self.denominator * other.denominator;
        reduced(a, b)
    }

    pub fn divide(self, other: Rational) -> Result<Rational, RationalError> {
        let a = self.numerator * other.denominator;
        let b = self.denominator * other.numerator;
        if b == 0 {
            return Err(RationalError::DivideByZero);
        }
        Ok(reduced(a, b))
    }

    pub fn invert(self) -> Result<Rational, RationalError> {
        if self.numerator == 0 {
            return Err(RationalError::InvertZero);
        }
        Ok(Rational::new(self.denominator, self.numerator))
    }

    pub fn to_lowest_terms(self) -> Rational {
        reduced(self.numerator, self.denominator)
    }
}

fn reduced(numerator: i64, denominator: i64) -> Rational {
    let divisor = gcd(numerator, denominator);
    Rational::new(numerator / divisor, denominator / divisor)
}

/// 1 + 1/2 + ... + 1/n. Overflows `i64` from n = 44 on: debug builds panic
/// on the overflowing multiply, release builds wrap.
pub fn harmonic_sum(n: i64) -> Rational {
    let mut sum = Rational::new(1, 1);
    for i in 2..=n {
        sum = sum.add(Rational::new(1, i));
    }
    sum
}

impl Default for Rational {
    fn default() -> Self {
        Rational::new(0, 1)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::new(value, 1)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.equal(*other)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.equal(*other) {
            return Some(Ordering::Equal);
        }
        // exact, unlike less_than
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        let ord = lhs.cmp(&rhs);
        if (self.denominator < 0) != (other.denominator < 0) {
            Some(ord.reverse())
        } else {
            Some(ord)
        }
    }
}

impl ops::Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational::add(self, rhs)
    }
}

impl ops::Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self.multiply(rhs)
    }
}
