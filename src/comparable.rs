use std::fmt::Display;

use crate::rational::Rational;

/// Float view of a comparable value. Part of the public contract next to
/// [`Comparable`]; the sort itself only needs the ordering.
pub trait ToF64 {
    fn to_f64(&self) -> f64;
}

/// What a type needs to be sorted by [`crate::insertion_sort`]: a strict
/// ordering, an equality and a printable form.
pub trait Comparable: Display {
    fn less_than(&self, other: &Self) -> bool;
    fn equal(&self, other: &Self) -> bool;
}

macro_rules! impl_comparable_primitive {
    ($($t:ident),*) => {
        $(
            impl ToF64 for $t {
                fn to_f64(&self) -> f64 {
                    *self as f64
                }
            }

            impl Comparable for $t {
                fn less_than(&self, other: &Self) -> bool {
                    self < other
                }

                fn equal(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    }
}

impl_comparable_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Comparable for String {
    fn less_than(&self, other: &Self) -> bool {
        self < other
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Comparable for &str {
    fn less_than(&self, other: &Self) -> bool {
        self < other
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl ToF64 for Rational {
    fn to_f64(&self) -> f64 {
        Rational::to_f64(self)
    }
}

impl Comparable for Rational {
    fn less_than(&self, other: &Self) -> bool {
        Rational::less_than(*self, *other)
    }

    fn equal(&self, other: &Self) -> bool {
        Rational::equal(*self, *other)
    }
}
