pub mod bench;
pub mod comparable;
pub mod config;
pub mod error;
pub mod gcd;
pub mod rational;
pub mod sort;

pub use comparable::{Comparable, ToF64};
pub use config::BenchConfig;
pub use error::{ConfigError, RationalError};
pub use gcd::gcd;
pub use rational::{harmonic_sum, Rational};
pub use sort::{
    insertion_sort, insertion_sort_by, is_sorted, sort_ints, sort_rationals, sort_strings,
};
