use std::fmt;
use std::fmt::Display;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::{BenchConfig, LETTERS, STRING_LEN, VALUE_RANGE};
use crate::rational::Rational;
use crate::sort::{is_sorted, sort_ints, sort_rationals, sort_strings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Int,
    Str,
    Rational,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [ElementKind::Int, ElementKind::Str, ElementKind::Rational];

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Int => "integer",
            ElementKind::Str => "string",
            ElementKind::Rational => "rational",
        }
    }
}

pub fn random_ints<R: Rng>(rng: &mut R, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(-VALUE_RANGE..VALUE_RANGE)).collect()
}

pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

pub fn random_strings<R: Rng>(rng: &mut R, n: usize, len: usize) -> Vec<String> {
    (0..n).map(|_| random_string(rng, len)).collect()
}

// zero denominators are redrawn
pub fn random_rationals<R: Rng>(rng: &mut R, n: usize) -> Vec<Rational> {
    let mut res = Vec::with_capacity(n);
    while res.len() < n {
        let numerator = rng.gen_range(-VALUE_RANGE..VALUE_RANGE);
        let denominator = rng.gen_range(-VALUE_RANGE..VALUE_RANGE);
        if denominator != 0 {
            res.push(Rational::new(numerator, denominator));
        }
    }
    res
}

/// Builds a fresh collection of `kind` and times only the sort.
pub fn time_sort<R: Rng>(kind: ElementKind, rng: &mut R, n: usize) -> Duration {
    match kind {
        ElementKind::Int => {
            let mut data = random_ints(rng, n);
            let start = Instant::now();
            sort_ints(&mut data);
            let duration = start.elapsed();
            debug_assert!(is_sorted(&data));
            duration
        }
        ElementKind::Str => {
            let mut data = random_strings(rng, n, STRING_LEN);
            let start = Instant::now();
            sort_strings(&mut data);
            let duration = start.elapsed();
            debug_assert!(is_sorted(&data));
            duration
        }
        ElementKind::Rational => {
            let mut data = random_rationals(rng, n);
            let start = Instant::now();
            sort_rationals(&mut data);
            let duration = start.elapsed();
            debug_assert!(is_sorted(&data));
            duration
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub kind: ElementKind,
    pub size: usize,
    pub avg_micros: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchReport {
    pub measurements: Vec<Measurement>,
}

impl BenchReport {
    pub fn for_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(move |m| m.kind == kind)
    }
}

impl Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in ElementKind::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "runtime of {} type:", kind.name())?;
            for m in self.for_kind(*kind) {
                writeln!(f, "n = {}: {:.2} microseconds", m.size, m.avg_micros)?;
            }
        }
        Ok(())
    }
}

fn trial_seed(config: &BenchConfig, size_idx: usize, trial: usize) -> u64 {
    config
        .seed
        .wrapping_add((size_idx * config.trials + trial) as u64)
}

// Each trial gets its own rng and its own collections, so trials can run on any thread.
fn run_trial(seed: u64, size: usize) -> [Duration; 3] {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut res = [Duration::ZERO; 3];
    for (i, kind) in ElementKind::ALL.iter().enumerate() {
        res[i] = time_sort(*kind, &mut rng, size);
        debug!("n={size} kind={} seed={seed}: {:?}", kind.name(), res[i]);
    }
    res
}

pub fn run(config: &BenchConfig) -> BenchReport {
    let mut per_kind: [Vec<Measurement>; 3] = Default::default();

    for (size_idx, &size) in config.sizes.iter().enumerate() {
        let trials: Vec<[Duration; 3]> = if config.parallel {
            (0..config.trials)
                .into_par_iter()
                .map(|trial| run_trial(trial_seed(config, size_idx, trial), size))
                .collect()
        } else {
            (0..config.trials)
                .map(|trial| run_trial(trial_seed(config, size_idx, trial), size))
                .collect()
        };

        for (i, kind) in ElementKind::ALL.iter().enumerate() {
            let total: u128 = trials.iter().map(|t| t[i].as_micros()).sum();
            let avg_micros = total as f64 / config.trials as f64;
            info!("n={size} kind={}: {:.2} microseconds", kind.name(), avg_micros);
            per_kind[i].push(Measurement {
                kind: *kind,
                size,
                avg_micros,
            });
        }
    }

    BenchReport {
        measurements: per_kind.into_iter().flatten().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ints() {
        let mut rng = StdRng::seed_from_u64(12345);
        let data = random_ints(&mut rng, 500);
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|v| (-VALUE_RANGE..VALUE_RANGE).contains(v)));
    }

    #[test]
    fn test_random_strings() {
        let mut rng = StdRng::seed_from_u64(12345);
        let data = random_strings(&mut rng, 100, STRING_LEN);
        assert_eq!(data.len(), 100);
        for s in data.iter() {
            assert_eq!(s.len(), STRING_LEN);
            assert!(s.bytes().all(|b| b.is_ascii_alphabetic()));
        }
        assert_eq!(random_string(&mut rng, 0), "");
    }

    #[test]
    fn test_random_rationals() {
        let mut rng = StdRng::seed_from_u64(12345);
        let data = random_rationals(&mut rng, 1000);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|r| r.denominator() != 0));
    }

    #[test]
    fn test_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(random_ints(&mut a, 50), random_ints(&mut b, 50));
        assert_eq!(random_strings(&mut a, 50, 4), random_strings(&mut b, 50, 4));
    }

    #[test]
    fn test_run() {
        let config = BenchConfig {
            sizes: vec![10, 20],
            trials: 2,
            seed: 1,
            parallel: false,
        };
        let report = run(&config);
        assert_eq!(report.measurements.len(), 6);
        let sizes: Vec<usize> = report
            .for_kind(ElementKind::Rational)
            .map(|m| m.size)
            .collect();
        assert_eq!(sizes, vec![10, 20]);
        assert!(report.measurements.iter().all(|m| m.avg_micros >= 0.0));
    }

    #[test]
    fn test_run_parallel() {
        let config = BenchConfig {
            sizes: vec![50],
            trials: 4,
            seed: 3,
            parallel: true,
        };
        let report = run(&config);
        assert_eq!(report.for_kind(ElementKind::Int).count(), 1);
        assert_eq!(report.for_kind(ElementKind::Str).count(), 1);
    }

    #[test]
    fn test_report_format() {
        let report = BenchReport {
            measurements: vec![
                Measurement {
                    kind: ElementKind::Int,
                    size: 1000,
                    avg_micros: 12.3456,
                },
                Measurement {
                    kind: ElementKind::Str,
                    size: 1000,
                    avg_micros: 3.0,
                },
                Measurement {
                    kind: ElementKind::Rational,
                    size: 1000,
                    avg_micros: 0.5,
                },
            ],
        };
        let expected = "runtime of integer type:\n\
                        n = 1000: 12.35 microseconds\n\
                        \n\
                        runtime of string type:\n\
                        n = 1000: 3.00 microseconds\n\
                        \n\
                        runtime of rational type:\n\
                        n = 1000: 0.50 microseconds\n";
        assert_eq!(report.to_string(), expected);
    }
}
