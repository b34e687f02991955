use std::env;

use log::warn;

use crate::error::ConfigError;

// random values are drawn from [-VALUE_RANGE, VALUE_RANGE)
pub const VALUE_RANGE: i64 = 10_000;
pub const STRING_LEN: usize = 4;
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const SIZE_STEP: usize = 1000;
pub const SIZE_COUNT: usize = 10;
pub const TRIALS: usize = 3;
pub const DEFAULT_SEED: u64 = 12345;

pub const PARALLEL_ENV: &str = "RATSORT_PARALLEL";

const _: () = {
    assert!(VALUE_RANGE > 0, "VALUE_RANGE must be positive");
    assert!(LETTERS.len() == 52, "LETTERS must hold both alphabets");
    assert!(TRIALS > 0, "TRIALS must be at least one");
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub trials: usize,
    pub seed: u64,
    pub parallel: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: (1..=SIZE_COUNT).map(|i| i * SIZE_STEP).collect(),
            trials: TRIALS,
            seed: DEFAULT_SEED,
            parallel: false,
        }
    }
}

impl BenchConfig {
    /// Positional arguments: `[sizes] [trials] [seed]`, each optional.
    /// `parallel` comes from the environment.
    pub fn from_args<I>(mut args: I) -> Result<BenchConfig, ConfigError>
    where
        I: Iterator<Item = String>,
    {
        let mut config = BenchConfig::default();

        match args.next() {
            Some(arg) => config.sizes = parse_sizes(&arg)?,
            None => warn!("No sizes specified. Using {:?}", config.sizes),
        }

        match args.next() {
            Some(arg) => {
                config.trials = match arg.trim().parse::<usize>() {
                    Ok(trials) if trials > 0 => trials,
                    _ => return Err(ConfigError::InvalidTrials(arg)),
                }
            }
            None => warn!("No trial count specified. Using {}", config.trials),
        }

        match args.next() {
            Some(arg) => {
                config.seed = arg
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(arg.clone()))?
            }
            None => warn!("No seed specified. Using {}", config.seed),
        }

        config.parallel = parallel_from_env();
        Ok(config)
    }
}

fn parallel_from_env() -> bool {
    env::var(PARALLEL_ENV)
        .map(|val| val == "true")
        .unwrap_or(false)
}

// format [123, 234, 345]; brackets optional
pub fn parse_sizes(input: &str) -> Result<Vec<usize>, ConfigError> {
    let trimmed = input.trim().trim_matches(|c| c == '[' || c == ']');
    if trimmed.trim().is_empty() {
        return Err(ConfigError::InvalidSizes(input.to_string()));
    }
    trimmed
        .split(',')
        .map(|s| s.trim().parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|_| ConfigError::InvalidSizes(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_default() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes.len(), SIZE_COUNT);
        assert_eq!(config.sizes[0], 1000);
        assert_eq!(config.sizes[SIZE_COUNT - 1], 10_000);
        assert_eq!(config.trials, 3);
        assert_eq!(config.seed, 12345);
    }

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("[123, 234, 345]"), Ok(vec![123, 234, 345]));
        assert_eq!(parse_sizes("10,20"), Ok(vec![10, 20]));
        assert!(parse_sizes("[]").is_err());
        assert!(parse_sizes("[1, x]").is_err());
    }

    #[test]
    fn test_from_args() {
        let config = BenchConfig::from_args(args(&["[10, 20]", "5", "7"])).unwrap();
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.trials, 5);
        assert_eq!(config.seed, 7);

        let config = BenchConfig::from_args(args(&["[50]"])).unwrap();
        assert_eq!(config.trials, TRIALS);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_from_args_errors() {
        assert_eq!(
            BenchConfig::from_args(args(&["[10]", "0"])),
            Err(ConfigError::InvalidTrials("0".to_string()))
        );
        assert_eq!(
            BenchConfig::from_args(args(&["[10]", "2", "-1"])),
            Err(ConfigError::InvalidSeed("-1".to_string()))
        );
    }
}
