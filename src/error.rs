use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationalError {
    #[error("cannot divide by zero")]
    DivideByZero,

    #[error("cannot invert zero")]
    InvertZero,

    #[error("denominator cannot be zero")]
    ZeroDenominator,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid size list `{0}` (expected format [1000, 2000, 3000])")]
    InvalidSizes(String),

    #[error("invalid trial count `{0}`")]
    InvalidTrials(String),

    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
}
