use thiserror::Error;

/// Errors returned when building a [`SlugPolicy`](crate::SlugPolicy).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid slug length {length}; expected 1..={max_length}")]
    InvalidLength { length: usize, max_length: usize },
    #[error("alphabet needs at least 2 distinct symbols, got {distinct}")]
    AlphabetTooSmall { distinct: usize },
    #[error("alphabet symbol {symbol:?} is not URL-safe")]
    UnsafeSymbol { symbol: char },
}
