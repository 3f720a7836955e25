use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonthError {
    #[error("Month error: {0} is not in the range 1-12")]
    OutOfRange(u32),
    #[error("Month error: {0}")]
    ParseInt(#[from] ParseIntError)
}
