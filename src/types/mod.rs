mod errors;
mod month;
#[cfg(test)]
mod tests;

pub use errors::MonthError;
pub use month::{Month, MonthLabel};

pub type CustomerId = i64;
