use crate::types::errors::MonthError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"
];

/// How a month is rendered in indicator labels.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum MonthLabel {
    #[default]
    Full,
    Abbreviated
}

/// A calendar month number, guaranteed to be in `1..=12`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Month(u32);

impl Month {
    pub const DECEMBER: Month = Month(12);

    pub fn new(number: u32) -> Result<Self, MonthError> {
        if (1..=12).contains(&number) {
            Ok(Month(number))
        } else {
            Err(MonthError::OutOfRange(number))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// The month before this one. January wraps to December rather than to 0.
    pub fn previous(self) -> Month {
        if self.0 > 1 { Month(self.0 - 1) } else { Month::DECEMBER }
    }

    pub fn name(self) -> &'static str {
        NAMES[(self.0 - 1) as usize]
    }

    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }

    pub fn label(self, style: MonthLabel) -> &'static str {
        match style {
            MonthLabel::Full => self.name(),
            MonthLabel::Abbreviated => self.abbreviation()
        }
    }
}

impl Display for Month {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Month {
    type Err = MonthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let number: u32 = value.trim().parse()?;
        Month::new(number)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = u32::deserialize(deserializer)?;
        Month::new(number).map_err(de::Error::custom)
    }
}

impl Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.number())
    }
}
