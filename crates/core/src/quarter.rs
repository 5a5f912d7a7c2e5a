//! Fiscal quarters and closed quarter ranges.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::iter::successors;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{END_QUARTER, END_YEAR, START_QUARTER, START_YEAR};
use crate::error::CoreError;

const YEARS: RangeInclusive<u16> = 1000..=9999;

/// A single fiscal quarter, e.g. `1999Q1`.
///
/// Years are four digits so the string form always parses back. Ordering is
/// chronological: by year, then by quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quarter {
    year: u16,
    quarter: u8,
}

impl Quarter {
    pub fn new(year: u16, quarter: u8) -> Result<Self, CoreError> {
        if !YEARS.contains(&year) || !(1..=4).contains(&quarter) {
            return Err(CoreError::InvalidQuarter(format!("{year}Q{quarter}")));
        }
        Ok(Self { year, quarter })
    }

    /// The quarter immediately after this one, `None` after `9999Q4`.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        if self.quarter == 4 {
            Self::new(self.year + 1, 1).ok()
        } else {
            Some(Self { year: self.year, quarter: self.quarter + 1 })
        }
    }
}

impl Display for Quarter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}Q{}", self.year, self.quarter)
    }
}

impl FromStr for Quarter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidQuarter(s.to_owned());
        let (year, quarter) = s.split_once('Q').ok_or_else(invalid)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) || quarter.len() != 1 {
            return Err(invalid());
        }
        let year: u16 = year.parse().map_err(|_| invalid())?;
        let quarter: u8 = quarter.parse().map_err(|_| invalid())?;
        Self::new(year, quarter)
    }
}

impl TryFrom<String> for Quarter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quarter> for String {
    fn from(value: Quarter) -> Self {
        value.to_string()
    }
}

/// Closed range of quarters, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds", into = "RangeBounds")]
pub struct QuarterRange {
    start: Quarter,
    end: Quarter,
}

/// Wire form of `QuarterRange`; deserializing goes through `QuarterRange::new`.
#[derive(Serialize, Deserialize)]
struct RangeBounds {
    start: Quarter,
    end: Quarter,
}

impl TryFrom<RangeBounds> for QuarterRange {
    type Error = CoreError;

    fn try_from(value: RangeBounds) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl From<QuarterRange> for RangeBounds {
    fn from(value: QuarterRange) -> Self {
        Self { start: value.start, end: value.end }
    }
}

impl QuarterRange {
    pub fn new(start: Quarter, end: Quarter) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::InvalidRange { start: start.to_string(), end: end.to_string() });
        }
        Ok(Self { start, end })
    }

    /// Number of quarters in the range:
    /// `(end_year - start_year) * 4 + (end_quarter - start_quarter + 1)`.
    #[must_use]
    pub fn len(&self) -> usize {
        let years = usize::from(self.end.year - self.start.year);
        years * 4 + usize::from(self.end.quarter) + 1 - usize::from(self.start.quarter)
    }

    /// A range is never empty; both bounds are inclusive.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Quarters in chronological order, `start` through `end`.
    pub fn iter(&self) -> impl Iterator<Item = Quarter> + use<> {
        let end = self.end;
        successors(Some(self.start), |q| q.next()).take_while(move |q| *q <= end)
    }
}

impl Default for QuarterRange {
    fn default() -> Self {
        Self {
            start: Quarter { year: START_YEAR, quarter: START_QUARTER },
            end: Quarter { year: END_YEAR, quarter: END_QUARTER },
        }
    }
}
