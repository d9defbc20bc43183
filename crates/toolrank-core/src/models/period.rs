use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{RankError, RankResult};

/// A ranking period: a calendar month (`YYYY-MM`) or a single day (`YYYY-MM-DD`).
///
/// A month period's reference date is its last calendar day; a day period's
/// reference date is the day itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
    day: Option<u32>,
}

impl Period {
    pub fn month(year: i32, month: u32) -> RankResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|_| Self {
                year,
                month,
                day: None,
            })
            .ok_or_else(|| RankError::InvalidPeriod {
                input: format!("{year:04}-{month:02}"),
            })
    }

    pub fn day(year: i32, month: u32, day: u32) -> RankResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|_| Self {
                year,
                month,
                day: Some(day),
            })
            .ok_or_else(|| RankError::InvalidPeriod {
                input: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    pub fn parse(input: &str) -> RankResult<Self> {
        let invalid = || RankError::InvalidPeriod {
            input: input.to_string(),
        };
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split('-').collect();
        let number = |s: &str| s.parse::<u32>().map_err(|_| invalid());
        match parts.as_slice() {
            [y, m] if y.len() == 4 && m.len() == 2 => {
                let year = y.parse::<i32>().map_err(|_| invalid())?;
                Self::month(year, number(m)?).map_err(|_| invalid())
            }
            [y, m, d] if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
                let year = y.parse::<i32>().map_err(|_| invalid())?;
                Self::day(year, number(m)?, number(d)?).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }

    pub fn is_month(&self) -> bool {
        self.day.is_none()
    }

    /// First calendar day covered by the period.
    pub fn start_date(&self) -> NaiveDate {
        self.date_or_first(self.day.unwrap_or(1))
    }

    /// Reference date: last day of a month period, or the day itself.
    pub fn reference_date(&self) -> NaiveDate {
        match self.day {
            Some(day) => self.date_or_first(day),
            None => self.next().start_date() - Duration::days(1),
        }
    }

    /// Last instant that still belongs to the period. Data effective at or
    /// before this instant is visible to an as-of computation.
    pub fn end_instant(&self) -> DateTime<Utc> {
        let next_start = self
            .next()
            .start_date()
            .and_hms_opt(0, 0, 0)
            .map(|n| n.and_utc())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        next_start - Duration::nanoseconds(1)
    }

    /// The immediately preceding period at the same granularity.
    pub fn previous(&self) -> Self {
        match self.day {
            Some(_) => Self::from_date(self.start_date() - Duration::days(1)),
            None if self.month == 1 => Self {
                year: self.year - 1,
                month: 12,
                day: None,
            },
            None => Self {
                year: self.year,
                month: self.month - 1,
                day: None,
            },
        }
    }

    /// The immediately following period at the same granularity.
    pub fn next(&self) -> Self {
        match self.day {
            Some(_) => Self::from_date(self.start_date() + Duration::days(1)),
            None if self.month == 12 => Self {
                year: self.year + 1,
                month: 1,
                day: None,
            },
            None => Self {
                year: self.year,
                month: self.month + 1,
                day: None,
            },
        }
    }

    fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: Some(date.day()),
        }
    }

    fn date_or_first(&self, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .or_else(|| NaiveDate::from_ymd_opt(self.year, self.month, 1))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => write!(f, "{:04}-{:02}-{:02}", self.year, self.month, day),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

impl FromStr for Period {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
