use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Years accepted by the axis builder. The lower bound is the Gregorian
/// adoption year; holiday derivation is undefined before it.
pub const MIN_YEAR: i32 = 1583;
pub const MAX_YEAR: i32 = 9999;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AxisError {
    #[error("month {0} is out of range (expected 1-12)")]
    MonthOutOfRange(u32),
    #[error("year {0} is out of range (expected {MIN_YEAR}-{MAX_YEAR})")]
    YearOutOfRange(i32),
    #[error("day count must be at least 1")]
    EmptyWindow,
    #[error("window of {day_count} days starting {start} runs past the calendar end")]
    PastCalendarEnd { start: NaiveDate, day_count: u32 },
}

/// Ordered, non-empty run of consecutive calendar dates: the columns of one
/// view. Construction guarantees the strictly-increasing, no-gap invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarAxis {
    days: Vec<NaiveDate>,
}

impl CalendarAxis {
    /// Every date of the given month, day 1 through the last day, leap years
    /// included. Out-of-range input is rejected, never clamped.
    pub fn month(year: i32, month: u32) -> Result<Self, AxisError> {
        if !(1..=12).contains(&month) {
            return Err(AxisError::MonthOutOfRange(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(AxisError::YearOutOfRange(year));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        Self::window(first, days_in_month(year, month))
    }

    /// `day_count` consecutive dates starting at `start`.
    pub fn window(start: NaiveDate, day_count: u32) -> Result<Self, AxisError> {
        if day_count == 0 {
            return Err(AxisError::EmptyWindow);
        }
        let mut days = Vec::with_capacity(day_count as usize);
        let mut current = start;
        for i in 0..day_count {
            days.push(current);
            if i + 1 < day_count {
                current = current
                    .succ_opt()
                    .ok_or(AxisError::PastCalendarEnd { start, day_count })?;
            }
        }
        Ok(CalendarAxis { days })
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    /// Calendar years this axis touches; a window crossing New Year spans two.
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.first().year()..=self.last().year()
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
        .num_days() as u32
}
