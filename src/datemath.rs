use std::cmp::Ordering;
use time::{Date, Month};

/// Integer key `year * 10000 + month * 100 + day`.  Dates are ordered by
/// this key alone; wall-clock instants never enter into it.
pub(crate) fn date_key(date: Date) -> i32 {
    date.year() * 10000 + i32::from(u8::from(date.month())) * 100 + i32::from(date.day())
}

pub(crate) fn compare(a: Date, b: Date) -> Ordering {
    date_key(a).cmp(&date_key(b))
}

/// Monday = 1 … Sunday = 7.
pub(crate) fn weekday_monday_first(date: Date) -> u8 {
    date.weekday().number_days_from_monday() + 1
}

/// `YYYY-MM-DD`, zero-padded.
pub(crate) fn format_ymd(date: Date) -> String {
    let year = date.year();
    let month = u8::from(date.month());
    let day = date.day();
    format!("{year:04}-{month:02}-{day:02}")
}

/// The same calendar day one month earlier, with the day clamped to the
/// shorter month (e.g. March 31 → February 29 in a leap year).
pub(crate) fn month_earlier(date: Date) -> Date {
    let Some(cursor) = MonthCursor::of(date).prev() else {
        return date;
    };
    let day = date.day().min(cursor.length());
    Date::from_calendar_date(cursor.year, cursor.month, day).unwrap_or(date)
}

/// A specific calendar month.  Shifting normalizes month overflow and
/// underflow into year carry and fails only past the representable years.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthCursor {
    pub(crate) year: i32,
    pub(crate) month: Month,
}

impl MonthCursor {
    pub(crate) fn of(date: Date) -> MonthCursor {
        MonthCursor {
            year: date.year(),
            month: date.month(),
        }
    }

    pub(crate) fn prev(self) -> Option<MonthCursor> {
        let year = if self.month == Month::January {
            self.year.checked_sub(1)?
        } else {
            self.year
        };
        let cursor = MonthCursor {
            year,
            month: self.month.previous(),
        };
        cursor.first_day().is_some().then_some(cursor)
    }

    pub(crate) fn next(self) -> Option<MonthCursor> {
        let year = if self.month == Month::December {
            self.year.checked_add(1)?
        } else {
            self.year
        };
        let cursor = MonthCursor {
            year,
            month: self.month.next(),
        };
        cursor.first_day().is_some().then_some(cursor)
    }

    pub(crate) fn first_day(self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, 1).ok()
    }

    /// Day count for the month: the day before the first of the next month,
    /// which rolls over December → January and leap years correctly.
    pub(crate) fn length(self) -> u8 {
        match self
            .next()
            .and_then(MonthCursor::first_day)
            .and_then(Date::previous_day)
        {
            Some(last) => last.day(),
            // December of the last representable year has no successor
            // month, but its length is fixed anyway.
            None => 31,
        }
    }
}
