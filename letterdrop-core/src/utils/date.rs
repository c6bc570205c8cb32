use time::{Date, OffsetDateTime};

/// Render a date in US long form, e.g. `October 18, 2026`.
///
/// The output does not depend on the system locale.
pub fn long_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}

/// Today's date in the local offset, or UTC when the offset cannot be
/// determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_long_date() {
        let date = Date::from_calendar_date(2026, Month::October, 18).unwrap();
        assert_eq!(long_date(date), "October 18, 2026");
        let date = Date::from_calendar_date(2025, Month::March, 3).unwrap();
        assert_eq!(long_date(date), "March 3, 2025");
    }
}
