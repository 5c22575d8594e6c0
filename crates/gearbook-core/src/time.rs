//! Calendar and clock predicates used by expansion and validation.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::constants::{BUSINESS_DAY_END_HOUR, BUSINESS_DAY_START_HOUR};

/// ## Summary
/// Half-open interval overlap test: `[b1, e1)` and `[b2, e2)` overlap iff
/// `b1 < e2 && b2 < e1`. Touching boundaries do not overlap.
#[must_use]
pub fn overlaps(
    b1: NaiveDateTime,
    e1: NaiveDateTime,
    b2: NaiveDateTime,
    e2: NaiveDateTime,
) -> bool {
    b1 < e2 && b2 < e1
}

/// ## Summary
/// Whether a time-of-day falls within the business-hours window
/// `[07:00, 19:00)`.
#[must_use]
pub fn within_business_hours(time: NaiveTime) -> bool {
    time.hour() >= BUSINESS_DAY_START_HOUR && time.hour() < BUSINESS_DAY_END_HOUR
}

/// ## Summary
/// Whether a date falls on Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ## Summary
/// First date `>= date` that falls on `weekday`. Returns `date` itself when
/// its weekday already matches.
#[must_use]
pub fn next_occurrence_of_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let days_ahead =
        (weekday.num_days_from_monday() + 7 - date.weekday().num_days_from_monday()) % 7;
    date + Days::new(u64::from(days_ahead))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime literal")
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date literal")
    }

    #[test]
    fn overlaps_is_symmetric() {
        let (b1, e1) = (dt("2024-03-01 08:00"), dt("2024-03-01 12:00"));
        let (b2, e2) = (dt("2024-03-01 10:00"), dt("2024-03-01 11:00"));

        assert!(overlaps(b1, e1, b2, e2));
        assert!(overlaps(b2, e2, b1, e1));
    }

    #[test]
    fn overlaps_false_for_touching_boundaries() {
        let (b1, e1) = (dt("2024-03-01 08:00"), dt("2024-03-01 10:00"));
        let (b2, e2) = (dt("2024-03-01 10:00"), dt("2024-03-01 12:00"));

        assert!(!overlaps(b1, e1, b2, e2));
        assert!(!overlaps(b2, e2, b1, e1));
    }

    #[test]
    fn overlaps_false_for_disjoint_windows() {
        let (b1, e1) = (dt("2024-03-01 08:00"), dt("2024-03-01 09:00"));
        let (b2, e2) = (dt("2024-03-01 15:00"), dt("2024-03-01 16:00"));

        assert!(!overlaps(b1, e1, b2, e2));
    }

    #[test]
    fn overlaps_true_for_containment() {
        let (b1, e1) = (dt("2024-03-01 08:00"), dt("2024-03-01 18:00"));
        let (b2, e2) = (dt("2024-03-01 10:00"), dt("2024-03-01 11:00"));

        assert!(overlaps(b1, e1, b2, e2));
        assert!(overlaps(b2, e2, b1, e1));
    }

    #[test]
    fn business_hours_window_is_half_open() {
        let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid time");

        assert!(!within_business_hours(hm(6, 59)));
        assert!(within_business_hours(hm(7, 0)));
        assert!(within_business_hours(hm(12, 30)));
        assert!(within_business_hours(hm(18, 59)));
        assert!(!within_business_hours(hm(19, 0)));
        assert!(!within_business_hours(hm(22, 0)));
    }

    #[test]
    fn weekend_detection() {
        assert!(!is_weekend(date("2024-03-04"))); // Monday
        assert!(!is_weekend(date("2024-03-08"))); // Friday
        assert!(is_weekend(date("2024-03-09"))); // Saturday
        assert!(is_weekend(date("2024-03-10"))); // Sunday
    }

    #[test]
    fn next_weekday_is_identity_on_match() {
        let monday = date("2024-03-04");
        assert_eq!(next_occurrence_of_weekday(monday, Weekday::Mon), monday);
    }

    #[test]
    fn next_weekday_moves_forward_within_week() {
        let monday = date("2024-03-04");
        assert_eq!(
            next_occurrence_of_weekday(monday, Weekday::Wed),
            date("2024-03-06")
        );
        assert_eq!(
            next_occurrence_of_weekday(monday, Weekday::Fri),
            date("2024-03-08")
        );
    }

    #[test]
    fn next_weekday_wraps_into_next_week() {
        let friday = date("2024-03-08");
        assert_eq!(
            next_occurrence_of_weekday(friday, Weekday::Mon),
            date("2024-03-11")
        );
        assert_eq!(
            next_occurrence_of_weekday(friday, Weekday::Thu),
            date("2024-03-14")
        );
    }
}
