use chrono::{NaiveDate, NaiveDateTime, Weekday};

/// One concrete `(begin, end)` reservation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Occurrence {
    #[must_use]
    pub const fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { begin, end }
    }
}

/// How a reservation repeats.
///
/// `WeeklyMultiple` carries the selected weekdays; only weekdays are
/// selectable, so weekly-multiple expansion never lands on a weekend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrencePattern {
    Daily,
    WeeklySingle,
    WeeklyMultiple(Vec<Weekday>),
}

impl RecurrencePattern {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::WeeklySingle => "weekly-single",
            Self::WeeklyMultiple(_) => "weekly-multiple",
        }
    }
}

impl std::fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ephemeral description of a recurring reservation. Consumed once per
/// creation request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceSpec {
    pub pattern: RecurrencePattern,
    /// The first `(begin, end)` window; every later occurrence preserves its
    /// time-of-day.
    pub first: Occurrence,
    /// Last calendar date (inclusive) on which an occurrence may begin.
    pub until: NaiveDate,
}
