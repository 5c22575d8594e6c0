//! Recurrence expansion: turning a `RecurrenceSpec` into concrete occurrences.

use chrono::{Days, NaiveDate, NaiveDateTime, Weekday};

use crate::constants::MAX_OCCURRENCES_PER_BATCH;
use crate::time::{is_weekend, next_occurrence_of_weekday};
use crate::types::{Occurrence, RecurrencePattern, RecurrenceSpec};

/// ## Summary
/// Expands a recurrence spec into its ordered sequence of concrete
/// occurrences. Pure and deterministic: identical input yields an identical
/// sequence.
///
/// Daily and weekly-single-day patterns advance the cursor by a fixed step
/// and suppress, but never skip over, occurrences landing on a weekend.
/// Weekly-multiple-day patterns emit their per-weekday seeds in round-robin
/// order and stop the whole sequence as soon as the seed selected for the
/// next step begins after `until`, even if other seeds are still in range.
///
/// Expansion never produces more than [`MAX_OCCURRENCES_PER_BATCH`]
/// occurrences; request validation rejects windows long enough to reach that
/// bound before expansion runs, so truncation here is a backstop only.
#[must_use]
pub fn expand(spec: &RecurrenceSpec) -> Vec<Occurrence> {
    match &spec.pattern {
        RecurrencePattern::Daily => expand_stepped(spec.first, spec.until, Days::new(1)),
        RecurrencePattern::WeeklySingle => expand_stepped(spec.first, spec.until, Days::new(7)),
        RecurrencePattern::WeeklyMultiple(days) => expand_round_robin(spec.first, spec.until, days),
    }
}

/// ## Summary
/// Number of calendar days between the first begin date and `until`,
/// inclusive of both endpoints. Negative when `until` precedes the first
/// occurrence. Validation uses this to reject windows that would expand past
/// the occurrence cap.
#[must_use]
pub fn window_days(spec: &RecurrenceSpec) -> i64 {
    (spec.until - spec.first.begin.date()).num_days() + 1
}

/// Both bounds advanced by the same step, as a new value.
fn stepped(occurrence: Occurrence, step: Days) -> Occurrence {
    Occurrence::new(occurrence.begin + step, occurrence.end + step)
}

/// The occurrence relocated to `date`, preserving time-of-day on both bounds.
fn on_date(occurrence: Occurrence, date: NaiveDate) -> Occurrence {
    Occurrence::new(
        NaiveDateTime::new(date, occurrence.begin.time()),
        NaiveDateTime::new(date, occurrence.end.time()),
    )
}

fn expand_stepped(first: Occurrence, until: NaiveDate, step: Days) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    let mut cursor = first;

    while cursor.begin.date() <= until && occurrences.len() < MAX_OCCURRENCES_PER_BATCH {
        if !is_weekend(cursor.begin.date()) {
            occurrences.push(cursor);
        }
        cursor = stepped(cursor, step);
    }

    occurrences
}

fn expand_round_robin(first: Occurrence, until: NaiveDate, days: &[Weekday]) -> Vec<Occurrence> {
    let mut seeds: Vec<Occurrence> = days
        .iter()
        .map(|&day| on_date(first, next_occurrence_of_weekday(first.begin.date(), day)))
        .collect();
    seeds.sort_by_key(|seed| seed.begin);

    if seeds.is_empty() {
        return Vec::new();
    }

    let mut occurrences = Vec::new();
    let mut turn = 0usize;

    loop {
        let slot = turn % seeds.len();
        let seed = seeds[slot];

        // The whole sequence ends when the seed whose turn it is has moved
        // past the recurrence end, regardless of the other seeds.
        if seed.begin.date() > until || occurrences.len() >= MAX_OCCURRENCES_PER_BATCH {
            break;
        }

        occurrences.push(seed);
        seeds[slot] = stepped(seed, Days::new(7));
        turn += 1;
    }

    occurrences
}
