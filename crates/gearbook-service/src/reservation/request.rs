//! Creation request DTOs as received from the transport layer.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub name: String,
    /// Explicit owner; when absent, the caller becomes the owner.
    #[serde(default)]
    pub owner_id: Option<Uuid>,
    pub location_id: Uuid,
    pub equipment_ids: Vec<Uuid>,
    #[serde(default)]
    pub team_ids: Vec<Uuid>,
    pub begin_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRequest {
    pub pattern: PatternKind,
    #[serde(default)]
    pub weekly_mode: Option<WeeklyMode>,
    #[serde(default)]
    pub selected_days: Option<SelectedDays>,
    /// Last calendar date on which an occurrence may begin. Required;
    /// modelled as optional so its absence surfaces as a recurrence
    /// configuration error rather than a deserialization failure.
    #[serde(default)]
    pub recurrence_end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyMode {
    Single,
    Multiple,
}

/// Weekday checkboxes for weekly-multiple recurrences. Only weekdays are
/// selectable, so these recurrences can never land on a weekend.
#[expect(
    clippy::struct_excessive_bools,
    reason = "wire format: one checkbox per selectable weekday"
)]
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct SelectedDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
}

impl SelectedDays {
    /// The selected weekdays in Monday-first order.
    #[must_use]
    pub fn to_weekdays(self) -> Vec<Weekday> {
        let flags = [
            (self.monday, Weekday::Mon),
            (self.tuesday, Weekday::Tue),
            (self.wednesday, Weekday::Wed),
            (self.thursday, Weekday::Thu),
            (self.friday, Weekday::Fri),
        ];
        flags
            .into_iter()
            .filter_map(|(selected, day)| selected.then_some(day))
            .collect()
    }

    #[must_use]
    pub fn any_selected(self) -> bool {
        self.monday || self.tuesday || self.wednesday || self.thursday || self.friday
    }
}
