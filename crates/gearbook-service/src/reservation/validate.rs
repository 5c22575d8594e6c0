//! Pre-expansion request validation.
//!
//! Malformed fields and inconsistent recurrence parameters fail the whole
//! request here, before any expansion or commit runs, so rejected requests
//! are guaranteed side-effect free.

use uuid::Uuid;

use gearbook_core::config::SchedulingConfig;
use gearbook_core::recurrence::window_days;
use gearbook_core::time::within_business_hours;
use gearbook_core::types::{Occurrence, RecurrencePattern, RecurrenceSpec};
use gearbook_db::db::connection::DbConnection;
use gearbook_db::db::query::{equipment, location};

use crate::error::{FieldError, ServiceError, ServiceResult};

use super::request::{CreateReservationRequest, PatternKind, RecurrenceRequest, WeeklyMode};

/// Validated form of a creation request: the effective owner plus the
/// recurrence spec when one was requested.
#[derive(Debug, Clone)]
pub struct ValidatedReservation {
    pub owner_id: Uuid,
    pub recurrence: Option<RecurrenceSpec>,
}

/// ## Summary
/// Validates a creation request ahead of expansion.
///
/// Field-shape problems and dangling references are collected into one
/// `InputValidation` error; recurrence inconsistencies surface as
/// `RecurrenceConfig`. The effective owner is the explicit `owner_id` or the
/// caller.
///
/// ## Errors
/// Returns `InputValidation`, `RecurrenceConfig`, or a database error from
/// the reference checks.
#[tracing::instrument(skip(conn, scheduling, request), fields(caller = %caller))]
pub async fn validate_request(
    conn: &mut DbConnection<'_>,
    scheduling: &SchedulingConfig,
    caller: Uuid,
    request: &CreateReservationRequest,
) -> ServiceResult<ValidatedReservation> {
    let owner_id = request.owner_id.unwrap_or(caller);

    let mut field_errors = shape_field_errors(request, owner_id);
    field_errors.extend(reference_field_errors(conn, request).await?);
    if !field_errors.is_empty() {
        tracing::debug!(error_count = field_errors.len(), "Request rejected by field validation");
        return Err(ServiceError::InputValidation(field_errors));
    }

    let recurrence = match &request.recurrence {
        None => None,
        Some(recurrence_request) => {
            Some(recurrence_spec(request, recurrence_request, scheduling)?)
        }
    };

    Ok(ValidatedReservation {
        owner_id,
        recurrence,
    })
}

/// ## Summary
/// Validates an update request. Updates are single-window: a recurrence
/// block is rejected outright. Returns the effective owner, defaulting to
/// the reservation's current owner rather than the caller.
///
/// ## Errors
/// Returns `InputValidation`, `RecurrenceConfig`, or a database error from
/// the reference checks.
pub async fn validate_update(
    conn: &mut DbConnection<'_>,
    default_owner: Uuid,
    request: &CreateReservationRequest,
) -> ServiceResult<Uuid> {
    if request.recurrence.is_some() {
        return Err(ServiceError::RecurrenceConfig(
            "recurrence cannot be changed on an existing reservation".to_owned(),
        ));
    }

    let owner_id = request.owner_id.unwrap_or(default_owner);

    let mut field_errors = shape_field_errors(request, owner_id);
    field_errors.extend(reference_field_errors(conn, request).await?);
    if !field_errors.is_empty() {
        return Err(ServiceError::InputValidation(field_errors));
    }

    Ok(owner_id)
}

fn shape_field_errors(request: &CreateReservationRequest, owner_id: Uuid) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if request.name.trim().is_empty() {
        errors.push(FieldError::new("name", "name is required"));
    }
    if request.equipment_ids.is_empty() {
        errors.push(FieldError::new(
            "equipmentIds",
            "at least one equipment id is required",
        ));
    }
    if request.team_ids.contains(&owner_id) {
        errors.push(FieldError::new(
            "teamIds",
            "the owner cannot be a member of the reservation team",
        ));
    }
    if !within_business_hours(request.begin_at.time()) {
        errors.push(FieldError::new(
            "beginAt",
            "must fall within business hours (07:00-19:00)",
        ));
    }
    if !within_business_hours(request.end_at.time()) {
        errors.push(FieldError::new(
            "endAt",
            "must fall within business hours (07:00-19:00)",
        ));
    }
    if request.end_at <= request.begin_at {
        errors.push(FieldError::new("endAt", "must be after beginAt"));
    }

    errors
}

async fn reference_field_errors(
    conn: &mut DbConnection<'_>,
    request: &CreateReservationRequest,
) -> ServiceResult<Vec<FieldError>> {
    let mut errors = Vec::new();

    if !location::location_exists(conn, request.location_id).await? {
        errors.push(FieldError::new("locationId", "location does not exist"));
    }

    if !request.equipment_ids.is_empty() {
        let unavailable =
            equipment::missing_or_inoperative(conn, &request.equipment_ids).await?;
        if !unavailable.is_empty() {
            let ids = unavailable
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            errors.push(FieldError::new(
                "equipmentIds",
                format!("equipment not reservable: {ids}"),
            ));
        }
    }

    Ok(errors)
}

fn recurrence_spec(
    request: &CreateReservationRequest,
    recurrence: &RecurrenceRequest,
    scheduling: &SchedulingConfig,
) -> ServiceResult<RecurrenceSpec> {
    if request.end_at.date() != request.begin_at.date() {
        return Err(ServiceError::RecurrenceConfig(
            "recurring reservations must begin and end on the same day".to_owned(),
        ));
    }

    let Some(until) = recurrence.recurrence_end_date else {
        return Err(ServiceError::RecurrenceConfig(
            "recurrenceEndDate is required".to_owned(),
        ));
    };
    if until <= request.begin_at.date() {
        return Err(ServiceError::RecurrenceConfig(
            "recurrenceEndDate must be after the first occurrence".to_owned(),
        ));
    }

    let pattern = match recurrence.pattern {
        PatternKind::Daily => RecurrencePattern::Daily,
        PatternKind::Weekly => match recurrence.weekly_mode {
            None => {
                return Err(ServiceError::RecurrenceConfig(
                    "weeklyMode is required for weekly recurrences".to_owned(),
                ));
            }
            Some(WeeklyMode::Single) => RecurrencePattern::WeeklySingle,
            Some(WeeklyMode::Multiple) => {
                let Some(days) = recurrence.selected_days.filter(|days| days.any_selected())
                else {
                    return Err(ServiceError::RecurrenceConfig(
                        "at least one weekday must be selected".to_owned(),
                    ));
                };
                RecurrencePattern::WeeklyMultiple(days.to_weekdays())
            }
        },
    };

    let spec = RecurrenceSpec {
        pattern,
        first: Occurrence::new(request.begin_at, request.end_at),
        until,
    };

    let max_days = i64::try_from(scheduling.max_occurrences).unwrap_or(i64::MAX);
    if window_days(&spec) > max_days {
        return Err(ServiceError::RecurrenceConfig(format!(
            "recurrence window spans more than {} days",
            scheduling.max_occurrences
        )));
    }

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, Weekday};

    use super::super::request::SelectedDays;
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime literal")
    }

    fn base_request() -> CreateReservationRequest {
        CreateReservationRequest {
            name: "oscilloscope".to_owned(),
            owner_id: None,
            location_id: Uuid::new_v4(),
            equipment_ids: vec![Uuid::new_v4()],
            team_ids: Vec::new(),
            begin_at: dt("2024-03-04 08:00"),
            end_at: dt("2024-03-04 12:00"),
            recurrence: None,
        }
    }

    fn scheduling() -> SchedulingConfig {
        SchedulingConfig {
            max_occurrences: 366,
        }
    }

    #[test]
    fn well_formed_request_has_no_shape_errors() {
        assert!(shape_field_errors(&base_request(), Uuid::new_v4()).is_empty());
    }

    #[test]
    fn blank_name_and_empty_equipment_are_rejected_together() {
        let mut request = base_request();
        request.name = "   ".to_owned();
        request.equipment_ids.clear();

        let errors = shape_field_errors(&request, Uuid::new_v4());

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "equipmentIds"]);
    }

    #[test]
    fn owner_on_the_team_is_rejected() {
        let owner_id = Uuid::new_v4();
        let mut request = base_request();
        request.team_ids = vec![Uuid::new_v4(), owner_id];

        let errors = shape_field_errors(&request, owner_id);

        assert!(errors.iter().any(|e| e.field == "teamIds"));
    }

    #[test]
    fn bounds_outside_business_hours_are_rejected() {
        let mut request = base_request();
        request.begin_at = dt("2024-03-04 06:30");
        request.end_at = dt("2024-03-04 19:00");

        let errors = shape_field_errors(&request, Uuid::new_v4());

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["beginAt", "endAt"]);
    }

    #[test]
    fn end_not_after_begin_is_rejected() {
        let mut request = base_request();
        request.end_at = request.begin_at;

        let errors = shape_field_errors(&request, Uuid::new_v4());

        assert!(errors.iter().any(|e| e.field == "endAt"));
    }

    #[test]
    fn recurrence_must_start_and_end_on_the_same_day() {
        let mut request = base_request();
        request.end_at = dt("2024-03-05 12:00");
        let block = RecurrenceRequest {
            pattern: PatternKind::Daily,
            weekly_mode: None,
            selected_days: None,
            recurrence_end_date: Some(NaiveDate::from_ymd_opt(2024, 3, 8).expect("valid date")),
        };

        let result = recurrence_spec(&request, &block, &scheduling());

        assert!(matches!(result, Err(ServiceError::RecurrenceConfig(_))));
    }

    #[test]
    fn recurrence_end_date_is_required_and_must_be_later() {
        let request = base_request();

        let missing = RecurrenceRequest {
            pattern: PatternKind::Daily,
            weekly_mode: None,
            selected_days: None,
            recurrence_end_date: None,
        };
        assert!(matches!(
            recurrence_spec(&request, &missing, &scheduling()),
            Err(ServiceError::RecurrenceConfig(_))
        ));

        let same_day = RecurrenceRequest {
            recurrence_end_date: Some(request.begin_at.date()),
            ..missing
        };
        assert!(matches!(
            recurrence_spec(&request, &same_day, &scheduling()),
            Err(ServiceError::RecurrenceConfig(_))
        ));
    }

    #[test]
    fn weekly_recurrence_requires_a_mode() {
        let request = base_request();
        let block = RecurrenceRequest {
            pattern: PatternKind::Weekly,
            weekly_mode: None,
            selected_days: None,
            recurrence_end_date: Some(NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date")),
        };

        assert!(matches!(
            recurrence_spec(&request, &block, &scheduling()),
            Err(ServiceError::RecurrenceConfig(_))
        ));
    }

    #[test]
    fn weekly_multiple_requires_at_least_one_selected_day() {
        let request = base_request();
        let block = RecurrenceRequest {
            pattern: PatternKind::Weekly,
            weekly_mode: Some(WeeklyMode::Multiple),
            selected_days: Some(SelectedDays::default()),
            recurrence_end_date: Some(NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date")),
        };

        assert!(matches!(
            recurrence_spec(&request, &block, &scheduling()),
            Err(ServiceError::RecurrenceConfig(_))
        ));
    }

    #[test]
    fn weekly_multiple_builds_the_selected_weekday_pattern() {
        let request = base_request();
        let block = RecurrenceRequest {
            pattern: PatternKind::Weekly,
            weekly_mode: Some(WeeklyMode::Multiple),
            selected_days: Some(SelectedDays {
                monday: true,
                wednesday: true,
                ..SelectedDays::default()
            }),
            recurrence_end_date: Some(NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date")),
        };

        let spec = recurrence_spec(&request, &block, &scheduling()).expect("valid recurrence");

        assert_eq!(
            spec.pattern,
            RecurrencePattern::WeeklyMultiple(vec![Weekday::Mon, Weekday::Wed])
        );
        assert_eq!(spec.first.begin, request.begin_at);
        assert_eq!(spec.until, NaiveDate::from_ymd_opt(2024, 3, 18).expect("valid date"));
    }

    #[test]
    fn over_long_recurrence_window_is_rejected() {
        let request = base_request();
        let block = RecurrenceRequest {
            pattern: PatternKind::Daily,
            weekly_mode: None,
            selected_days: None,
            recurrence_end_date: Some(NaiveDate::from_ymd_opt(2026, 3, 4).expect("valid date")),
        };

        assert!(matches!(
            recurrence_spec(&request, &block, &scheduling()),
            Err(ServiceError::RecurrenceConfig(_))
        ));
    }
}
