//! Reservation operations as called by the transport layer.

use uuid::Uuid;

use gearbook_core::config::SchedulingConfig;
use gearbook_core::recurrence::expand;
use gearbook_core::types::Occurrence;
use gearbook_db::db::connection::DbConnection;
use gearbook_db::db::query::reservation::create::{ReservationDraft, ReserveOutcome};
use gearbook_db::db::query::reservation::{delete, get, update};
use gearbook_db::db::query::user::get_user;
use gearbook_db::model::reservation::Reservation;

use crate::error::{ConflictError, ServiceError, ServiceResult};

use super::batch::{BatchPhase, BatchRequest, commit_occurrences};
use super::request::CreateReservationRequest;
use super::store::PgReservationStore;
use super::validate::{validate_request, validate_update};

/// What a creation request produced.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// A non-recurring request: the one reservation it created.
    Single(Reservation),
    /// A recurring request: how many occurrences were committed.
    Batch { created: usize },
}

/// ## Summary
/// Creates a reservation, or a batch of them when the request carries a
/// recurrence block.
///
/// Validation of the request shape and its references runs first; a rejected
/// request has no side effects. The recurrence (if any) is then expanded and
/// every occurrence is validated and committed in emission order, stopping on
/// the first conflict. Occurrences committed before a mid-batch conflict
/// remain persisted.
///
/// ## Errors
/// Returns `InputValidation` or `RecurrenceConfig` for a malformed request,
/// `Conflict` naming the first double-booked occurrence, or a database error.
#[tracing::instrument(skip(conn, scheduling, request), fields(caller = %caller, name = %request.name))]
pub async fn create_reservation(
    conn: &mut DbConnection<'_>,
    scheduling: &SchedulingConfig,
    caller: Uuid,
    request: &CreateReservationRequest,
) -> ServiceResult<CreateOutcome> {
    let validated = validate_request(conn, scheduling, caller, request).await?;

    let batch_request = BatchRequest {
        name: &request.name,
        owner_id: validated.owner_id,
        location_id: request.location_id,
        equipment_ids: &request.equipment_ids,
        team_ids: &request.team_ids,
    };

    match validated.recurrence {
        None => {
            let occurrence = Occurrence::new(request.begin_at, request.end_at);
            let mut store = PgReservationStore::new(conn);
            let mut created = commit_occurrences(&mut store, &batch_request, &[occurrence]).await?;

            created
                .pop()
                .map(CreateOutcome::Single)
                .ok_or(ServiceError::InvariantViolation(
                    "single create committed no reservation",
                ))
        }
        Some(spec) => {
            tracing::debug!(pattern = %spec.pattern, until = %spec.until, phase = %BatchPhase::Expanding, "Expanding recurrence");
            let occurrences = expand(&spec);

            let mut store = PgReservationStore::new(conn);
            let created = commit_occurrences(&mut store, &batch_request, &occurrences).await?;

            Ok(CreateOutcome::Batch {
                created: created.len(),
            })
        }
    }
}

/// ## Summary
/// Reschedules an existing reservation to the window and associations in the
/// request. Updates are single-window; a recurrence block is rejected. Only
/// the owner or an admin may update.
///
/// The conflict check excludes the reservation's own id, so its previous
/// window never flags itself.
///
/// ## Errors
/// Returns `NotFound` for an unknown id, `Forbidden` for a non-owner
/// non-admin caller, `InputValidation`/`RecurrenceConfig` for a malformed
/// request, `Conflict` when the new window is double-booked, or a database
/// error.
#[tracing::instrument(skip(conn, request), fields(caller = %caller, reservation_id = %reservation_id))]
pub async fn update_reservation(
    conn: &mut DbConnection<'_>,
    caller: Uuid,
    reservation_id: Uuid,
    request: &CreateReservationRequest,
) -> ServiceResult<Reservation> {
    let existing = get::get_reservation(conn, reservation_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("reservation {reservation_id}")))?;
    ensure_owner_or_admin(conn, caller, &existing).await?;

    let owner_id = validate_update(conn, existing.owner_id, request).await?;

    let draft = ReservationDraft {
        name: &request.name,
        owner_id,
        location_id: request.location_id,
        begin_at: request.begin_at,
        end_at: request.end_at,
        equipment_ids: &request.equipment_ids,
        team_ids: &request.team_ids,
    };

    match update::reschedule_reservation(conn, reservation_id, &draft).await? {
        ReserveOutcome::Created(reservation) => Ok(reservation),
        ReserveOutcome::Conflicted(conflicts) => Err(ServiceError::Conflict(ConflictError {
            occurrence_index: 0,
            occurrence_begin: request.begin_at,
            conflicts,
        })),
    }
}

/// ## Summary
/// Deletes a reservation. Only the owner or an admin may delete; the
/// equipment and team links cascade with the row.
///
/// ## Errors
/// Returns `NotFound` for an unknown id, `Forbidden` for a non-owner
/// non-admin caller, or a database error.
#[tracing::instrument(skip(conn), fields(caller = %caller, reservation_id = %reservation_id))]
pub async fn delete_reservation(
    conn: &mut DbConnection<'_>,
    caller: Uuid,
    reservation_id: Uuid,
) -> ServiceResult<()> {
    let existing = get::get_reservation(conn, reservation_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("reservation {reservation_id}")))?;
    ensure_owner_or_admin(conn, caller, &existing).await?;

    delete::delete_reservation(conn, reservation_id).await?;
    Ok(())
}

/// Ownership is a data-model fact: the owner may always mutate their own
/// reservation, anyone else must be an admin.
async fn ensure_owner_or_admin(
    conn: &mut DbConnection<'_>,
    caller: Uuid,
    reservation: &Reservation,
) -> ServiceResult<()> {
    if reservation.owner_id == caller {
        return Ok(());
    }

    let is_admin = get_user(conn, caller)
        .await?
        .is_some_and(|user| user.is_admin);
    if is_admin {
        Ok(())
    } else {
        tracing::debug!(owner_id = %reservation.owner_id, "Caller is neither the owner nor an admin");
        Err(ServiceError::Forbidden(
            "only the owner or an admin may modify a reservation".to_owned(),
        ))
    }
}
