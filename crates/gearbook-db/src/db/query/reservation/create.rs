//! Reservation commit path: equipment locks, conflict check, graph insert.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::query::equipment::lock_rows;
use crate::db::schema::{reservation, reservation_equipment, reservation_team};
use crate::error::DbError;
use crate::model::reservation::{
    NewReservation, Reservation, ReservationEquipment, ReservationTeam,
};

use super::conflicts::{EquipmentConflict, find_conflicts};

/// Field set for one reservation row plus its association targets.
#[derive(Debug, Clone)]
pub struct ReservationDraft<'a> {
    pub name: &'a str,
    pub owner_id: Uuid,
    pub location_id: Uuid,
    pub begin_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub equipment_ids: &'a [Uuid],
    pub team_ids: &'a [Uuid],
}

/// Outcome of attempting to reserve or reschedule one occurrence.
#[derive(Debug, Clone)]
pub enum ReserveOutcome {
    Created(Reservation),
    Conflicted(Vec<EquipmentConflict>),
}

/// ## Summary
/// Validates and commits one occurrence as a single atomic unit.
///
/// Inside one transaction: locks the equipment rows (ascending id order, so
/// concurrent requests touching shared equipment serialize with a stable lock
/// order), checks for overlapping reservations on that equipment, then
/// inserts the reservation row plus its equipment and team links. A
/// conflicting window performs no writes and reports the offending
/// reservations instead.
///
/// ## Errors
/// Returns a database error if any statement fails; no partial writes remain.
#[tracing::instrument(skip(conn, draft), fields(
    owner_id = %draft.owner_id,
    begin_at = %draft.begin_at,
    equipment_count = draft.equipment_ids.len()
))]
pub async fn reserve_occurrence(
    conn: &mut DbConnection<'_>,
    draft: &ReservationDraft<'_>,
) -> Result<ReserveOutcome, DbError> {
    let name = draft.name.to_owned();
    let equipment_ids = draft.equipment_ids.to_vec();
    let team_ids = draft.team_ids.to_vec();
    let (owner_id, location_id) = (draft.owner_id, draft.location_id);
    let (begin_at, end_at) = (draft.begin_at, draft.end_at);

    conn.transaction::<_, DbError, _>(move |tx| {
        async move {
            lock_rows(tx, &equipment_ids).await?;

            let conflicts = find_conflicts(tx, begin_at, end_at, &equipment_ids, None).await?;
            if !conflicts.is_empty() {
                tracing::debug!(
                    conflict_count = conflicts.len(),
                    "Candidate window is double-booked"
                );
                return Ok(ReserveOutcome::Conflicted(conflicts));
            }

            let new_reservation = NewReservation {
                name: &name,
                owner_id,
                location_id,
                begin_at,
                end_at,
            };
            let created: Reservation = diesel::insert_into(reservation::table)
                .values(&new_reservation)
                .returning(Reservation::as_returning())
                .get_result(tx)
                .await?;

            let equipment_links: Vec<ReservationEquipment> = equipment_ids
                .iter()
                .map(|&equipment_id| ReservationEquipment {
                    reservation_id: created.id,
                    equipment_id,
                })
                .collect();
            diesel::insert_into(reservation_equipment::table)
                .values(&equipment_links)
                .execute(tx)
                .await?;

            if !team_ids.is_empty() {
                let team_links: Vec<ReservationTeam> = team_ids
                    .iter()
                    .map(|&user_id| ReservationTeam {
                        reservation_id: created.id,
                        user_id,
                    })
                    .collect();
                diesel::insert_into(reservation_team::table)
                    .values(&team_links)
                    .execute(tx)
                    .await?;
            }

            tracing::info!(reservation_id = %created.id, "Reservation committed");
            Ok(ReserveOutcome::Created(created))
        }
        .scope_boxed()
    })
    .await
}
