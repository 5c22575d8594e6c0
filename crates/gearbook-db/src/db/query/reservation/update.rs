//! Reservation reschedule path: self-excluding conflict check plus row and
//! link replacement.

use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::query::equipment::lock_rows;
use crate::db::schema::{reservation, reservation_equipment, reservation_team};
use crate::error::DbError;
use crate::model::reservation::{Reservation, ReservationEquipment, ReservationTeam};

use super::conflicts::find_conflicts;
use super::create::{ReservationDraft, ReserveOutcome};

/// ## Summary
/// Reschedules an existing reservation as a single atomic unit.
///
/// Same shape as the create path, with the reservation's own id excluded from
/// the conflict check so its previous window never flags itself. On success
/// the row is updated in place and both association sets are replaced.
///
/// ## Errors
/// Returns a database error if any statement fails, including
/// `diesel::result::Error::NotFound` when the reservation does not exist.
#[tracing::instrument(skip(conn, draft), fields(reservation_id = %reservation_id))]
pub async fn reschedule_reservation(
    conn: &mut DbConnection<'_>,
    reservation_id: Uuid,
    draft: &ReservationDraft<'_>,
) -> Result<ReserveOutcome, DbError> {
    let name = draft.name.to_owned();
    let equipment_ids = draft.equipment_ids.to_vec();
    let team_ids = draft.team_ids.to_vec();
    let location_id = draft.location_id;
    let (begin_at, end_at) = (draft.begin_at, draft.end_at);

    conn.transaction::<_, DbError, _>(move |tx| {
        async move {
            lock_rows(tx, &equipment_ids).await?;

            let conflicts =
                find_conflicts(tx, begin_at, end_at, &equipment_ids, Some(reservation_id)).await?;
            if !conflicts.is_empty() {
                tracing::debug!(
                    conflict_count = conflicts.len(),
                    "Rescheduled window is double-booked"
                );
                return Ok(ReserveOutcome::Conflicted(conflicts));
            }

            let updated: Reservation = diesel::update(reservation::table.find(reservation_id))
                .set((
                    reservation::name.eq(&name),
                    reservation::location_id.eq(location_id),
                    reservation::begin_at.eq(begin_at),
                    reservation::end_at.eq(end_at),
                    reservation::updated_at.eq(diesel::dsl::now),
                ))
                .returning(Reservation::as_returning())
                .get_result(tx)
                .await?;

            replace_equipment_links(tx, reservation_id, &equipment_ids).await?;
            replace_team_links(tx, reservation_id, &team_ids).await?;

            tracing::info!(reservation_id = %updated.id, "Reservation rescheduled");
            Ok(ReserveOutcome::Created(updated))
        }
        .scope_boxed()
    })
    .await
}

/// ## Summary
/// Replaces the equipment link set of a reservation.
///
/// ## Errors
/// Returns a database error if the delete or insert fails.
pub async fn replace_equipment_links(
    conn: &mut DbConnection<'_>,
    reservation_id: Uuid,
    equipment_ids: &[Uuid],
) -> diesel::QueryResult<()> {
    diesel::delete(
        reservation_equipment::table
            .filter(reservation_equipment::reservation_id.eq(reservation_id)),
    )
    .execute(conn)
    .await?;

    let links: Vec<ReservationEquipment> = equipment_ids
        .iter()
        .map(|&equipment_id| ReservationEquipment {
            reservation_id,
            equipment_id,
        })
        .collect();
    diesel::insert_into(reservation_equipment::table)
        .values(&links)
        .execute(conn)
        .await?;

    Ok(())
}

/// ## Summary
/// Replaces the team link set of a reservation.
///
/// ## Errors
/// Returns a database error if the delete or insert fails.
pub async fn replace_team_links(
    conn: &mut DbConnection<'_>,
    reservation_id: Uuid,
    team_ids: &[Uuid],
) -> diesel::QueryResult<()> {
    diesel::delete(
        reservation_team::table.filter(reservation_team::reservation_id.eq(reservation_id)),
    )
    .execute(conn)
    .await?;

    if !team_ids.is_empty() {
        let links: Vec<ReservationTeam> = team_ids
            .iter()
            .map(|&user_id| ReservationTeam {
                reservation_id,
                user_id,
            })
            .collect();
        diesel::insert_into(reservation_team::table)
            .values(&links)
            .execute(conn)
            .await?;
    }

    Ok(())
}
