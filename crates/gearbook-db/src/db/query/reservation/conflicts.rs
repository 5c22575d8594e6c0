//! Equipment double-booking detection.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde::Serialize;
use uuid::Uuid;

use crate::db::schema::{reservation, reservation_equipment};

/// One existing reservation that blocks a candidate window, together with the
/// equipment ids it shares with the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentConflict {
    pub reservation_id: Uuid,
    pub equipment_ids: Vec<Uuid>,
}

/// ## Summary
/// Finds existing reservations whose window overlaps the candidate window and
/// which share at least one equipment id with it.
///
/// The overlap test is half-open (`begin_at < end AND end_at > begin`), so
/// windows that touch at a boundary do not conflict. `exclude` omits one
/// reservation id, letting an update validate against all *other*
/// reservations.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn, equipment_ids), fields(equipment_count = equipment_ids.len()))]
pub async fn find_conflicts(
    conn: &mut crate::db::connection::DbConnection<'_>,
    begin: NaiveDateTime,
    end: NaiveDateTime,
    equipment_ids: &[Uuid],
    exclude: Option<Uuid>,
) -> diesel::QueryResult<Vec<EquipmentConflict>> {
    let mut candidates = reservation::table
        .inner_join(
            reservation_equipment::table
                .on(reservation_equipment::reservation_id.eq(reservation::id)),
        )
        .filter(reservation::begin_at.lt(end))
        .filter(reservation::end_at.gt(begin))
        .filter(reservation_equipment::equipment_id.eq_any(equipment_ids))
        .select((reservation::id, reservation_equipment::equipment_id))
        .into_boxed();
    if let Some(reservation_id) = exclude {
        candidates = candidates.filter(reservation::id.ne(reservation_id));
    }

    let rows: Vec<(Uuid, Uuid)> = candidates.load(conn).await?;

    let conflicts = group_shared_equipment(rows);
    if !conflicts.is_empty() {
        tracing::debug!(conflict_count = conflicts.len(), "Overlapping reservations found");
    }

    Ok(conflicts)
}

/// Folds `(reservation_id, equipment_id)` rows into one entry per
/// reservation, equipment ids sorted. Output order is deterministic
/// regardless of how the database returned the rows.
fn group_shared_equipment(mut rows: Vec<(Uuid, Uuid)>) -> Vec<EquipmentConflict> {
    rows.sort_unstable();

    let mut conflicts: Vec<EquipmentConflict> = Vec::new();
    for (reservation_id, equipment_id) in rows {
        match conflicts.last_mut() {
            Some(conflict) if conflict.reservation_id == reservation_id => {
                conflict.equipment_ids.push(equipment_id);
            }
            _ => conflicts.push(EquipmentConflict {
                reservation_id,
                equipment_ids: vec![equipment_id],
            }),
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_collects_equipment_per_reservation() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let (eq_a, eq_b, eq_c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let conflicts = group_shared_equipment(vec![
            (first, eq_a),
            (second, eq_c),
            (first, eq_b),
        ]);

        assert_eq!(conflicts.len(), 2);
        let by_first = conflicts
            .iter()
            .find(|c| c.reservation_id == first)
            .expect("conflict for first reservation");
        assert_eq!(by_first.equipment_ids.len(), 2);
        assert!(by_first.equipment_ids.contains(&eq_a));
        assert!(by_first.equipment_ids.contains(&eq_b));

        let by_second = conflicts
            .iter()
            .find(|c| c.reservation_id == second)
            .expect("conflict for second reservation");
        assert_eq!(by_second.equipment_ids, vec![eq_c]);
    }

    #[test]
    fn grouping_is_deterministic_for_shuffled_rows() {
        let reservation_id = Uuid::new_v4();
        let (eq_a, eq_b) = (Uuid::new_v4(), Uuid::new_v4());

        let forward = group_shared_equipment(vec![(reservation_id, eq_a), (reservation_id, eq_b)]);
        let reverse = group_shared_equipment(vec![(reservation_id, eq_b), (reservation_id, eq_a)]);

        assert_eq!(forward, reverse);
    }

    #[test]
    fn grouping_of_no_rows_is_empty() {
        assert!(group_shared_equipment(Vec::new()).is_empty());
    }
}
