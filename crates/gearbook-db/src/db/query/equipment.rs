//! Equipment reference checks and row locks.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::equipment;

/// ## Summary
/// Returns the requested ids that do NOT reference existing, operational
/// equipment. An empty result means every id is reservable.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn missing_or_inoperative(
    conn: &mut DbConnection<'_>,
    equipment_ids: &[Uuid],
) -> diesel::QueryResult<Vec<Uuid>> {
    let reservable: Vec<Uuid> = equipment::table
        .filter(equipment::id.eq_any(equipment_ids))
        .filter(equipment::operational.eq(true))
        .select(equipment::id)
        .load(conn)
        .await?;

    Ok(equipment_ids
        .iter()
        .copied()
        .filter(|id| !reservable.contains(id))
        .collect())
}

/// ## Summary
/// Takes `FOR UPDATE` row locks on the given equipment, in ascending id
/// order. Concurrent requests that share equipment acquire their locks in the
/// same order, so one of the two fully commits before the other's conflict
/// check runs.
///
/// ## Errors
/// Returns a database error if the locking query fails.
pub async fn lock_rows(
    conn: &mut DbConnection<'_>,
    equipment_ids: &[Uuid],
) -> diesel::QueryResult<()> {
    let locked: Vec<Uuid> = equipment::table
        .filter(equipment::id.eq_any(equipment_ids))
        .order(equipment::id.asc())
        .select(equipment::id)
        .for_update()
        .load(conn)
        .await?;

    tracing::trace!(locked = locked.len(), "Equipment rows locked");
    Ok(())
}
