//! Single-reservation lookups.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::model::reservation::Reservation;

use super::query_builders::by_id;

/// ## Summary
/// Fetches a reservation by id, or `None` when it does not exist.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_reservation(
    conn: &mut DbConnection<'_>,
    reservation_id: Uuid,
) -> diesel::QueryResult<Option<Reservation>> {
    by_id(reservation_id)
        .select(Reservation::as_select())
        .first(conn)
        .await
        .optional()
}
