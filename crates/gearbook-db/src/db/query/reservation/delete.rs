//! Explicit reservation deletion.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::reservation;

/// ## Summary
/// Deletes a reservation row; its equipment and team links cascade.
///
/// Returns the number of rows deleted (0 when the id does not exist).
///
/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn delete_reservation(
    conn: &mut DbConnection<'_>,
    reservation_id: Uuid,
) -> diesel::QueryResult<usize> {
    let deleted = diesel::delete(reservation::table.find(reservation_id))
        .execute(conn)
        .await?;

    if deleted > 0 {
        tracing::info!(%reservation_id, "Reservation deleted");
    }

    Ok(deleted)
}
