//! Location reference checks.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::location;

/// ## Summary
/// Whether a location id references an existing location.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn location_exists(
    conn: &mut DbConnection<'_>,
    location_id: Uuid,
) -> diesel::QueryResult<bool> {
    let found: Option<Uuid> = location::table
        .find(location_id)
        .select(location::id)
        .first(conn)
        .await
        .optional()?;

    Ok(found.is_some())
}
