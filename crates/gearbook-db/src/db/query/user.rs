//! User lookups for ownership checks.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::connection::DbConnection;
use crate::db::schema::app_user;
use crate::model::user::AppUser;

/// ## Summary
/// Fetches a user by id, or `None` when it does not exist.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_user(
    conn: &mut DbConnection<'_>,
    user_id: Uuid,
) -> diesel::QueryResult<Option<AppUser>> {
    app_user::table
        .find(user_id)
        .select(AppUser::as_select())
        .first(conn)
        .await
        .optional()
}
