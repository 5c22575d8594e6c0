//! Query builder functions for reservations.

use diesel::prelude::*;

use crate::db::schema::reservation;

/// ## Summary
/// Returns a query to select all reservations.
#[must_use]
pub fn all() -> reservation::BoxedQuery<'static, diesel::pg::Pg> {
    reservation::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a reservation by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> reservation::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(reservation::id.eq(id))
}
