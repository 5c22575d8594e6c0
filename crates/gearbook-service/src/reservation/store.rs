//! Storage seam between the batch orchestrator and the reservation queries.

use std::future::Future;
use std::pin::Pin;

use gearbook_db::db::connection::DbConnection;
use gearbook_db::db::query::reservation::create::{
    ReservationDraft, ReserveOutcome, reserve_occurrence,
};
use gearbook_db::error::DbError;

/// Validator and committer for one occurrence, fused into a single atomic
/// operation. Conflict detection and the insert must not be separable:
/// two concurrent requests racing on shared equipment would otherwise both
/// pass validation and both commit.
pub trait ReservationStore: Send {
    /// Checks the draft window for equipment double-booking and, when clear,
    /// persists the reservation with its equipment and team links.
    fn reserve<'a>(
        &'a mut self,
        draft: &'a ReservationDraft<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<ReserveOutcome, DbError>> + Send + 'a>>;
}

/// The production store: one pooled Postgres connection, each `reserve` a
/// transaction that locks the affected equipment rows before checking for
/// conflicts.
pub struct PgReservationStore<'conn, 'pool> {
    conn: &'conn mut DbConnection<'pool>,
}

impl<'conn, 'pool> PgReservationStore<'conn, 'pool> {
    #[must_use]
    pub fn new(conn: &'conn mut DbConnection<'pool>) -> Self {
        Self { conn }
    }
}

impl ReservationStore for PgReservationStore<'_, '_> {
    fn reserve<'a>(
        &'a mut self,
        draft: &'a ReservationDraft<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<ReserveOutcome, DbError>> + Send + 'a>> {
        Box::pin(reserve_occurrence(self.conn, draft))
    }
}
