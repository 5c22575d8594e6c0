//! Batch orchestration: drives validate-and-commit over expanded occurrences.

use gearbook_core::types::Occurrence;
use gearbook_db::db::query::reservation::create::{ReservationDraft, ReserveOutcome};
use gearbook_db::model::reservation::Reservation;
use uuid::Uuid;

use crate::error::{ConflictError, ServiceError, ServiceResult};

use super::store::ReservationStore;

/// Where a creation request is in its lifecycle. `Aborted` is terminal and
/// reachable only from `Validating`: a conflicting occurrence stops the batch
/// before its commit, and nothing after it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    Expanding,
    Validating,
    Committing,
    Done,
    Aborted,
}

impl BatchPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expanding => "expanding",
            Self::Validating => "validating",
            Self::Committing => "committing",
            Self::Done => "done",
            Self::Aborted => "aborted",
        }
    }
}

impl std::fmt::Display for BatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a creation request that stay fixed across every occurrence
/// of a batch.
#[derive(Debug, Clone)]
pub struct BatchRequest<'a> {
    pub name: &'a str,
    pub owner_id: Uuid,
    pub location_id: Uuid,
    pub equipment_ids: &'a [Uuid],
    pub team_ids: &'a [Uuid],
}

impl BatchRequest<'_> {
    fn draft_for(&self, occurrence: Occurrence) -> ReservationDraft<'_> {
        ReservationDraft {
            name: self.name,
            owner_id: self.owner_id,
            location_id: self.location_id,
            begin_at: occurrence.begin,
            end_at: occurrence.end,
            equipment_ids: self.equipment_ids,
            team_ids: self.team_ids,
        }
    }
}

/// ## Summary
/// Commits occurrences one at a time, in emission order, stopping on the
/// first conflict.
///
/// Each occurrence is validated against the store as it is reached, so a
/// commit earlier in the batch is visible to every later validation. A
/// conflicting occurrence aborts the batch with an error naming its position
/// and begin timestamp; occurrences committed before it REMAIN persisted.
/// The single (non-recurring) path is this same sequence with exactly one
/// occurrence.
///
/// ## Errors
/// Returns `Conflict` for a double-booked occurrence, or a database error,
/// which likewise aborts the remainder of the batch.
#[tracing::instrument(skip(store, request, occurrences), fields(
    owner_id = %request.owner_id,
    occurrence_count = occurrences.len()
))]
pub async fn commit_occurrences<S: ReservationStore>(
    store: &mut S,
    request: &BatchRequest<'_>,
    occurrences: &[Occurrence],
) -> ServiceResult<Vec<Reservation>> {
    let mut created = Vec::with_capacity(occurrences.len());

    for (index, &occurrence) in occurrences.iter().enumerate() {
        tracing::trace!(
            index,
            begin = %occurrence.begin,
            phase = %BatchPhase::Validating,
            "Checking occurrence against existing reservations"
        );

        let draft = request.draft_for(occurrence);
        match store.reserve(&draft).await? {
            ReserveOutcome::Created(reservation) => {
                tracing::trace!(
                    index,
                    reservation_id = %reservation.id,
                    phase = %BatchPhase::Committing,
                    "Occurrence committed"
                );
                created.push(reservation);
            }
            ReserveOutcome::Conflicted(conflicts) => {
                tracing::warn!(
                    index,
                    begin = %occurrence.begin,
                    conflict_count = conflicts.len(),
                    phase = %BatchPhase::Aborted,
                    "Batch aborted on double-booked occurrence"
                );
                return Err(ServiceError::Conflict(ConflictError {
                    occurrence_index: index,
                    occurrence_begin: occurrence.begin,
                    conflicts,
                }));
            }
        }
    }

    tracing::debug!(
        created = created.len(),
        phase = %BatchPhase::Done,
        "All occurrences committed"
    );
    Ok(created)
}
