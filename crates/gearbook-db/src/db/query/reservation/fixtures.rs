#![expect(dead_code, reason = "Test fixtures may have unused code")]
//! Test fixtures for reservation database tests.
//!
//! Provides helpers for creating test data: users, locations, equipment, and
//! reservation drafts.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::db::query::reservation::create::ReservationDraft;
use crate::model::equipment::{NewEquipment, NewEquipmentGroup};
use crate::model::location::NewLocation;
use crate::model::user::NewAppUser;

/// Creates a test user.
#[must_use]
pub fn test_user<'a>(name: &'a str, email: &'a str) -> NewAppUser<'a> {
    NewAppUser {
        name,
        email,
        is_admin: false,
    }
}

/// Creates a test admin user.
#[must_use]
pub fn test_admin<'a>(name: &'a str, email: &'a str) -> NewAppUser<'a> {
    NewAppUser {
        name,
        email,
        is_admin: true,
    }
}

/// Creates a test location.
#[must_use]
pub fn test_location(name: &str) -> NewLocation<'_> {
    NewLocation { name }
}

/// Creates a test equipment group.
#[must_use]
pub fn test_equipment_group(name: &str) -> NewEquipmentGroup<'_> {
    NewEquipmentGroup { name }
}

/// Creates operational test equipment in a group.
#[must_use]
pub fn test_equipment(name: &str, group_id: Uuid) -> NewEquipment<'_> {
    NewEquipment {
        name,
        operational: true,
        group_id,
    }
}

/// Creates equipment that is out of service.
#[must_use]
pub fn broken_equipment(name: &str, group_id: Uuid) -> NewEquipment<'_> {
    NewEquipment {
        name,
        operational: false,
        group_id,
    }
}

/// Creates a reservation draft with no team members.
#[must_use]
pub fn test_draft<'a>(
    name: &'a str,
    owner_id: Uuid,
    location_id: Uuid,
    begin_at: NaiveDateTime,
    end_at: NaiveDateTime,
    equipment_ids: &'a [Uuid],
) -> ReservationDraft<'a> {
    ReservationDraft {
        name,
        owner_id,
        location_id,
        begin_at,
        end_at,
        equipment_ids,
        team_ids: &[],
    }
}
