use diesel::{pg::Pg, prelude::*};

use crate::db::schema;
use crate::model::equipment::Equipment;
use crate::model::user::AppUser;

/// One committed reservation window. Equipment and team membership live in
/// the association tables.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::reservation)]
#[diesel(check_for_backend(Pg))]
pub struct Reservation {
    pub id: uuid::Uuid,
    pub name: String,
    pub owner_id: uuid::Uuid,
    pub location_id: uuid::Uuid,
    pub begin_at: chrono::NaiveDateTime,
    pub end_at: chrono::NaiveDateTime,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::reservation)]
pub struct NewReservation<'a> {
    pub name: &'a str,
    pub owner_id: uuid::Uuid,
    pub location_id: uuid::Uuid,
    pub begin_at: chrono::NaiveDateTime,
    pub end_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, Identifiable, Associations)]
#[diesel(table_name = schema::reservation_equipment)]
#[diesel(primary_key(reservation_id, equipment_id))]
#[diesel(belongs_to(Reservation, foreign_key = reservation_id))]
#[diesel(belongs_to(Equipment, foreign_key = equipment_id))]
pub struct ReservationEquipment {
    pub reservation_id: uuid::Uuid,
    pub equipment_id: uuid::Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable, Identifiable, Associations)]
#[diesel(table_name = schema::reservation_team)]
#[diesel(primary_key(reservation_id, user_id))]
#[diesel(belongs_to(Reservation, foreign_key = reservation_id))]
#[diesel(belongs_to(AppUser, foreign_key = user_id))]
pub struct ReservationTeam {
    pub reservation_id: uuid::Uuid,
    pub user_id: uuid::Uuid,
}
