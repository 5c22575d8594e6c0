use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::equipment_group)]
#[diesel(check_for_backend(Pg))]
pub struct EquipmentGroup {
    pub id: uuid::Uuid,
    pub name: String,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::equipment_group)]
pub struct NewEquipmentGroup<'a> {
    pub name: &'a str,
}

/// Reservable unit; `operational` gates whether new reservations may use it
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = schema::equipment)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(EquipmentGroup, foreign_key = group_id))]
pub struct Equipment {
    pub id: uuid::Uuid,
    pub name: String,
    pub operational: bool,
    pub group_id: uuid::Uuid,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::equipment)]
pub struct NewEquipment<'a> {
    pub name: &'a str,
    pub operational: bool,
    pub group_id: uuid::Uuid,
}
