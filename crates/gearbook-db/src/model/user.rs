use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// Account that can own reservations and appear on reservation teams
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::app_user)]
#[diesel(check_for_backend(Pg))]
pub struct AppUser {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::app_user)]
pub struct NewAppUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub is_admin: bool,
}
