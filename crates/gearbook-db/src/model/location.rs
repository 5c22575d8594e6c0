use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// Site room or area where equipment is used
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::location)]
#[diesel(check_for_backend(Pg))]
pub struct Location {
    pub id: uuid::Uuid,
    pub name: String,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::location)]
pub struct NewLocation<'a> {
    pub name: &'a str,
}
