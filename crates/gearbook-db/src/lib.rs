//! Gearbook equipment reservation - Postgres persistence layer.

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub mod db;
pub mod error;
pub mod model;

/// Migrations compiled into the binary; run at startup by the embedding
/// application.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
