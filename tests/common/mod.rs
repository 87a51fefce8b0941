//! Shared test infrastructure.
//!
//! `setup_test_db()` returns a pool over a fresh in-memory database with the
//! schema applied. The pool is capped at one connection: SQLite gives every
//! in-memory connection its own database, so a second connection would see
//! empty tables.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use escolar::db::{DbPool, MIGRATIONS};
use escolar::models::{admin, parent, student, teacher};

async fn memory_pool() -> DbPool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Bad sqlite URL")
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open test DB")
}

/// Fresh in-memory database with the schema applied.
pub async fn setup_test_db() -> DbPool {
    let pool = memory_pool().await;
    sqlx::raw_sql(MIGRATIONS)
        .execute(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// In-memory database with NO schema, for exercising query failure paths.
pub async fn setup_unmigrated_db() -> DbPool {
    memory_pool().await
}

/// Insert a generated roster with the given number of rows per table.
/// Usernames are derived from the index so the UNIQUE constraint holds.
pub async fn seed_roster(pool: &DbPool, admins: i64, teachers: i64, students: i64, parents: i64) {
    for i in 0..admins {
        admin::insert(pool, &format!("admin{i}"), "Admin", &format!("Nr{i}"))
            .await
            .expect("insert admin");
    }
    for i in 0..teachers {
        teacher::insert(pool, &format!("teacher{i}"), "Teacher", &format!("Nr{i}"), None)
            .await
            .expect("insert teacher");
    }
    for i in 0..students {
        student::insert(pool, &format!("student{i}"), "Student", &format!("Nr{i}"), 1, None)
            .await
            .expect("insert student");
    }
    for i in 0..parents {
        parent::insert(pool, &format!("parent{i}"), "Parent", &format!("Nr{i}"), None)
            .await
            .expect("insert parent");
    }
}
