use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::models::{admin, parent, student, teacher};

pub type DbPool = SqlitePool;

pub const MIGRATIONS: &str = include_str!("schema.sql");

/// Open the database file (creating it if missing) and build the pool.
pub async fn init_pool(path: &str) -> DbPool {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .expect("Failed to create DB pool")
}

pub async fn run_migrations(pool: &DbPool) {
    sqlx::raw_sql(MIGRATIONS)
        .execute(pool)
        .await
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Seed a small demo roster so a fresh install has something to count.
/// Skipped as soon as any administrator exists (same idempotency rule the
/// rest of the app relies on: seeding never touches a populated database).
pub async fn seed_demo(pool: &DbPool) {
    let existing = admin::count(pool).await.unwrap_or(0);
    if existing > 0 {
        log::info!("Database already seeded ({existing} admins), skipping demo seed");
        return;
    }

    match insert_demo_roster(pool).await {
        Ok(created) => log::info!("Demo seed complete: {created} rows"),
        Err(e) => log::error!("Demo seed failed: {e}"),
    }
}

async fn insert_demo_roster(pool: &DbPool) -> sqlx::Result<usize> {
    let mut created = 0;

    admin::insert(pool, "mvidal", "Marta", "Vidal").await?;
    admin::insert(pool, "jortega", "Julián", "Ortega").await?;
    created += 2;

    for (username, name, surname, email) in [
        ("lgarcia", "Lucía", "García", Some("lucia.garcia@escolar.test")),
        ("rmolina", "Raúl", "Molina", Some("raul.molina@escolar.test")),
        ("csoler", "Carmen", "Soler", None),
        ("fnavarro", "Félix", "Navarro", Some("felix.navarro@escolar.test")),
        ("iprieto", "Inés", "Prieto", None),
    ] {
        teacher::insert(pool, username, name, surname, email).await?;
        created += 1;
    }

    let mut parent_ids = Vec::new();
    for (username, name, surname, phone) in [
        ("afuentes", "Andrés", "Fuentes", Some("+34 600 111 222")),
        ("bcampos", "Beatriz", "Campos", None),
        ("dromero", "Diego", "Romero", Some("+34 600 333 444")),
        ("evargas", "Elena", "Vargas", None),
    ] {
        parent_ids.push(parent::insert(pool, username, name, surname, phone).await?);
        created += 1;
    }

    for (i, (username, name, surname, grade)) in [
        ("ncampos", "Nora", "Campos", 1),
        ("pfuentes", "Pablo", "Fuentes", 2),
        ("sromero", "Sara", "Romero", 3),
        ("tvargas", "Tomás", "Vargas", 3),
        ("lfuentes", "Laia", "Fuentes", 4),
        ("mromero", "Mario", "Romero", 5),
        ("avargas", "Ana", "Vargas", 6),
        ("jcampos", "Javier", "Campos", 6),
    ]
    .into_iter()
    .enumerate()
    {
        let parent_id = parent_ids.get(i % parent_ids.len()).copied();
        student::insert(pool, username, name, surname, grade, parent_id).await?;
        created += 1;
    }

    Ok(created)
}
