use crate::db::DbPool;

/// Count teacher records.
pub async fn count(pool: &DbPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM teachers")
        .fetch_one(pool)
        .await
}

/// Insert a teacher, returning the new id. Email is optional; staff records
/// imported from the old registry often lack one.
pub async fn insert(
    pool: &DbPool,
    username: &str,
    name: &str,
    surname: &str,
    email: Option<&str>,
) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO teachers (username, name, surname, email) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(username)
    .bind(name)
    .bind(surname)
    .bind(email)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}
