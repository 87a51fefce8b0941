use crate::db::DbPool;

/// Count administrator records.
pub async fn count(pool: &DbPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM admins")
        .fetch_one(pool)
        .await
}

/// Insert an administrator, returning the new id.
pub async fn insert(pool: &DbPool, username: &str, name: &str, surname: &str) -> sqlx::Result<i64> {
    let result = sqlx::query("INSERT INTO admins (username, name, surname) VALUES (?1, ?2, ?3)")
        .bind(username)
        .bind(name)
        .bind(surname)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}
