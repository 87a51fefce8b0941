use crate::db::DbPool;

pub async fn count(pool: &DbPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM parents")
        .fetch_one(pool)
        .await
}

pub async fn insert(
    pool: &DbPool,
    username: &str,
    name: &str,
    surname: &str,
    phone: Option<&str>,
) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO parents (username, name, surname, phone) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(username)
    .bind(name)
    .bind(surname)
    .bind(phone)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}
