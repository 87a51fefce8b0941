use crate::db::DbPool;

/// Count student records.
pub async fn count(pool: &DbPool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(pool)
        .await
}

/// Insert a student, returning the new id. `parent_id` must reference an
/// existing parent row when given.
pub async fn insert(
    pool: &DbPool,
    username: &str,
    name: &str,
    surname: &str,
    grade: i64,
    parent_id: Option<i64>,
) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO students (username, name, surname, grade, parent_id) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(username)
    .bind(name)
    .bind(surname)
    .bind(grade)
    .bind(parent_id)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}
