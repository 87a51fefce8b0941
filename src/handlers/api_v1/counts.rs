use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::category::Category;
use crate::templates_structs::{CategoryCountResponse, CountsResponse};

/// GET /api/v1/counts - every category's current record count
pub async fn all(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let response = CountsResponse {
        admin: Category::Admin.count(&pool).await?,
        teacher: Category::Teacher.count(&pool).await?,
        student: Category::Student.count(&pool).await?,
        parent: Category::Parent.count(&pool).await?,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/counts/{category} - one category's count by its tag
pub async fn by_category(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = Category::parse(&path).ok_or(AppError::NotFound)?;
    let count = category.count(&pool).await?;

    Ok(HttpResponse::Ok().json(CategoryCountResponse {
        category,
        label: category.label(),
        count,
    }))
}
