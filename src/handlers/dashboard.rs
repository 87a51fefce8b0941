use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::category::Category;
use crate::templates_structs::{CountCard, DashboardTemplate};

/// The landing page: one card per category, counted fresh on every request.
/// Counts are issued one at a time; a failing query aborts the whole render
/// and surfaces through the app error responder.
pub async fn index(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let mut cards = Vec::with_capacity(Category::ALL.len());
    for (position, category) in Category::ALL.into_iter().enumerate() {
        let count = category.count(&pool).await?;
        cards.push(CountCard::new(category, count, position));
    }

    render(DashboardTemplate { cards })
}
