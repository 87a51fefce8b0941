use askama::Template;
use serde::Serialize;

use crate::models::category::Category;

/// One dashboard card: a category's current record count plus its caption.
/// `position` is the card's index among its siblings and drives the
/// alternating background.
#[derive(Debug, Clone, Copy)]
pub struct CountCard {
    pub category: Category,
    pub count: i64,
    pub position: usize,
}

impl CountCard {
    pub fn new(category: Category, count: i64, position: usize) -> Self {
        Self {
            category,
            count,
            position,
        }
    }

    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Background class; adjacent cards always get different ones.
    pub fn background_class(&self) -> &'static str {
        if self.position % 2 == 0 {
            "bg-light-green"
        } else {
            "bg-light-yellow"
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub cards: Vec<CountCard>,
}

/// A single card, renderable on its own. The same partial is pulled into
/// the dashboard loop via `{% include %}`.
#[derive(Template)]
#[template(path = "components/count_card.html")]
pub struct CountCardTemplate {
    pub card: CountCard,
}

// --- API v1 response types ---

/// Every category's count, one field per category. A new category that is
/// not wired in here fails to compile rather than silently disappearing
/// from the API.
#[derive(Serialize, Debug, Clone)]
pub struct CountsResponse {
    pub admin: i64,
    pub teacher: i64,
    pub student: i64,
    pub parent: i64,
}

/// A single category's count.
#[derive(Serialize, Debug, Clone)]
pub struct CategoryCountResponse {
    pub category: Category,
    pub label: &'static str,
    pub count: i64,
}
