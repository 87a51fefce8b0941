use serde::Serialize;

use crate::db::DbPool;
use crate::models::{admin, parent, student, teacher};

/// The four kinds of people the registry tracks. Closed set: every match on
/// it below is exhaustive, so adding a variant without a table, label, or
/// tag is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl Category {
    /// Display order on the dashboard.
    pub const ALL: [Category; 4] = [
        Category::Admin,
        Category::Teacher,
        Category::Student,
        Category::Parent,
    ];

    /// Caption shown under the count.
    pub fn label(self) -> &'static str {
        match self {
            Category::Admin => "Administradores",
            Category::Teacher => "Profesores",
            Category::Student => "Estudiantes",
            Category::Parent => "Padres",
        }
    }

    /// Stable lowercase tag used in URLs and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Admin => "admin",
            Category::Teacher => "teacher",
            Category::Student => "student",
            Category::Parent => "parent",
        }
    }

    /// Parse a tag coming in over HTTP. Anything but the four known tags is
    /// rejected; callers turn the `None` into a 404.
    pub fn parse(tag: &str) -> Option<Category> {
        match tag {
            "admin" => Some(Category::Admin),
            "teacher" => Some(Category::Teacher),
            "student" => Some(Category::Student),
            "parent" => Some(Category::Parent),
            _ => None,
        }
    }

    /// Current record count for this category. One query per call, nothing
    /// cached.
    pub async fn count(self, pool: &DbPool) -> sqlx::Result<i64> {
        match self {
            Category::Admin => admin::count(pool).await,
            Category::Teacher => teacher::count(pool).await,
            Category::Student => student::count(pool).await,
            Category::Parent => parent::count(pool).await,
        }
    }
}
