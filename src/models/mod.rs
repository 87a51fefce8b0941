pub mod admin;
pub mod category;
pub mod parent;
pub mod student;
pub mod teacher;
