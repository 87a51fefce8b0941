//! Escolar: a server-rendered school registry dashboard.

pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;
