use actix_web::{App, HttpServer, middleware, web};

use escolar::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db_path = match std::env::var("ESCOLAR_DB") {
        Ok(val) => val,
        Err(_) => {
            log::info!("No ESCOLAR_DB set, using data/escolar.db");
            "data/escolar.db".to_string()
        }
    };
    let bind_addr =
        std::env::var("ESCOLAR_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    // Ensure the directory holding the database file exists
    if let Some(dir) = std::path::Path::new(&db_path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).expect("Failed to create data directory");
        }
    }

    // Initialize database
    let pool = db::init_pool(&db_path).await;
    db::run_migrations(&pool).await;
    db::seed_demo(&pool).await;

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Root redirect
            .route("/", web::get().to(handlers::root_redirect))
            // Dashboard
            .route("/dashboard", web::get().to(handlers::dashboard::index))
            // JSON API
            .service(web::scope("/api/v1").configure(handlers::api_v1::configure))
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
