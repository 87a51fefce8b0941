//! JSON counts API under /api/v1.

mod common;

use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use escolar::db::DbPool;
use escolar::handlers;

use common::{seed_roster, setup_test_db, setup_unmigrated_db};

async fn get_api(pool: DbPool, uri: &str) -> (StatusCode, Bytes) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .service(web::scope("/api/v1").configure(handlers::api_v1::configure)),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    (status, body)
}

#[actix_web::test]
async fn counts_returns_every_category() {
    let pool = setup_test_db().await;
    seed_roster(&pool, 1, 4, 9, 6).await;

    let (status, body) = get_api(pool, "/api/v1/counts").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        value,
        json!({ "admin": 1, "teacher": 4, "student": 9, "parent": 6 })
    );
}

#[actix_web::test]
async fn single_category_includes_its_label() {
    let pool = setup_test_db().await;
    seed_roster(&pool, 0, 3, 0, 0).await;

    let (status, body) = get_api(pool, "/api/v1/counts/teacher").await;
    assert_eq!(status, StatusCode::OK);

    let value: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        value,
        json!({ "category": "teacher", "label": "Profesores", "count": 3 })
    );
}

#[actix_web::test]
async fn unknown_category_is_a_404() {
    let pool = setup_test_db().await;

    let (status, _body) = get_api(pool, "/api/v1/counts/janitor").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn counts_fail_closed_without_a_schema() {
    let pool = setup_unmigrated_db().await;

    let (status, _body) = get_api(pool, "/api/v1/counts").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
