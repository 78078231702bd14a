use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use tera::Tera;

use pushkind_clients::domain::sort::{SequentialIdentitySource, SortCriteria, SortField};
use pushkind_clients::persistence::encode_share_param;
use pushkind_clients::repository::InMemoryRepository;
use pushkind_clients::routes::configure;

macro_rules! init_app {
    ($key:expr) => {
        test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), $key.clone())
                        .cookie_secure(false)
                        .build(),
                )
                .configure(configure)
                .app_data(web::Data::new(templates()))
                .app_data(web::Data::new(
                    InMemoryRepository::with_demo_clients().expect("demo clients"),
                )),
        )
        .await
    };
}

fn templates() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).expect("templates parse")
}

fn location(resp: &ServiceResponse) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location")
        .to_string()
}

fn session_cookie(resp: &ServiceResponse) -> Cookie<'static> {
    resp.response()
        .cookies()
        .next()
        .expect("session cookie")
        .into_owned()
}

/// Positions of the table rows for `ids` within the rendered page.
fn row_positions(body: &str, ids: &[i32]) -> Vec<usize> {
    ids.iter()
        .map(|id| {
            body.find(&format!("data-client-id=\"{id}\""))
                .unwrap_or_else(|| panic!("row {id} rendered"))
        })
        .collect()
}

fn is_ascending(positions: &[usize]) -> bool {
    positions.windows(2).all(|pair| pair[0] < pair[1])
}

#[actix_web::test]
async fn index_without_sort_keeps_source_order() {
    let key = Key::generate();
    let app = init_app!(key);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8");
    assert!(is_ascending(&row_positions(&body, &[20, 21, 9, 3, 44, 7, 68, 70, 12, 52])));
}

#[actix_web::test]
async fn index_orders_rows_by_shared_sort() {
    let key = Key::generate();
    let app = init_app!(key);

    let criteria = SortCriteria::new().add(SortField::Name, &SequentialIdentitySource::new());
    let uri = format!("/?sort={}", encode_share_param(&criteria));
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8");
    // Acme Corp, Alice Wonderland, Beta Labs, Blue Ocean, Charlie Root, ...
    assert!(is_ascending(&row_positions(&body, &[9, 68, 52, 3, 70, 20, 44, 12, 21, 7])));
}

#[actix_web::test]
async fn index_filters_by_search() {
    let key = Key::generate();
    let app = init_app!(key);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/?q=ACME").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8");
    assert!(body.contains("data-client-id=\"9\""));
    assert!(!body.contains("data-client-id=\"20\""));
}

#[actix_web::test]
async fn malformed_sort_param_renders_unsorted() {
    let key = Key::generate();
    let app = init_app!(key);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/?sort=%5Bbroken").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8");
    assert!(is_ascending(&row_positions(&body, &[20, 21, 9])));
}

#[actix_web::test]
async fn added_sort_survives_in_session() {
    let key = Key::generate();
    let app = init_app!(key);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/sort/add")
            .set_form([("field", "createdAt"), ("q", "")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let shared = location(&resp);
    assert!(shared.starts_with("/?sort="));
    assert!(shared.ends_with("&panel=open"));
    let cookie = session_cookie(&resp);

    // A bare visit is sent to the saved, shareable location.
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/").cookie(cookie.clone()).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let restored = location(&resp);
    assert!(restored.starts_with("/?sort="));
    assert!(!restored.contains("panel=open"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&restored).cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).expect("utf8");
    // Newest first: Alice Wonderland, Karthik Kumar, Test Test, Beta Labs.
    assert!(is_ascending(&row_positions(&body, &[68, 44, 21, 52])));
}

#[actix_web::test]
async fn clear_removes_sort_from_location() {
    let key = Key::generate();
    let app = init_app!(key);

    let criteria = SortCriteria::new().add(SortField::Email, &SequentialIdentitySource::new());
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/sort/clear")
            .set_form([("q", "")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/?panel=open");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/sort/remove")
            .set_form([
                ("id", criteria.as_slice()[0].id.as_str()),
                ("sort", encode_share_param(&criteria).as_str()),
                ("q", "labs"),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/?q=labs&panel=open");
}

#[actix_web::test]
async fn api_returns_sorted_json() {
    let key = Key::generate();
    let app = init_app!(key);

    let criteria = SortCriteria::new().add(SortField::UpdatedAt, &SequentialIdentitySource::new());
    let uri = format!("/api/v1/clients?sort={}", encode_share_param(&criteria));
    let body: serde_json::Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;

    assert_eq!(body["total"], 10);
    // Zen Motors was updated last.
    assert_eq!(body["clients"][0]["id"], 7);
    assert_eq!(body["clients"][0]["updatedAt"], "2025-03-04T10:40:00Z");
}
