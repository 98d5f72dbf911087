mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, UsersStoreMock};

#[actix_web::test]
async fn test_health_check_flow_success() {
    let client = TestClient::new(UsersStoreMock::default().into_store());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_health_check_ignores_store_failures() {
    let client = TestClient::new(UsersStoreMock::failing().into_store());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_health_check_flow_wrong_http_method() {
    let client = TestClient::new(UsersStoreMock::default().into_store());
    let app = test::init_service(client.create_app()).await;

    // Health endpoint expects GET, try POST
    let req = test::TestRequest::post().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
