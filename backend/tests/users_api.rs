//! End-to-end coverage of the `/users` resource against the in-memory store.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test, web};
use serde_json::{Value, json};

use backend::Trace;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use backend::outbound::persistence::InMemoryUserStore;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();

    App::new()
        .app_data(health_state)
        .app_data(web::Data::new(HttpState::new(Arc::new(
            InMemoryUserStore::new(),
        ))))
        .wrap(Trace)
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live)
}

async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

#[actix_web::test]
async fn crud_round_trip_follows_creation_order() {
    let app = actix_test::init_service(test_app()).await;

    // create Ann -> id 1
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ann", "email": "a@x.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let ann = read_json(response).await;
    assert_eq!(
        ann,
        json!({ "id": 1, "name": "Ann", "email": "a@x.com" })
    );

    // create Bo -> id 2
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Bo", "email": "b@x.com" }))
            .to_request(),
    )
    .await;
    let bo = read_json(response).await;
    assert_eq!(bo.get("id"), Some(&Value::from(2)));

    // list -> both, in creation order
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json(response).await;
    let ids: Vec<i64> = listed
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|user| user.get("id").and_then(Value::as_i64))
        .collect();
    assert_eq!(ids, vec![1, 2]);

    // delete Ann
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // list -> only Bo
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    let listed = read_json(response).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    // get Ann -> 404
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // rename Bo, email untouched
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/2")
            .set_json(json!({ "name": "Robert" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let robert = read_json(response).await;
    assert_eq!(
        robert,
        json!({ "id": 2, "name": "Robert", "email": "b@x.com" })
    );
}

#[actix_web::test]
async fn update_of_unknown_user_returns_not_found_envelope() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/users/99")
            .set_json(json!({ "name": "Nobody" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let value = read_json(response).await;
    assert_eq!(value.get("code").and_then(Value::as_str), Some("not_found"));
    assert_eq!(
        value.get("message").and_then(Value::as_str),
        Some("user 99 not found")
    );
}

#[actix_web::test]
async fn responses_carry_trace_id_headers() {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;

    assert!(response.headers().contains_key("trace-id"));
}

#[actix_web::test]
async fn health_probes_respond_once_ready() {
    let app = actix_test::init_service(test_app()).await;

    for uri in ["/health/ready", "/health/live"] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "probe {uri}");
    }
}
