use super::helpers::{
    CITIES, create_city, delete, expect_status, get, json_request, raw_json_request, read_json,
    send, spawn_app,
};
use axum::http::StatusCode;
use city_api::infrastructure::monitoring::{CITIES_GET_ALL_COUNTER, CITIES_POST_COUNTER};
use city_api::presentation::http::routes::MAX_BODY_BYTES;
use serde_json::{Value, json};

async fn list(app: &axum::Router) -> Vec<Value> {
    let res = expect_status(send(app, get(CITIES)).await, StatusCode::OK).await;
    read_json(res).await
}

#[tokio::test]
async fn create_returns_created_and_stores_the_submitted_fields() {
    let app = spawn_app().await;

    let first = create_city(&app.app, "Joinville", "SC").await;
    let second = create_city(&app.app, "Porto Alegre", "RS").await;
    assert_eq!(first, "City successfully created with ID 1");
    assert_eq!(second, "City successfully created with ID 2");

    let res = expect_status(send(&app.app, get("/api/v1/cities/2")).await, StatusCode::OK).await;
    let city: Value = read_json(res).await;
    assert_eq!(city["id"], 2);
    assert_eq!(city["name"], "Porto Alegre");
    assert_eq!(city["state"], "RS");
}

#[tokio::test]
async fn create_with_null_id_gets_a_fresh_id() {
    let app = spawn_app().await;

    let req = json_request(
        "POST",
        CITIES,
        &json!({ "id": null, "name": "Blumenau", "state": "SC" }),
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::CREATED).await;
    let body: Value = read_json(res).await;
    assert_eq!(body, json!({ "message": "City successfully created with ID 1" }));
}

#[tokio::test]
async fn create_with_blank_name_is_rejected_without_storing() {
    let app = spawn_app().await;

    for name in ["", "   "] {
        let req = json_request("POST", CITIES, &json!({ "name": name, "state": "SC" }));
        let res = expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;
        let body: Value = read_json(res).await;
        assert!(body["error"].as_str().is_some_and(|e| e.contains("name")));
    }

    assert!(list(&app.app).await.is_empty());
}

#[tokio::test]
async fn create_with_invalid_body_shapes_is_bad_request() {
    let app = spawn_app().await;

    let bodies = [
        json!({ "name": "Joinville", "state": "XX" }).to_string(),
        json!({ "name": "Joinville", "state": "sc" }).to_string(),
        json!({ "name": "Joinville" }).to_string(),
        json!({ "state": "SC" }).to_string(),
        "{not json".to_string(),
    ];

    for body in bodies {
        let res = send(&app.app, raw_json_request("POST", CITIES, body.clone())).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }

    assert!(list(&app.app).await.is_empty());
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let app = spawn_app().await;

    let name = "a".repeat(MAX_BODY_BYTES + 1);
    let req = json_request("POST", CITIES, &json!({ "name": name, "state": "SC" }));
    expect_status(send(&app.app, req).await, StatusCode::PAYLOAD_TOO_LARGE).await;

    assert!(list(&app.app).await.is_empty());
}

#[tokio::test]
async fn get_unknown_id_is_not_found_with_message() {
    let app = spawn_app().await;

    let res = expect_status(
        send(&app.app, get("/api/v1/cities/999")).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "City not found with ID 999");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = spawn_app().await;

    let res = send(&app.app, get("/api/v1/cities/abc")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_by_name_is_exact_and_case_sensitive() {
    let app = spawn_app().await;
    create_city(&app.app, "Porto Alegre", "RS").await;

    let res = expect_status(
        send(&app.app, get("/api/v1/cities/name/Porto%20Alegre")).await,
        StatusCode::OK,
    )
    .await;
    let city: Value = read_json(res).await;
    assert_eq!(city, json!({ "id": 1, "name": "Porto Alegre", "state": "RS" }));

    let res = expect_status(
        send(&app.app, get("/api/v1/cities/name/porto%20alegre")).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "City not found with name porto alegre");
}

#[tokio::test]
async fn duplicate_names_are_allowed() {
    let app = spawn_app().await;
    create_city(&app.app, "Bom Jesus", "PI").await;
    create_city(&app.app, "Bom Jesus", "RS").await;

    assert_eq!(list(&app.app).await.len(), 2);

    let res = expect_status(
        send(&app.app, get("/api/v1/cities/name/Bom%20Jesus")).await,
        StatusCode::OK,
    )
    .await;
    let city: Value = read_json(res).await;
    assert_eq!(city["id"], 1);
}

#[tokio::test]
async fn list_matches_every_stored_city() {
    let app = spawn_app().await;
    assert!(list(&app.app).await.is_empty());

    create_city(&app.app, "Joinville", "SC").await;
    create_city(&app.app, "Curitiba", "PR").await;
    create_city(&app.app, "Salvador", "BA").await;

    let cities = list(&app.app).await;
    assert_eq!(cities.len(), 3);
    let names: Vec<&str> = cities.iter().filter_map(|c| c["name"].as_str()).collect();
    assert!(names.contains(&"Joinville"));
    assert!(names.contains(&"Curitiba"));
    assert!(names.contains(&"Salvador"));
}

#[tokio::test]
async fn update_replaces_fields_of_the_path_id_only() {
    let app = spawn_app().await;
    create_city(&app.app, "Joinville", "SC").await;
    create_city(&app.app, "Curitiba", "PR").await;

    let req = json_request(
        "PUT",
        "/api/v1/cities/1",
        &json!({ "id": 2, "name": "Florianopolis", "state": "SC" }),
    );
    let res = expect_status(send(&app.app, req).await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["message"], "City successfully updated with ID 1");

    let cities = list(&app.app).await;
    assert_eq!(
        cities,
        vec![
            json!({ "id": 1, "name": "Florianopolis", "state": "SC" }),
            json!({ "id": 2, "name": "Curitiba", "state": "PR" }),
        ]
    );
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found_and_writes_nothing() {
    let app = spawn_app().await;

    let req = json_request(
        "PUT",
        "/api/v1/cities/7",
        &json!({ "name": "Joinville", "state": "SC" }),
    );
    expect_status(send(&app.app, req).await, StatusCode::NOT_FOUND).await;
    assert!(list(&app.app).await.is_empty());
}

#[tokio::test]
async fn update_with_blank_name_is_rejected() {
    let app = spawn_app().await;
    create_city(&app.app, "Joinville", "SC").await;

    let req = json_request(
        "PUT",
        "/api/v1/cities/1",
        &json!({ "name": " ", "state": "SC" }),
    );
    expect_status(send(&app.app, req).await, StatusCode::BAD_REQUEST).await;

    let res = expect_status(send(&app.app, get("/api/v1/cities/1")).await, StatusCode::OK).await;
    let city: Value = read_json(res).await;
    assert_eq!(city["name"], "Joinville");
}

#[tokio::test]
async fn delete_of_unknown_id_is_not_found() {
    let app = spawn_app().await;

    let res = expect_status(
        send(&app.app, delete("/api/v1/cities/1")).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "City not found with ID 1");
}

#[tokio::test]
async fn deleted_ids_are_not_reassigned() {
    let app = spawn_app().await;
    create_city(&app.app, "Joinville", "SC").await;
    expect_status(
        send(&app.app, delete("/api/v1/cities/1")).await,
        StatusCode::OK,
    )
    .await;

    let message = create_city(&app.app, "Joinville", "SC").await;
    assert_eq!(message, "City successfully created with ID 2");
}

#[tokio::test]
async fn only_create_and_list_are_instrumented() {
    let app = spawn_app().await;

    let bad = json_request("POST", CITIES, &json!({ "name": "", "state": "SC" }));
    expect_status(send(&app.app, bad).await, StatusCode::BAD_REQUEST).await;
    assert_eq!(app.metrics.counter_value(CITIES_POST_COUNTER).await, 0);

    create_city(&app.app, "Joinville", "SC").await;
    send(&app.app, get("/api/v1/cities/1")).await;
    send(&app.app, get("/api/v1/cities/name/Joinville")).await;
    send(&app.app, delete("/api/v1/cities/1")).await;
    list(&app.app).await;
    list(&app.app).await;

    assert_eq!(app.metrics.counter_value(CITIES_POST_COUNTER).await, 1);
    assert_eq!(app.metrics.counter_value(CITIES_GET_ALL_COUNTER).await, 2);

    let snapshot = app.metrics.snapshot().await;
    assert_eq!(snapshot.counters.len(), 2);
    assert_eq!(snapshot.timers.len(), 2);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app().await;

    let res = send(&app.app, get(CITIES)).await;
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("missing x-request-id");
    assert!(uuid_like(request_id));
}

fn uuid_like(s: &str) -> bool {
    s.len() == 36 && s.chars().filter(|c| *c == '-').count() == 4
}
