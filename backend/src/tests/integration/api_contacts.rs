use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use crate::tests::helpers::{empty_request, json_request, response_json, test_app};

#[tokio::test]
async fn root_serves_the_api_banner() {
    let app = test_app();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("Rolodex"));
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app();

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn create_returns_the_created_contact() {
    let app = test_app();

    let payload = json!({
        "firstName": "Ann",
        "lastName": "Lee",
        "phone": "555-010-0200",
        "email": "ann@example.com",
        "address": null
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contacts", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["firstName"], "Ann");
    assert_eq!(body["lastName"], "Lee");
    assert!(body["createdAt"].is_string());
    assert!(body["address"].is_null());

    // the new contact shows up in a follow-up list
    let response = app
        .oneshot(empty_request("GET", "/api/contacts"))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 1);
}

#[tokio::test]
async fn create_rejects_a_duplicate_phone_number() {
    let app = test_app();

    let payload = json!({ "firstName": "Ann", "phone": "5550100200" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contacts", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let payload = json!({ "firstName": "Bo", "phone": "5550100200" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contacts", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response_json(response).await;
    assert_eq!(
        body["error"],
        "A contact with phone number 5550100200 already exists"
    );

    // the duplicate was not inserted
    let response = app
        .oneshot(empty_request("GET", "/api/contacts"))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_surfaces_validation_errors() {
    let app = test_app();

    let payload = json!({ "firstName": "Ann", "phone": "123" });
    let response = app
        .oneshot(json_request("POST", "/api/contacts", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Phone number must be 10-15 digits");
}

#[tokio::test]
async fn get_of_unknown_id_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/contacts/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Contact not found with ID: 999");
}

#[tokio::test]
async fn update_replaces_the_record() {
    let app = test_app();

    let payload = json!({ "firstName": "Ann", "phone": "5550100200" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contacts", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let payload = json!({
        "id": 1,
        "firstName": "Anne",
        "lastName": "Lee",
        "phone": "5550100201",
        "email": null,
        "address": null
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/contacts/1", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["firstName"], "Anne");
    assert_eq!(body["phone"], "5550100201");
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let app = test_app();

    let payload = json!({ "firstName": "Ann", "phone": "5550100200" });
    let response = app
        .oneshot(json_request("PUT", "/api/contacts/42", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Contact not found with ID: 42");
}

#[tokio::test]
async fn deleted_contacts_never_reappear_in_the_list() {
    let app = test_app();

    for (name, phone) in [("Ann", "5550100200"), ("Bo", "5550100201")] {
        let payload = json!({ "firstName": name, "phone": phone });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/contacts", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/contacts/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Contact deleted successfully");

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/contacts"))
        .await
        .unwrap();
    let body = response_json(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![2]);

    // deleting again is a 404
    let response = app
        .oneshot(empty_request("DELETE", "/api/contacts/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_matches_names_case_insensitively() {
    let app = test_app();

    for (first, last, phone) in [
        ("Ann", "Lee", "5550100200"),
        ("Bo", "Martin", "5550100201"),
    ] {
        let payload = json!({ "firstName": first, "lastName": last, "phone": phone });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/contacts", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/contacts/search?name=LEE"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["firstName"], "Ann");

    // a blank term returns nothing rather than everything
    let response = app
        .oneshot(empty_request("GET", "/api/contacts/search?name="))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn count_tracks_the_number_of_contacts() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/contacts/count"))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["count"], 0);

    let payload = json!({ "firstName": "Ann", "phone": "5550100200" });
    app.clone()
        .oneshot(json_request("POST", "/api/contacts", &payload))
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request("GET", "/api/contacts/count"))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["count"], 1);
}
