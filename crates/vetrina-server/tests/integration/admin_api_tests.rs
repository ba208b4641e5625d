use axum::http::StatusCode;
use tower::ServiceExt;

use crate::common::{delete_request, get_request, json_request, read_json, setup_test_app};

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_project_requires_title_and_description() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"title": "No description"});
    let response = app
        .clone()
        .oneshot(json_request("POST", "/admin/api/projects", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = read_json(response).await;
    assert_eq!(json["error"], "Title and description are required");

    // Nothing was persisted.
    let response = app.oneshot(get_request("/admin/api/projects")).await.unwrap();
    assert_eq!(read_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn create_project_treats_empty_string_as_missing() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"title": "", "description": "desc"});
    let response = app
        .oneshot(json_request("POST", "/admin/api/projects", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_and_partially_update_project() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({
        "title": "Shop",
        "description": "Storefront build",
        "image_url": "https://example.com/shop.png",
        "link": "https://shop.example.com"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/admin/api/projects", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = read_json(response).await;
    assert_eq!(json["message"], "Project created successfully");
    let id = json["data"]["id"].as_i64().unwrap();

    // Update only the title; everything else must survive.
    let body = serde_json::json!({"title": "Webshop"});
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/admin/api/projects/{id}"),
            &body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["message"], "Project updated successfully");
    assert_eq!(json["data"]["title"], "Webshop");
    assert_eq!(json["data"]["description"], "Storefront build");
    assert_eq!(json["data"]["image_url"], "https://example.com/shop.png");
    assert_eq!(json["data"]["link"], "https://shop.example.com");

    // An explicit null clears a nullable field, unlike omission.
    let body = serde_json::json!({"image_url": null});
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/admin/api/projects/{id}"),
            &body,
        ))
        .await
        .unwrap();

    let json = read_json(response).await;
    assert_eq!(json["data"]["image_url"], serde_json::Value::Null);
    assert_eq!(json["data"]["title"], "Webshop");
    assert_eq!(json["data"]["link"], "https://shop.example.com");
}

#[tokio::test]
async fn update_missing_project_returns_404() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"title": "Ghost"});
    let response = app
        .oneshot(json_request("PUT", "/admin/api/projects/9999", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({"error": "Project not found"})
    );
}

#[tokio::test]
async fn delete_project_then_operate_returns_404() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"title": "Temp", "description": "short-lived"});
    let response = app
        .clone()
        .oneshot(json_request("POST", "/admin/api/projects", &body))
        .await
        .unwrap();
    let id = read_json(response).await["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(delete_request(&format!("/admin/api/projects/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await["message"],
        "Project deleted successfully"
    );

    // Every later reference to the id misses.
    let response = app
        .clone()
        .oneshot(delete_request(&format!("/admin/api/projects/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({"title": "Back"});
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/admin/api/projects/{id}"),
            &body,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_client_defaults_rating_to_five() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"name": "B", "testimonial": "great"});
    let response = app
        .oneshot(json_request("POST", "/admin/api/clients", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = read_json(response).await;
    assert_eq!(json["message"], "Client added successfully");
    assert_eq!(json["data"]["rating"], 5);
    assert_eq!(json["data"]["name"], "B");
}

#[tokio::test]
async fn create_client_requires_name_and_testimonial() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"name": "B"});
    let response = app
        .oneshot(json_request("POST", "/admin/api/clients", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await["error"],
        "Name and testimonial are required"
    );
}

#[tokio::test]
async fn update_client_rating_only() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"name": "B", "testimonial": "great", "rating": 4});
    let response = app
        .clone()
        .oneshot(json_request("POST", "/admin/api/clients", &body))
        .await
        .unwrap();
    let id = read_json(response).await["data"]["id"].as_i64().unwrap();

    let body = serde_json::json!({"rating": 5});
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/admin/api/clients/{id}"),
            &body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["data"]["rating"], 5);
    assert_eq!(json["data"]["testimonial"], "great");
}

#[tokio::test]
async fn missing_client_returns_404() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"name": "X"});
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/admin/api/clients/9999", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({"error": "Client not found"})
    );

    let response = app
        .oneshot(delete_request("/admin/api/clients/9999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Contact submissions & newsletter subscribers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_contact_submission() {
    let (app, _dir) = setup_test_app().await;

    let body = serde_json::json!({"name": "A", "email": "a@x.com", "message": "hi"});
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/contact", &body))
        .await
        .unwrap();
    let id = read_json(response).await["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(delete_request(&format!(
            "/admin/api/contact-submissions/{id}"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await["message"],
        "Submission deleted successfully"
    );

    let response = app
        .oneshot(delete_request(&format!(
            "/admin/api/contact-submissions/{id}"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({"error": "Submission not found"})
    );
}

#[tokio::test]
async fn delete_missing_subscriber_returns_404() {
    let (app, _dir) = setup_test_app().await;

    let response = app
        .oneshot(delete_request("/admin/api/newsletter-subscribers/9999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        serde_json::json!({"error": "Subscriber not found"})
    );
}
