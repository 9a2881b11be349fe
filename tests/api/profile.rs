use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, body_json, method, path},
};

use crate::helpers::{EVENT_KEY, spawn_app};

fn accepted() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "ids": ["01HP5V0000000000000000000A"],
        "status": 200
    }))
}

#[tokio::test]
async fn update_profile_dispatches_one_event() {
    let app = spawn_app().await;
    let body = "id=42&username=alice&link_label%5B%5D=Blog&link_url%5B%5D=https%3A%2F%2Fa.example";

    Mock::given(path(format!("/e/{EVENT_KEY}")))
        .and(method("POST"))
        .and(body_json(serde_json::json!({
            "name": "lwj/user.profile.update",
            "data": {
                "id": "42",
                "username": "alice",
                "bio": "",
                "links": [{ "label": "Blog", "url": "https://a.example" }]
            }
        })))
        .respond_with(accepted())
        .expect(1)
        .mount(&app.event_server)
        .await;

    let response = app.post_profile_update(body.into()).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn update_profile_returns_the_acknowledgment() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(accepted())
        .expect(1)
        .mount(&app.event_server)
        .await;

    let response = app
        .post_profile_update("id=42&username=alice".into())
        .await;

    assert_eq!(200, response.status().as_u16());
    let ack: serde_json::Value = response.json().await.expect("Response was not json.");
    assert_eq!(
        ack,
        serde_json::json!({ "ids": ["01HP5V0000000000000000000A"] })
    );
}

#[tokio::test]
async fn update_profile_reconciles_links_and_keeps_bio() {
    let app = spawn_app().await;
    let form = [
        ("id", "42"),
        ("username", "alice"),
        ("bio", "Writes about the web"),
        ("link_label[]", "Empty"),
        ("link_url[]", ""),
        ("link_label[]", "Code"),
        ("link_url[]", "https://b.example"),
        ("link_url[]", "https://c.example"),
    ];

    Mock::given(body_json(serde_json::json!({
        "name": "lwj/user.profile.update",
        "data": {
            "id": "42",
            "username": "alice",
            "bio": "Writes about the web",
            "links": [
                { "label": "Code", "url": "https://b.example" },
                { "label": "", "url": "https://c.example" }
            ]
        }
    })))
    .respond_with(accepted())
    .expect(1)
    .mount(&app.event_server)
    .await;

    let response = app.post_form_fields("user.updateProfile", &form).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn update_profile_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(accepted())
        .expect(0)
        .mount(&app.event_server)
        .await;

    let test_cases = vec![
        ("username=alice", "missing the id"),
        ("id=42", "missing the username"),
        ("id=&username=alice", "empty id"),
        ("id=42&username=", "empty username"),
        ("link_url%5B%5D=https%3A%2F%2Fa.example", "missing id and username"),
        ("", "empty form"),
    ];

    for (body, description) in test_cases {
        let response = app.post_profile_update(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn update_profile_returns_500_when_the_event_api_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.event_server)
        .await;

    let response = app
        .post_profile_update("id=42&username=alice".into())
        .await;

    assert_eq!(500, response.status().as_u16());
}
