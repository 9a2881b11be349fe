use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, body_json, header, method, path},
};

use crate::helpers::{NEWSLETTER_API_KEY, spawn_app};

fn subscriber_created(first_name: &str, email: &str) -> ResponseTemplate {
    ResponseTemplate::new(201).set_body_json(serde_json::json!({
        "subscriber": {
            "id": 3,
            "first_name": first_name,
            "email_address": email,
            "state": "active",
            "created_at": "2023-02-17T11:43:55Z",
            "fields": {}
        }
    }))
}

#[tokio::test]
async fn subscribe_forwards_the_subscriber() {
    let app = spawn_app().await;

    Mock::given(path("/v4/subscribers"))
        .and(method("POST"))
        .and(header("X-Kit-Api-Key", NEWSLETTER_API_KEY))
        .and(body_json(serde_json::json!({
            "first_name": "Bea",
            "email_address": "bea@example.com"
        })))
        .respond_with(subscriber_created("Bea", "bea@example.com"))
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let response = app
        .post_newsletter_subscription("firstName=Bea&email=bea%40example.com".into())
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_returns_the_subscriber_record() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(subscriber_created("Bea", "bea@example.com"))
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let response = app
        .post_newsletter_subscription("firstName=Bea&email=bea%40example.com".into())
        .await;

    let subscriber: serde_json::Value = response.json().await.expect("Response was not json.");
    assert_eq!(subscriber["id"], 3);
    assert_eq!(subscriber["first_name"], "Bea");
    assert_eq!(subscriber["email_address"], "bea@example.com");
    assert_eq!(subscriber["state"], "active");
}

#[tokio::test]
async fn subscribe_returns_the_provider_record_unchanged() {
    let app = spawn_app().await;
    let record = serde_json::json!({
        "id": 9,
        "first_name": "Bea",
        "email_address": "bea@example.com",
        "state": "inactive",
        "created_at": null,
        "tags": ["a"]
    });

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "subscriber": record.clone() })),
        )
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let response = app
        .post_newsletter_subscription("firstName=Bea&email=bea%40example.com".into())
        .await;

    assert_eq!(200, response.status().as_u16());
    let subscriber: serde_json::Value = response.json().await.expect("Response was not json.");
    assert_eq!(subscriber, record);
}

#[tokio::test]
async fn subscribe_returns_400_for_invalid_data_without_calling_upstream() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(subscriber_created("Bea", "bea@example.com"))
        .expect(0)
        .mount(&app.newsletter_server)
        .await;

    let test_cases = vec![
        ("firstName=Bea&email=not-an-email", "invalid email"),
        ("firstName=Bea&email=", "empty email"),
        ("firstName=Bea", "missing the email"),
        ("email=bea%40example.com", "missing the first name"),
        ("firstName=&email=bea%40example.com", "empty first name"),
        ("", "missing both first name and email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_newsletter_subscription(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn subscribing_twice_calls_upstream_twice() {
    let app = spawn_app().await;
    let body = "firstName=Bea&email=bea%40example.com";

    Mock::given(path("/v4/subscribers"))
        .and(method("POST"))
        .respond_with(subscriber_created("Bea", "bea@example.com"))
        .expect(2)
        .mount(&app.newsletter_server)
        .await;

    let first = app.post_newsletter_subscription(body.into()).await;
    let second = app.post_newsletter_subscription(body.into()).await;

    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
}

#[tokio::test]
async fn subscribe_returns_500_when_the_newsletter_api_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.newsletter_server)
        .await;

    let response = app
        .post_newsletter_subscription("firstName=Bea&email=bea%40example.com".into())
        .await;

    assert_eq!(500, response.status().as_u16());
}
