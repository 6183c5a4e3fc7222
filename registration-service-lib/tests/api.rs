use registration_adapters::{
    HashMapTokenStore, HashMapUserStore, MockEmailClient, SystemClock,
    config::constants,
    http::routes::{CONFIRMED_MESSAGE, REISSUED_MESSAGE},
};
use registration_service_lib::RegistrationService;
use serde_json::json;
use uuid::Uuid;

/// Spin up the service on a random port with in-memory stores and return its
/// base URL.
async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind(constants::test::APP_ADDRESS)
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("Failed to read local address");

    let service = RegistrationService::new(
        HashMapUserStore::new(),
        HashMapTokenStore::new(),
        MockEmailClient::new(),
        SystemClock::new(),
        format!("http://{address}/confirm"),
    );

    tokio::spawn(service.run_standalone(listener));

    format!("http://{address}")
}

fn registration_body(email: &str) -> serde_json::Value {
    json!({
        "firstName": "Alice",
        "lastName": "Smith",
        "email": email,
        "password": "password123",
    })
}

#[tokio::test]
async fn register_returns_the_confirmation_token() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{app}/register"))
        .json(&registration_body("alice@example.com"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let token = response.text().await.unwrap();
    assert!(Uuid::parse_str(&token).is_ok());
}

#[tokio::test]
async fn registering_the_same_email_twice_returns_conflict() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let first = client
        .post(format!("{app}/register"))
        .json(&registration_body("alice@example.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status().as_u16(), 200);

    let second = client
        .post(format!("{app}/register"))
        .json(&registration_body("alice@example.com"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn an_invalid_email_returns_bad_request() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{app}/register"))
        .json(&registration_body("not-an-email"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn confirming_a_fresh_token_activates_the_account() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let token = client
        .post(format!("{app}/register"))
        .json(&registration_body("alice@example.com"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let response = client
        .get(format!("{app}/confirm"))
        .query(&[("token", token.as_str())])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(body, CONFIRMED_MESSAGE);
    assert_ne!(body, REISSUED_MESSAGE);
}

#[tokio::test]
async fn confirming_twice_stays_successful() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let token = client
        .post(format!("{app}/register"))
        .json(&registration_body("alice@example.com"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    for _ in 0..2 {
        let response = client
            .get(format!("{app}/confirm"))
            .query(&[("token", token.as_str())])
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), CONFIRMED_MESSAGE);
    }
}

#[tokio::test]
async fn confirming_an_unknown_token_returns_not_found() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{app}/confirm"))
        .query(&[("token", Uuid::new_v4().to_string().as_str())])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}
