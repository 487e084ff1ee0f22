//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated token for the bootstrap admin
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Unique suffix so repeated runs do not collide on unique columns
fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

/// Create an employee to visit and return its id
async fn create_employee(client: &Client, token: &str) -> String {
    let suffix = unique_suffix();
    let response = client
        .post(format!("{}/employees", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Bob Host",
            "email": format!("bob.host.{}@example.com", suffix),
            "department": "Engineering"
        }))
        .send()
        .await
        .expect("Failed to create employee");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse employee");
    body["id"].as_str().expect("No employee ID").to_string()
}

/// Register a visitor for the given employee, returning the response body
async fn register_visitor(client: &Client, employee_id: &str) -> Value {
    let suffix = unique_suffix();
    let response = client
        .post(format!("{}/registrations", BASE_URL))
        .json(&json!({
            "name": "Jane Doe",
            "email": format!("jane.doe.{}@example.com", suffix),
            "phone": "555-0100",
            "company": "Acme Corp",
            "employee_id": employee_id,
            "purpose": "Interview",
            "visit_date": "2025-01-10",
            "visit_time": "10:00"
        }))
        .send()
        .await
        .expect("Failed to register visitor");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse registration")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["login"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_current_user() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["login"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/visitors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_employee_directory_is_public() {
    let client = Client::new();

    // The registration form reads the directory without authentication
    let response = client
        .get(format!("{}/employees", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_registration_returns_visitor_code_and_badge() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let employee_id = create_employee(&client, &token).await;

    let registration = register_visitor(&client, &employee_id).await;

    let code = registration["visitor_id"].as_str().expect("No visitor code");
    assert!(code.starts_with("VIS"));
    assert!(code.len() > 3 + 13);
    assert!(code[3..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

    let qr = registration["qr_code"].as_str().expect("No QR badge");
    assert!(qr.starts_with("data:image/png;base64,"));

    // Appointments always start pending
    assert_eq!(registration["status"], "pending");
    assert!(registration["appointment_id"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_registration_with_unknown_employee() {
    let client = Client::new();

    let response = client
        .post(format!("{}/registrations", BASE_URL))
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0100",
            "employee_id": "00000000-0000-0000-0000-000000000000",
            "purpose": "Interview",
            "visit_date": "2025-01-10",
            "visit_time": "10:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_registration_rejects_invalid_email() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let employee_id = create_employee(&client, &token).await;

    let response = client
        .post(format!("{}/registrations", BASE_URL))
        .json(&json!({
            "name": "Jane Doe",
            "email": "not-an-email",
            "phone": "555-0100",
            "employee_id": employee_id,
            "purpose": "Interview",
            "visit_date": "2025-01-10",
            "visit_time": "10:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_lookup_unknown_visitor_code() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/visitors/lookup?code=VIS0000000000000XXXXXXXXX", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_check_in_requires_approved_appointment() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let employee_id = create_employee(&client, &token).await;

    // Registration leaves the appointment pending
    let registration = register_visitor(&client, &employee_id).await;
    let code = registration["visitor_id"].as_str().unwrap();

    let response = client
        .post(format!("{}/check-ins", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "visitor_id": code }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_decline_is_terminal() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let employee_id = create_employee(&client, &token).await;

    let registration = register_visitor(&client, &employee_id).await;
    let appointment_id = registration["appointment_id"].as_str().unwrap();

    // Decline the pending appointment
    let response = client
        .post(format!("{}/appointments/{}/decline", BASE_URL, appointment_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "declined");
    assert!(body["approved_at"].is_null());
    assert_eq!(body["calendar_blocked"], false);

    // A declined appointment cannot be approved afterwards
    let response = client
        .post(format!("{}/appointments/{}/approve", BASE_URL, appointment_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    // And the visitor cannot check in
    let code = registration["visitor_id"].as_str().unwrap();
    let response = client
        .post(format!("{}/check-ins", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "visitor_id": code }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_full_visit_lifecycle() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let employee_id = create_employee(&client, &token).await;

    // Register
    let registration = register_visitor(&client, &employee_id).await;
    let code = registration["visitor_id"].as_str().unwrap();
    let appointment_id = registration["appointment_id"].as_str().unwrap();

    // Approve
    let response = client
        .post(format!("{}/appointments/{}/approve", BASE_URL, appointment_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let approved: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(approved["status"], "approved");
    assert!(approved["approved_at"].is_string());
    assert_eq!(approved["calendar_blocked"], true);

    // A second approval loses against the status guard
    let response = client
        .post(format!("{}/appointments/{}/approve", BASE_URL, appointment_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    // Security desk lookup
    let response = client
        .get(format!("{}/visitors/lookup?code={}", BASE_URL, code))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let visitor: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(visitor["name"], "Jane Doe");
    assert_eq!(visitor["visitor_id"], code);

    // Check in
    let response = client
        .post(format!("{}/check-ins", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "visitor_id": code }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let check_in: Value = response.json().await.expect("Failed to parse response");
    let check_in_id = check_in["id"].as_str().expect("No check-in ID");
    let checked_in_at = check_in["checked_in_at"].as_str().unwrap().to_string();
    assert!(check_in["checked_out_at"].is_null());

    // A second check-in while the visit is open is refused
    let response = client
        .post(format!("{}/check-ins", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "visitor_id": code }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    // Check out
    let response = client
        .post(format!("{}/check-ins/{}/check-out", BASE_URL, check_in_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let checked_out: Value = response.json().await.expect("Failed to parse response");
    assert!(checked_out["checked_out_at"].is_string());
    assert_eq!(checked_out["checked_in_at"], checked_in_at.as_str());
    let checked_out_at = checked_out["checked_out_at"].as_str().unwrap().to_string();

    // Checking out again does not error and does not move the timestamp
    let response = client
        .post(format!("{}/check-ins/{}/check-out", BASE_URL, check_in_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let repeated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(repeated["id"], check_in_id);
    assert_eq!(repeated["checked_out_at"], checked_out_at.as_str());
}

#[tokio::test]
#[ignore]
async fn test_recent_check_ins_listing() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/check-ins?limit=5", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body.as_array().expect("Expected an array");
    assert!(items.len() <= 5);
    for item in items {
        assert!(item["visitor"]["visitor_id"].is_string());
        assert!(item["appointment"]["purpose"].is_string());
    }
}

#[tokio::test]
#[ignore]
async fn test_duplicate_employee_email() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let suffix = unique_suffix();
    let email = format!("dup.{}@example.com", suffix);

    let response = client
        .post(format!("{}/employees", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "First", "email": email }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/employees", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Second", "email": email }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_get_stats() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_visitors"].is_number());
    assert!(body["total_employees"].is_number());
    assert!(body["pending_appointments"].is_number());
    assert!(body["checked_in_now"].is_number());
    assert!(body["appointments"]["approved"].is_number());
}
