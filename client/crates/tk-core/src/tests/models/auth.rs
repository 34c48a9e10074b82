use crate::{AuthStatus, LoginRequest, LoginResponse};

use serde_json::json;

#[test]
fn test_login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest {
        username: "e1",
        password: "secret",
    })
    .unwrap();

    assert_eq!(body, json!({"username": "e1", "password": "secret"}));
}

#[test]
fn test_login_response_failure_without_employee() {
    let response: LoginResponse =
        serde_json::from_value(json!({"success": false, "message": "Invalid credentials"}))
            .unwrap();

    assert!(!response.success);
    assert!(response.employee.is_none());
    assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn test_auth_status_authenticated_yields_user() {
    let status: AuthStatus = serde_json::from_value(json!({
        "authenticated": true,
        "employee": {
            "id": "1", "employee_id": "E1", "full_name": "A B",
            "department": "HR", "position": "Admin"
        }
    }))
    .unwrap();

    let user = status.into_user().unwrap();
    assert_eq!(user.employee_id, "E1");
}

#[test]
fn test_auth_status_unauthenticated_yields_none_even_with_employee() {
    let status: AuthStatus = serde_json::from_value(json!({
        "authenticated": false,
        "employee": {
            "id": "1", "employee_id": "E1", "full_name": "A B",
            "department": "HR", "position": "Admin"
        }
    }))
    .unwrap();

    assert!(status.into_user().is_none());
}
