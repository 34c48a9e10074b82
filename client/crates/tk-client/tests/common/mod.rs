#![allow(dead_code)]

use tk_client::{App, InMemoryNavigator, Navigator, Pipeline};
use tk_config::Config;

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CSRF_TOKEN: &str = "test-csrf-token";

/// Config pointing at the mock server, with fast timers
pub fn test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.base_url = format!("{}/api", server.uri());
    config.api.timeout_secs = 5;
    config.polling.status_refresh_secs = 1;
    config.polling.clock_tick_ms = 100;
    config.polling.message_dismiss_secs = 1;
    config
}

pub fn test_app(server: &MockServer, initial_path: &str) -> (App, Arc<InMemoryNavigator>) {
    test_app_with(server, initial_path, |_| {})
}

pub fn test_app_with<F>(
    server: &MockServer,
    initial_path: &str,
    extend: F,
) -> (App, Arc<InMemoryNavigator>)
where
    F: FnOnce(&mut Pipeline),
{
    let navigator = Arc::new(InMemoryNavigator::new(initial_path));
    let app = App::with_pipeline(
        &test_config(server),
        navigator.clone() as Arc<dyn Navigator>,
        extend,
    )
    .unwrap();
    (app, navigator)
}

pub fn employee_json(employee_id: &str, department: &str, position: &str) -> Value {
    json!({
        "id": "1",
        "employee_id": employee_id,
        "full_name": "A B",
        "department": department,
        "position": position
    })
}

pub fn regular_employee() -> Value {
    employee_json("E1", "ENGINEERING", "Developer")
}

pub fn admin_employee() -> Value {
    employee_json("ADMIN001", "HR", "System Administrator")
}

pub async fn mount_csrf(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/csrf/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("csrftoken={CSRF_TOKEN}; Path=/").as_str())
                .set_body_json(json!({"detail": "CSRF cookie set"})),
        )
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, employee: Option<Value>) {
    let body = match employee {
        Some(employee) => json!({"authenticated": true, "employee": employee}),
        None => json!({"authenticated": false}),
    };

    Mock::given(method("GET"))
        .and(path("/api/auth/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_login(server: &MockServer, employee: Value) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "employee": employee})),
        )
        .mount(server)
        .await;
}

pub fn current_status_json(status: &str) -> Value {
    json!({
        "status": status,
        "record": null
    })
}

pub async fn mount_current_status(server: &MockServer, status: &str) {
    Mock::given(method("GET"))
        .and(path("/api/timerecords/current_status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_status_json(status)))
        .mount(server)
        .await;
}

/// Bootstrap, then log in as `employee`
pub async fn logged_in_app(server: &MockServer, employee: Value) -> (App, Arc<InMemoryNavigator>) {
    mount_csrf(server).await;
    mount_status(server, None).await;
    mount_login(server, employee).await;

    let (app, navigator) = test_app(server, "/");
    app.session().initialize().await;
    assert!(app.session().login("e1", "secret").await);
    (app, navigator)
}
