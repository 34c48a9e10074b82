mod common;

use common::{CSRF_TOKEN, logged_in_app, mount_csrf, mount_status, regular_employee, test_app};

use tk_client::{ClientError, Navigator};
use tk_core::ReportPeriod;

use googletest::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_rejecting(server: &MockServer, method_name: &str, route: &str, status: u16) {
    Mock::given(method(method_name))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({"detail": "denied"})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_csrf_cookie_when_posting_then_header_carries_token() {
    // Given: A primed session
    let server = MockServer::start().await;
    let (app, _) = logged_in_app(&server, regular_employee()).await;
    Mock::given(method("POST"))
        .and(path("/api/timerecords/checkin_checkout/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "ok"})),
        )
        .mount(&server)
        .await;

    // When: A state-changing call goes out
    app.api().check_in_out().await.unwrap();

    // Then: Every request after priming carried the token
    let requests = server.received_requests().await.unwrap();
    let check = requests
        .iter()
        .find(|r| r.url.path() == "/api/timerecords/checkin_checkout/")
        .unwrap();
    assert_that!(
        check.headers.get("X-CSRFToken").and_then(|v| v.to_str().ok()),
        some(eq(CSRF_TOKEN))
    );
}

#[tokio::test]
async fn given_no_csrf_cookie_when_requesting_then_sent_without_header() {
    // Given: Nothing has primed the jar
    let server = MockServer::start().await;
    mount_status(&server, None).await;
    let (app, _) = test_app(&server, "/");

    // When: The status probe is called directly
    let user = app.session().check_status().await;

    // Then: The request went out unmodified and was not blocked
    assert_that!(user, none());
    let requests = server.received_requests().await.unwrap();
    assert_that!(requests.len(), eq(1));
    assert!(requests[0].headers.get("X-CSRFToken").is_none());
}

#[tokio::test]
async fn given_logged_in_user_off_login_view_when_download_rejected_then_redirects_to_root() {
    // Given: A logged-in user on the reports view
    let server = MockServer::start().await;
    let (app, navigator) = logged_in_app(&server, regular_employee()).await;
    mount_rejecting(&server, "GET", "/api/reports/monthly_excel/", 401).await;
    let reports = app.mount_reports();
    assert_that!(navigator.current_path(), eq("/reports"));

    // When: The session is refused on a non-probe endpoint
    let result = reports.download(ReportPeriod::new(2024, 3).unwrap()).await;

    // Then: The caller sees Unauthorized, the user is cleared and the app
    // is sent back to the root
    assert!(matches!(
        result,
        Err(ClientError::Unauthorized {
            status: 401,
            expected: false,
            ..
        })
    ));
    assert_that!(app.session().current_user(), none());
    assert_eq!(navigator.redirects(), vec!["/".to_string()]);
    assert_that!(navigator.current_path(), eq("/"));
}

#[tokio::test]
async fn given_forbidden_admin_call_when_off_login_view_then_redirects() {
    let server = MockServer::start().await;
    let (app, navigator) = logged_in_app(&server, regular_employee()).await;
    mount_rejecting(&server, "GET", "/api/admin/system_stats/", 403).await;
    navigator.navigate("/admin");

    let result = app.api().system_stats().await;

    assert!(result.is_err());
    assert_eq!(navigator.redirects(), vec!["/".to_string()]);
}

#[tokio::test]
async fn given_login_view_showing_when_non_probe_rejected_then_no_redirect() {
    // Given: The visitor is on the login view
    let server = MockServer::start().await;
    let (app, navigator) = logged_in_app(&server, regular_employee()).await;
    mount_rejecting(&server, "POST", "/api/timerecords/checkin_checkout/", 401).await;

    // When: A non-probe endpoint refuses the session
    let result = app.api().check_in_out().await;

    // Then: The error propagates and the user is forgotten, but nothing
    // navigates
    assert!(result.is_err());
    assert_that!(app.session().current_user(), none());
    assert_that!(navigator.redirects(), is_empty());
    assert_that!(navigator.current_path(), eq("/"));
}

#[tokio::test]
async fn given_dashboard_polling_when_session_expires_then_user_cleared_without_redirect() {
    // Given: A logged-in user on the dashboard whose session has expired
    let server = MockServer::start().await;
    let (app, navigator) = logged_in_app(&server, regular_employee()).await;
    mount_rejecting(&server, "GET", "/api/timerecords/current_status/", 401).await;
    let dashboard = app.mount_dashboard();
    let mut changes = app.users().subscribe();

    // When: The status refresh keeps being refused
    for _ in 0..3 {
        dashboard.refresh_status().await;
    }

    // Then: Identity is dropped once and the view stays put
    assert_that!(app.session().current_user(), none());
    assert!(changes.has_changed().unwrap());
    assert!(changes.borrow_and_update().is_none());
    assert_that!(navigator.redirects(), is_empty());
    assert_that!(navigator.current_path(), eq("/"));
    dashboard.unmount();
}

#[tokio::test]
async fn given_probe_endpoint_rejected_off_login_view_then_no_redirect() {
    let server = MockServer::start().await;
    mount_csrf(&server).await;
    mount_rejecting(&server, "GET", "/api/employees/current/", 403).await;
    mount_rejecting(&server, "GET", "/api/auth/status/", 403).await;
    let (app, navigator) = test_app(&server, "/reports");
    app.session().initialize().await;

    let who_am_i = app.client().get("/employees/current/").await;

    assert!(matches!(
        who_am_i,
        Err(ClientError::Unauthorized { expected: true, .. })
    ));
    assert_that!(navigator.redirects(), is_empty());
}

#[tokio::test]
async fn given_server_error_when_requesting_then_passed_through_as_api_error() {
    let server = MockServer::start().await;
    let (app, navigator) = logged_in_app(&server, regular_employee()).await;
    Mock::given(method("GET"))
        .and(path("/api/timerecords/current_status/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "database unavailable"})),
        )
        .mount(&server)
        .await;
    navigator.navigate("/reports");

    let result = app.api().current_status().await;

    match result {
        Err(ClientError::Api {
            status, message, ..
        }) => {
            assert_that!(status, eq(500));
            assert_that!(message, eq("database unavailable"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_that!(navigator.redirects(), is_empty());
    assert_that!(app.session().current_user(), some(anything()));
}
