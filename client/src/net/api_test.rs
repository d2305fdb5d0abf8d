use super::*;

#[test]
fn login_endpoint_appends_login() {
    assert_eq!(login_endpoint("https://erp.example.com/api"), "https://erp.example.com/api/login");
    assert_eq!(login_endpoint("https://erp.example.com/api/"), "https://erp.example.com/api/login");
}

#[test]
fn role_endpoint_is_slug_prefixed() {
    assert_eq!(
        role_endpoint("https://erp.example.com/api", Role::SuperAdmin, "logout"),
        "https://erp.example.com/api/super-admin/logout"
    );
    assert_eq!(
        role_endpoint("https://erp.example.com/api/", Role::SupplierFinance, "/invoices"),
        "https://erp.example.com/api/supplier-finance/invoices"
    );
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn failure_prefers_backend_message() {
    assert_eq!(
        failure_from_body(401, r#"{"message":"Invalid username or password"}"#),
        AuthError::Rejected { status: 401, message: "Invalid username or password".to_owned() }
    );
}

#[test]
fn failure_without_message_reports_status() {
    assert_eq!(failure_from_body(500, "<html>oops</html>"), AuthError::Status(500));
    assert_eq!(failure_from_body(422, r#"{"message":"  "}"#), AuthError::Status(422));
    assert_eq!(failure_from_body(503, ""), AuthError::Status(503));
}

#[test]
fn rejected_error_displays_backend_message() {
    let err = failure_from_body(403, r#"{"message":"Account disabled"}"#);
    assert_eq!(err.to_string(), "Account disabled");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_off_browser() {
    let api = HttpAuthApi::new("http://localhost:8000/api");
    let creds = LoginRequest { username: "u".to_owned(), password: "p".to_owned() };
    assert_eq!(futures::executor::block_on(api.login(&creds)), Err(AuthError::Unavailable));
    assert_eq!(futures::executor::block_on(api.logout(Role::Finance, "tok")), Err(AuthError::Unavailable));
}
