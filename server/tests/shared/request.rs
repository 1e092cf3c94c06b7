use axum::{body::Body, http::Request};

pub fn health() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(Body::empty())
        .expect("unable to build request")
}

pub fn list_visitors() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/users")
        .body(Body::empty())
        .expect("unable to build request")
}

pub fn create_visitor(name: &str, reason: &str) -> Request<Body> {
    raw_create_visitor(serde_json::json!({ "name": name, "reason": reason }).to_string())
}

pub fn raw_create_visitor(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .expect("unable to build request")
}

pub fn create_visitor_with_content_type(
    content_type: Option<&str>,
    body: impl Into<String>,
) -> Request<Body> {
    let mut req = Request::builder().method("POST").uri("/api/users");

    if let Some(content_type) = content_type {
        req = req.header("content-type", content_type);
    }

    req.body(Body::from(body.into()))
        .expect("unable to build request")
}
