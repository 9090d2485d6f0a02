mod delete_tests;
mod parking_tests;
mod report_tests;

use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub(super) fn post_form(state: &AppState, path: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();

    handle(req, state).expect("Handler failed")
}

pub(super) fn get(state: &AppState, path: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }

    handle(builder.body(Body::empty()).unwrap(), state).expect("Handler failed")
}

pub(super) fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// `name=value` part of the response's Set-Cookie header.
pub(super) fn set_cookie(resp: &Response) -> String {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .unwrap_or("")
        .to_string()
}

/// Follow a post/redirect/get and return the rendered page.
pub(super) fn follow(state: &AppState, resp: &Response) -> String {
    assert_eq!(resp.status(), 303, "Should redirect after a form post");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );
    let cookie = set_cookie(resp);
    body_string(get(state, "/", Some(&cookie)))
}
