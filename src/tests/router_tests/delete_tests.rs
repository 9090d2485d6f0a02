use super::body_string;
use crate::domain::{ParkingRecord, ParkingRecordRepository};
use crate::router::handle;
use crate::tests::utils::test_state;
use astra::Body;
use http::{Method, Request};

fn delete(state: &crate::router::AppState, path: &str) -> (u16, serde_json::Value) {
    let req = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, state).expect("Handler failed");
    let status = resp.status().as_u16();
    let json = serde_json::from_str(&body_string(resp)).unwrap();
    (status, json)
}

#[test]
fn delete_removes_record() {
    let state = test_state(false);
    let id = state
        .service
        .repository()
        .save_entry(&ParkingRecord::create_entry("ABC1234", "car"))
        .unwrap();

    let (status, json) = delete(&state, &format!("/records/{id}"));

    assert_eq!(status, 200);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Record deleted.");
    assert!(state.service.repository().find_all().unwrap().is_empty());
}

#[test]
fn delete_rejects_bad_ids() {
    let state = test_state(false);

    for path in ["/records/0", "/records/-3", "/records/abc", "/records/"] {
        let (status, json) = delete(&state, path);
        assert_eq!(status, 400, "{path}");
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("record id"));
    }
}
