use super::{body_string, follow, get, post_form, set_cookie};
use crate::domain::ParkingRecordRepository;
use crate::tests::utils::test_state;

#[test]
fn home_page_lists_forms_and_empty_lot() {
    let state = test_state(false);

    let resp = get(&state, "/", None);

    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("Set-Cookie").is_none());
    let body = body_string(resp);
    assert!(body.contains("Register entry"));
    assert!(body.contains("Register exit"));
    assert!(body.contains("No vehicles parked right now."));
    assert!(body.contains(r#"option value="motorcycle""#));
}

#[test]
fn entry_is_listed_with_success_flash() {
    let state = test_state(false);

    let resp = post_form(&state, "/entry", "plate=+abc1234+&type=Car");
    let page = follow(&state, &resp);

    assert!(page.contains("Vehicle (car) with plate ABC1234 entered."));
    assert!(page.contains(r#"class="message""#));
    assert!(page.contains("<td>ABC1234</td>"));
    assert!(state
        .service
        .repository()
        .find_active_by_plate("ABC1234")
        .unwrap()
        .is_some());
}

#[test]
fn flash_is_cleared_once_shown() {
    let state = test_state(false);
    let resp = post_form(&state, "/entry", "plate=ABC1234&type=car");
    let cookie = set_cookie(&resp);

    let shown = get(&state, "/", Some(&cookie));

    assert_eq!(set_cookie(&shown), "flash=");
}

#[test]
fn duplicate_entry_shows_conflict_error() {
    let state = test_state(false);
    post_form(&state, "/entry", "plate=ABC1234&type=car");

    let resp = post_form(&state, "/entry", "plate=abc1234&type=truck");
    let page = follow(&state, &resp);

    assert!(page.contains(r#"class="error""#));
    assert!(page.contains("Vehicle with plate ABC1234 is already parked."));
    assert_eq!(state.service.repository().find_all().unwrap().len(), 1);
}

#[test]
fn entry_without_fields_is_rejected() {
    let state = test_state(false);

    let resp = post_form(&state, "/entry", "plate=&type=car");
    let page = follow(&state, &resp);

    assert!(page.contains("Plate and vehicle type are required."));
    assert!(state.service.repository().find_all().unwrap().is_empty());
}

#[test]
fn exit_reports_cost_and_keeps_record_for_report() {
    let state = test_state(false);
    post_form(&state, "/entry", "plate=ABC1234&type=car");

    let resp = post_form(&state, "/exit", "plate=abc1234");
    let page = follow(&state, &resp);

    // Exit follows entry within the same hour.
    assert!(page.contains("Vehicle with plate ABC1234 exited. Total cost: "));
    assert!(page.contains("No vehicles parked right now."));
    let all = state.service.repository().find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].is_active());
}

#[test]
fn exit_purges_record_when_configured() {
    let state = test_state(true);
    post_form(&state, "/entry", "plate=ABC1234&type=car");

    let resp = post_form(&state, "/exit", "plate=ABC1234");
    follow(&state, &resp);

    assert!(state.service.repository().find_all().unwrap().is_empty());
}

#[test]
fn exit_for_unknown_plate_shows_not_parked() {
    let state = test_state(false);

    let resp = post_form(&state, "/exit", "plate=NOPE123");
    let page = follow(&state, &resp);

    assert!(page.contains("Vehicle with plate NOPE123 is not parked."));
}

#[test]
fn exit_without_plate_is_rejected() {
    let state = test_state(false);

    let resp = post_form(&state, "/exit", "plate=%20%20");
    let page = follow(&state, &resp);

    assert!(page.contains("Plate is required to register an exit."));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(false);
    let req = http::Request::builder()
        .method(http::Method::GET)
        .uri("/nowhere")
        .body(astra::Body::empty())
        .unwrap();

    match crate::router::handle(req, &state) {
        Err(err) => assert_eq!(err.status(), 404),
        Ok(resp) => panic!("expected 404, got status {}", resp.status()),
    }
}

#[test]
fn stylesheet_is_served() {
    let state = test_state(false);

    let resp = get(&state, "/static/style.css", None);

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}
