use super::{body_string, get};
use crate::domain::{ParkingRecord, ParkingRecordRepository};
use crate::tests::utils::test_state;
use chrono::{Duration, NaiveDate};

fn seed_scenario(state: &crate::router::AppState) {
    let t0 = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let repo = state.service.repository();

    state
        .service
        .register_entry_at("ABC1234", "car", t0)
        .unwrap();
    state
        .service
        .register_exit_at("ABC1234", t0 + Duration::minutes(90))
        .unwrap();
    state
        .service
        .register_entry_at("MOTO001", "motorcycle", t0)
        .unwrap();
    // Legacy row with a type the pricing table does not know.
    repo.save_entry(&ParkingRecord::create_entry_at("OLD0001", "carro", t0))
        .unwrap();
}

#[test]
fn report_json_counts_and_sums_per_type() {
    let state = test_state(false);
    seed_scenario(&state);

    let resp = get(&state, "/report.json", None);

    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "car": { "total_vehicles": 1, "total_cost": 10.0 },
            "motorcycle": { "total_vehicles": 1, "total_cost": 0.0 },
            "truck": { "total_vehicles": 0, "total_cost": 0.0 }
        })
    );
}

#[test]
fn home_page_renders_report_with_two_decimals() {
    let state = test_state(false);
    seed_scenario(&state);

    let body = body_string(get(&state, "/", None));

    assert!(body.contains("Billing report"));
    assert!(body.contains("<h3>Car</h3>"));
    assert!(body.contains("10.00"));
    assert!(body.contains("<td>MOTO001</td>"));
    assert!(!body.contains("<h3>Carro</h3>"));
}

#[test]
fn report_xlsx_is_an_attachment() {
    let state = test_state(false);
    seed_scenario(&state);

    let resp = get(&state, "/report.xlsx", None);

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"parking_report.xlsx\""
    );
}
