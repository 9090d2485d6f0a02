use crate::db::SqliteParkingRecordRepository;
use crate::domain::{ParkingError, ParkingRecordRepository, RecordId};
use crate::errors::ServerError;
use crate::flash::{clear_cookie, Flash};
use crate::responses::{css_response, html_response, json_response, see_other, ResultResp};
use crate::service::ParkingService;
use crate::spreadsheets::export_report_xlsx;
use crate::templates::pages::{home_page, HomeVm};
use astra::{Request, Response};
use serde_json::json;
use std::collections::HashMap;
use std::io::Read;
use tracing::{error, info, warn};

const STYLESHEET: &str = include_str!("../static/style.css");

/// Everything a request handler needs, shared by all workers.
pub struct AppState {
    pub service: ParkingService<SqliteParkingRecordRepository>,
    pub purge_on_exit: bool,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, state),
        ("POST", "/entry") => register_entry(req, state),
        ("POST", "/exit") => register_exit(req, state),
        ("GET", "/static/style.css") => css_response(STYLESHEET),
        ("GET", "/report.json") => json_response(200, &state.service.generate_report()?),
        ("GET", "/report.xlsx") => export_report_xlsx(&state.service.generate_report()?),
        ("DELETE", p) if p.starts_with("/records/") => {
            delete_record(&p["/records/".len()..], state)
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(req: &Request, state: &AppState) -> ResultResp {
    let flash = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(Flash::from_cookie_header);

    let vm = HomeVm {
        flash,
        vehicle_types: state.service.vehicle_types().collect(),
        parked: state.service.repository().find_all_active()?,
        report: state.service.generate_report()?,
    };

    // A flash is shown once.
    let cleared = vm.flash.as_ref().map(|_| clear_cookie());
    html_response(home_page(&vm), cleared)
}

fn register_entry(req: Request, state: &AppState) -> ResultResp {
    let form = parse_form(req)?;
    let plate = form_field(&form, "plate").to_uppercase();
    let vehicle_type = form_field(&form, "type").to_lowercase();

    let outcome = if plate.is_empty() || vehicle_type.is_empty() {
        Err(ParkingError::InvalidInput(
            "Plate and vehicle type are required.".into(),
        ))
    } else {
        state
            .service
            .register_entry(&plate, &vehicle_type)
            .map(|()| format!("Vehicle ({vehicle_type}) with plate {plate} entered."))
    };

    redirect_with_flash(outcome)
}

fn register_exit(req: Request, state: &AppState) -> ResultResp {
    let form = parse_form(req)?;
    let plate = form_field(&form, "plate").to_uppercase();

    let outcome = if plate.is_empty() {
        Err(ParkingError::InvalidInput(
            "Plate is required to register an exit.".into(),
        ))
    } else {
        exit_and_maybe_purge(&plate, state)
    };

    redirect_with_flash(outcome)
}

fn exit_and_maybe_purge(plate: &str, state: &AppState) -> Result<String, ParkingError> {
    let record = state.service.register_exit(plate)?;

    if state.purge_on_exit {
        if let Some(id) = record.id() {
            state.service.repository().delete(id)?;
        }
    }

    let cost = record.total_cost().unwrap_or_default();
    Ok(format!(
        "Vehicle with plate {} exited. Total cost: {}",
        record.plate(),
        crate::templates::components::format_money(cost)
    ))
}

/// User mistakes travel back as an error flash; storage failures become an error page.
fn redirect_with_flash(outcome: Result<String, ParkingError>) -> ResultResp {
    let flash = match outcome {
        Ok(message) => Flash::message(message),
        Err(err) if err.is_user_facing() => {
            warn!(%err, "request rejected");
            Flash::error(err.to_string())
        }
        Err(err) => return Err(err.into()),
    };

    see_other("/", Some(flash.to_cookie()))
}

fn delete_record(raw_id: &str, state: &AppState) -> ResultResp {
    let id = match raw_id.parse::<RecordId>() {
        Ok(id) if id > 0 => id,
        _ => {
            return json_response(
                400,
                &json!({ "success": false, "error": "A positive record id is required." }),
            )
        }
    };

    match state.service.repository().delete(id) {
        Ok(()) => {
            info!(id, "record deleted on request");
            json_response(200, &json!({ "success": true, "message": "Record deleted." }))
        }
        Err(err) => {
            error!(id, %err, "record delete failed");
            json_response(500, &json!({ "success": false, "error": err.to_string() }))
        }
    }
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn form_field<'a>(form: &'a HashMap<String, String>, name: &str) -> &'a str {
    form.get(name).map(|v| v.trim()).unwrap_or("")
}

/// Last-resort conversion used by the server loop.
pub fn error_page(err: ServerError) -> Response {
    if err.status() >= 500 {
        error!(%err, "request failed");
    }
    crate::responses::html_error_response(err)
}
