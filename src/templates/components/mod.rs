use maud::{html, Markup};

use crate::domain::ReportLine;
use crate::flash::Flash;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn flash_banner(flash: Option<&Flash>) -> Markup {
    html! {
        @if let Some(flash) = flash {
            @if flash.is_error() {
                div class="error" role="alert" { (flash.text) }
            } @else {
                div class="message" role="status" { (flash.text) }
            }
        }
    }
}

/// One box of the billing report.
pub fn report_item(vehicle_type: &str, line: &ReportLine) -> Markup {
    html! {
        div class="report-item" {
            h3 { (capitalize(vehicle_type)) }
            p { "Total vehicles: " strong { (line.total_vehicles) } }
            p { "Total billed: " strong { (format_money(line.total_cost)) } }
        }
    }
}

/// Two decimals, the only place a cost gets rounded.
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
