// templates/pages/home.rs

use crate::domain::{ParkingRecord, Report};
use crate::flash::Flash;
use crate::templates::{
    components::{capitalize, card, flash_banner, report_item},
    desktop_layout,
};
use maud::{html, Markup};

const ENTRY_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub struct HomeVm<'a> {
    pub flash: Option<Flash>,
    /// Vehicle types offered by the entry form.
    pub vehicle_types: Vec<&'a str>,
    pub parked: Vec<ParkingRecord>,
    pub report: Report,
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    desktop_layout(
        "Parking Ledger",
        html! {
            h1 { "Parking Ledger" }

            (flash_banner(vm.flash.as_ref()))

            (card("Register entry", html! {
                form method="post" action="/entry" {
                    input type="text" name="plate" placeholder="Plate (e.g. ABC1234)" required;
                    select name="type" required {
                        option value="" { "Select the vehicle type" }
                        @for vehicle_type in &vm.vehicle_types {
                            option value=(vehicle_type) { (capitalize(vehicle_type)) }
                        }
                    }
                    button type="submit" { "Register entry" }
                }
            }))

            (card("Register exit", html! {
                form method="post" action="/exit" {
                    input type="text" name="plate" placeholder="Plate (e.g. ABC1234)" required;
                    button type="submit" { "Register exit" }
                }
            }))

            (card("Parked vehicles", parked_table(&vm.parked)))

            (card("Billing report", html! {
                div class="report-box" {
                    @for (vehicle_type, line) in vm.report.iter() {
                        (report_item(vehicle_type, line))
                    }
                }
            }))
        },
    )
}

fn parked_table(parked: &[ParkingRecord]) -> Markup {
    html! {
        @if parked.is_empty() {
            p { "No vehicles parked right now." }
        } @else {
            table {
                thead {
                    tr {
                        th { "Plate" }
                        th { "Type" }
                        th { "Entry time" }
                    }
                }
                tbody {
                    @for record in parked {
                        tr {
                            td { (record.plate()) }
                            td { (record.vehicle_type()) }
                            td { (record.entry_time().format(ENTRY_TIME_FORMAT).to_string()) }
                        }
                    }
                }
            }
        }
    }
}
