use crate::domain::Report;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 3] = ["Vehicle type", "Vehicles", "Total billed"];

/// Report as an in-memory workbook: one row per vehicle type plus a totals row.
pub fn report_workbook(report: &Report) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let money = Format::new().set_num_format("0.00");
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    let mut vehicles = 0;
    let mut billed = 0.0;
    let mut row = 1u32;

    for (vehicle_type, line) in report.iter() {
        worksheet
            .write_string(row, 0, vehicle_type)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write vehicle type: {}", e)))?;

        worksheet
            .write_number(row, 1, line.total_vehicles as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write vehicle count: {}", e)))?;

        worksheet
            .write_number_with_format(row, 2, line.total_cost, &money)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write total billed: {}", e)))?;

        vehicles += line.total_vehicles;
        billed += line.total_cost;
        row += 1;
    }

    worksheet
        .write_string_with_format(row, 0, "Total", &bold)
        .and_then(|ws| ws.write_number_with_format(row, 1, vehicles as f64, &bold))
        .and_then(|ws| ws.write_number_with_format(row, 2, billed, &money))
        .map_err(|e| ServerError::XlsxError(format!("Failed to write totals: {}", e)))?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_report_xlsx(report: &Report) -> ResultResp {
    let buffer = report_workbook(report)?;
    xlsx_response(buffer, "parking_report.xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workbook_is_a_zip_container() {
        let report = Report::with_types(["car", "motorcycle", "truck"]);
        let bytes = report_workbook(&report).unwrap();

        // xlsx files are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }
}
