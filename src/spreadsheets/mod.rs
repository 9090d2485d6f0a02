pub mod report_xlsx;

pub use report_xlsx::{export_report_xlsx, report_workbook};
