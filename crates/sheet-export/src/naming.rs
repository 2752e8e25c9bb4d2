// File: crates/sheet-export/src/naming.rs
// Summary: Download file naming and MIME type for exported workbooks.

use chrono::{Local, NaiveDateTime};

/// MIME type served with the `.xls` download.
pub const XLS_MIME: &str = "application/vnd.ms-excel;charset=utf-8;";

/// `<prefix>_<yyyyMMdd_HHmmss>.xls`
pub fn export_file_name(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.xls", prefix, at.format("%Y%m%d_%H%M%S"))
}

/// File name stamped with the local wall-clock time.
pub fn export_file_name_now(prefix: &str) -> String {
    export_file_name(prefix, Local::now().naive_local())
}
