// File: crates/sheet-export/src/lib.rs
// Summary: Spreadsheet export entry point; cell typing, records, workbook writer, selection and naming.

pub mod cell;
pub mod error;
pub mod naming;
pub mod paging;
pub mod record;
pub mod selection;
pub mod workbook;

pub use cell::{type_cell, Cell, FieldValue, TypeHint};
pub use error::{ExportError, ExportResult};
pub use naming::{export_file_name, export_file_name_now, XLS_MIME};
pub use paging::Pager;
pub use record::{ProjectRecord, RESULT_HEADERS};
pub use selection::{PageCheck, RowKey, SelectOutcome, SelectionState};
pub use workbook::{build_workbook, serialize, ExportOptions, Sheet, Workbook, DEFAULT_PREFIX};
