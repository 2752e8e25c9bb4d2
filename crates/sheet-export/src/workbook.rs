// File: crates/sheet-export/src/workbook.rs
// Summary: Two-sheet workbook model (results + ragged curve columns) and its SpreadsheetML 2003 writer.

use std::io::Write;

use log::{debug, warn};
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::cell::{escape_text, type_cell, Cell, FieldValue, TypeHint};
use crate::error::ExportResult;
use crate::record::{ProjectRecord, RESULT_HEADERS};

pub const RESULT_SHEET: &str = "结果";
pub const CURVE_SHEET: &str = "曲线数据";
/// First header cell of the curve sheet.
pub const ROW_INDEX_LABEL: &str = "数据点序号";
/// File-name prefix used by the project list export.
pub const DEFAULT_PREFIX: &str = "项目导出";

const SPREADSHEET_NS: &str = "urn:schemas-microsoft-com:office:spreadsheet";
const NAMESPACES: [(&str, &str); 5] = [
    ("xmlns", SPREADSHEET_NS),
    ("xmlns:o", "urn:schemas-microsoft-com:office:office"),
    ("xmlns:x", "urn:schemas-microsoft-com:office:excel"),
    ("xmlns:ss", SPREADSHEET_NS),
    ("xmlns:html", "http://www.w3.org/TR/REC-html40"),
];

/// Export settings: sheet names and download prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    pub file_prefix: String,
    pub result_sheet: String,
    pub curve_sheet: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_prefix: DEFAULT_PREFIX.to_string(),
            result_sheet: RESULT_SHEET.to_string(),
            curve_sheet: CURVE_SHEET.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

/// Result sheet: the fixed header row, then one row per record.
pub fn result_sheet(name: &str, rows: &[ProjectRecord]) -> Sheet {
    let header = RESULT_HEADERS.iter().map(|h| Cell::String(h.to_string())).collect();
    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(header);
    for r in rows {
        out.push(r.result_fields().iter().map(|(v, hint)| type_cell(v, *hint)).collect());
    }
    Sheet { name: name.to_string(), rows: out }
}

/// Curve sheet: one column per curve under its sample number, rows indexed from 1.
/// Columns shorter than the tallest are padded with empty cells.
///
/// `curves[i]` must belong to `rows[i]`; the pairing is not checked.
pub fn curve_sheet(name: &str, rows: &[ProjectRecord], curves: &[Vec<f64>]) -> Sheet {
    let mut header = Vec::with_capacity(rows.len() + 1);
    header.push(Cell::String(ROW_INDEX_LABEL.to_string()));
    header.extend(rows.iter().map(|r| type_cell(&r.sample_no, Some(TypeHint::String))));

    let max_len = curves.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(max_len + 1);
    out.push(header);
    for i in 0..max_len {
        let mut row = Vec::with_capacity(curves.len() + 1);
        row.push(type_cell(&FieldValue::Number((i + 1) as f64), None));
        for col in curves {
            row.push(match col.get(i) {
                Some(&v) => type_cell(&FieldValue::Number(v), None),
                None => Cell::empty(),
            });
        }
        out.push(row);
    }
    Sheet { name: name.to_string(), rows: out }
}

pub fn build_workbook(rows: &[ProjectRecord], curves: &[Vec<f64>]) -> Workbook {
    build_workbook_with(rows, curves, &ExportOptions::default())
}

pub fn build_workbook_with(rows: &[ProjectRecord], curves: &[Vec<f64>], opts: &ExportOptions) -> Workbook {
    if rows.len() != curves.len() {
        warn!(
            "{} records but {} curves; curve columns will be mislabeled",
            rows.len(),
            curves.len()
        );
    }
    Workbook {
        sheets: vec![
            result_sheet(&opts.result_sheet, rows),
            curve_sheet(&opts.curve_sheet, rows, curves),
        ],
    }
}

/// Build and serialize in one step.
pub fn serialize(rows: &[ProjectRecord], curves: &[Vec<f64>]) -> ExportResult<String> {
    build_workbook(rows, curves).to_xml()
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Write the SpreadsheetML document to `inner`.
    pub fn write_to<W: Write>(&self, inner: W) -> ExportResult<()> {
        let mut w = XmlSheetWriter::new(inner);
        w.write_workbook(self)
    }

    pub fn to_xml(&self) -> ExportResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        let xml = String::from_utf8(buf)?;
        debug!(
            "serialized workbook: {} sheets, rows {:?}, {} bytes",
            self.sheets.len(),
            self.sheets.iter().map(|s| s.rows.len()).collect::<Vec<_>>(),
            xml.len()
        );
        Ok(xml)
    }
}

struct XmlSheetWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlSheetWriter<W> {
    fn new(inner: W) -> Self {
        Self { writer: Writer::new_with_indent(inner, b' ', 2) }
    }

    fn emit(&mut self, event: Event<'_>) -> ExportResult<()> {
        self.writer.write_event(event)?;
        Ok(())
    }

    fn start(&mut self, elem: BytesStart<'_>) -> ExportResult<()> {
        self.emit(Event::Start(elem))
    }

    fn end(&mut self, name: &str) -> ExportResult<()> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    fn write_workbook(&mut self, book: &Workbook) -> ExportResult<()> {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.emit(Event::PI(BytesPI::new(r#"mso-application progid="Excel.Sheet""#)))?;

        let mut root = BytesStart::new("Workbook");
        for attr in NAMESPACES {
            root.push_attribute(attr);
        }
        self.start(root)?;
        for sheet in &book.sheets {
            self.write_sheet(sheet)?;
        }
        self.end("Workbook")
    }

    fn write_sheet(&mut self, sheet: &Sheet) -> ExportResult<()> {
        let mut ws = BytesStart::new("Worksheet");
        ws.push_attribute(("ss:Name", sheet.name.as_str()));
        self.start(ws)?;
        self.start(BytesStart::new("Table"))?;
        for row in &sheet.rows {
            self.start(BytesStart::new("Row"))?;
            for cell in row {
                self.write_cell(cell)?;
            }
            self.end("Row")?;
        }
        self.end("Table")?;
        self.end("Worksheet")
    }

    fn write_cell(&mut self, cell: &Cell) -> ExportResult<()> {
        self.start(BytesStart::new("Cell"))?;
        let mut data = BytesStart::new("Data");
        data.push_attribute(("ss:Type", cell.ss_type()));
        self.start(data)?;
        // text event even when empty: no indentation whitespace may land inside Data
        let text = cell.data_text();
        self.emit(Event::Text(BytesText::from_escaped(escape_text(&text))))?;
        self.end("Data")?;
        self.end("Cell")
    }
}
