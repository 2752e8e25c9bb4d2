// File: crates/sheet-export/tests/workbook.rs
// Purpose: Serialize workbooks and read them back with an XML reader to check sheet structure.

use quick_xml::events::Event;
use quick_xml::Reader;
use sheet_export::workbook::{curve_sheet, CURVE_SHEET, RESULT_SHEET, ROW_INDEX_LABEL};
use sheet_export::{build_workbook, serialize, Cell, ExportError, FieldValue, ProjectRecord, RESULT_HEADERS};

/// (sheet name, rows of (ss:Type, text))
type Parsed = Vec<(String, Vec<Vec<(String, String)>>)>;

fn parse(xml: &str) -> Parsed {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut sheets: Parsed = Vec::new();
    let mut cell_type = String::new();
    let mut cell_text = String::new();
    loop {
        match reader.read_event().expect("well-formed xml") {
            Event::Start(e) => match e.name().as_ref() {
                b"Worksheet" => {
                    let name = e.try_get_attribute("ss:Name").unwrap().expect("ss:Name");
                    sheets.push((name.unescape_value().unwrap().into_owned(), Vec::new()));
                }
                b"Row" => sheets.last_mut().unwrap().1.push(Vec::new()),
                b"Data" => {
                    let t = e.try_get_attribute("ss:Type").unwrap().expect("ss:Type");
                    cell_type = t.unescape_value().unwrap().into_owned();
                    cell_text.clear();
                }
                _ => {}
            },
            Event::Text(t) => cell_text.push_str(&t.unescape().unwrap()),
            Event::End(e) if e.name().as_ref() == b"Data" => {
                let row = sheets.last_mut().unwrap().1.last_mut().unwrap();
                row.push((cell_type.clone(), cell_text.clone()));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    sheets
}

fn record(sample_no: &str, conc: f64) -> ProjectRecord {
    ProjectRecord {
        project_name: "CRP".into(),
        sample_no: sample_no.into(),
        batch_code: "B-01".into(),
        detected_conc: FieldValue::Number(conc),
        reference_value: FieldValue::Number(10.0),
        detected_unit: "mg/L".into(),
        c: FieldValue::Number(1.25),
        t: "0.5".into(),
        radio: FieldValue::Number(2.5),
        result: "阴性".into(),
        detected_time: "2025-03-01 09:30:00".into(),
        ..Default::default()
    }
}

#[test]
fn document_prolog_and_namespaces() {
    let xml = serialize(&[], &[]).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<?mso-application progid="Excel.Sheet"?>"#));
    for ns in [
        r#"xmlns="urn:schemas-microsoft-com:office:spreadsheet""#,
        r#"xmlns:o="urn:schemas-microsoft-com:office:office""#,
        r#"xmlns:x="urn:schemas-microsoft-com:office:excel""#,
        r#"xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet""#,
        r#"xmlns:html="http://www.w3.org/TR/REC-html40""#,
    ] {
        assert!(xml.contains(ns), "missing {ns}");
    }
    assert!(xml.trim_end().ends_with("</Workbook>"));

    let sheets = parse(&xml);
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].0, RESULT_SHEET);
    assert_eq!(sheets[1].0, CURVE_SHEET);
    // header rows only
    assert_eq!(sheets[0].1.len(), 1);
    assert_eq!(sheets[1].1, vec![vec![("String".to_string(), ROW_INDEX_LABEL.to_string())]]);
}

#[test]
fn result_sheet_rows_and_types() {
    let rows = [record("007", 3.14159), record("008", 0.0)];
    let xml = serialize(&rows, &[vec![], vec![]]).unwrap();
    let sheets = parse(&xml);
    let results = &sheets[0].1;
    assert_eq!(results.len(), rows.len() + 1);

    let header: Vec<&str> = results[0].iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(header, RESULT_HEADERS);

    let first = &results[1];
    assert_eq!(first.len(), 16);
    assert_eq!(first[0], ("String".into(), "CRP".into()));
    assert_eq!(first[1], ("String".into(), "007".into()));
    assert_eq!(first[6], ("String".into(), "3.142 mg/L".into()));
    assert_eq!(first[7], ("String".into(), "10.000 mg/L".into()));
    assert_eq!(first[8], ("Number".into(), "1.25".into()));
    assert_eq!(first[9], ("Number".into(), "0.5".into()));
    assert_eq!(first[10], ("Number".into(), "2.5".into()));
    assert_eq!(first[12], ("String".into(), "2025-03-01 09:30:00".into()));
    assert_eq!(first[13], ("String".into(), "mg/L".into()));
    // missing fields become empty text
    assert_eq!(first[15], ("String".into(), String::new()));
}

#[test]
fn concentration_halves_round_up_in_result_sheet() {
    let sheets = parse(&serialize(&[record("S1", 0.0625)], &[vec![]]).unwrap());
    assert_eq!(sheets[0].1[1][6], ("String".into(), "0.063 mg/L".into()));
}

#[test]
fn ragged_curve_columns_are_padded() {
    let rows = [record("S1", 1.0), record("S2", 2.0)];
    let curves = vec![vec![1.0, 2.0, 3.0], vec![5.0, 6.0]];
    let sheets = parse(&serialize(&rows, &curves).unwrap());
    let curve_rows = &sheets[1].1;

    assert_eq!(curve_rows.len(), 4, "header + 3 body rows");
    assert_eq!(
        curve_rows[0],
        vec![
            ("String".to_string(), ROW_INDEX_LABEL.to_string()),
            ("String".to_string(), "S1".to_string()),
            ("String".to_string(), "S2".to_string()),
        ]
    );
    assert_eq!(curve_rows[1][0], ("Number".into(), "1".into()));
    assert_eq!(curve_rows[2][2], ("Number".into(), "6".into()));
    let last = &curve_rows[3];
    assert_eq!(last[0], ("Number".into(), "3".into()));
    assert_eq!(last[1], ("Number".into(), "3".into()));
    assert_eq!(last[2], ("String".into(), String::new()));
}

#[test]
fn special_characters_are_escaped() {
    let mut r = record("<A&B>", 1.0);
    r.sample_name = r#"he said "hi" & 'bye'"#.into();
    let xml = serialize(&[r], &[vec![1.0]]).unwrap();
    assert!(xml.contains("&lt;A&amp;B&gt;"));
    assert!(!xml.contains("<A&B>"));

    let sheets = parse(&xml);
    assert_eq!(sheets[0].1[1][1].1, "<A&B>");
    assert_eq!(sheets[0].1[1][3].1, r#"he said "hi" & 'bye'"#);
    assert_eq!(sheets[1].1[0][1].1, "<A&B>");
}

#[test]
fn empty_cells_have_no_whitespace() {
    let xml = serialize(&[record("S1", 1.0), record("S2", 1.0)], &[vec![1.0, 2.0], vec![]]).unwrap();
    assert!(xml.contains(r#"<Data ss:Type="String"></Data>"#));
}

#[test]
fn mismatched_lengths_still_serialize() {
    // caller contract: one curve per record; a missing curve leaves a header without data
    let book = build_workbook(&[record("S1", 1.0), record("S2", 1.0)], &[vec![9.0]]);
    let curves = book.sheet(CURVE_SHEET).unwrap();
    assert_eq!(curves.rows[0].len(), 3);
    assert_eq!(curves.rows[1].len(), 2);
    assert!(book.to_xml().is_ok());
}

#[test]
fn curve_sheet_numbers_rows_from_one() {
    let sheet = curve_sheet("c", &[record("S1", 0.0)], &[vec![0.25; 4]]);
    let idx: Vec<f64> = sheet.rows[1..].iter().filter_map(|r| r[0].as_number()).collect();
    assert_eq!(idx, [1.0, 2.0, 3.0, 4.0]);
    assert!(sheet.rows[1..].iter().all(|r| r[1] == Cell::Number(0.25)));
}

#[test]
fn records_deserialize_from_list_payload() {
    let json = r#"{"id": 17, "sampleNo": "0012", "detectedConc": "4.5", "C": 1, "ratio": 0.8, "detectedUnit": null}"#;
    let r: ProjectRecord = serde_json::from_str(json).unwrap();
    assert_eq!(r.id, FieldValue::Number(17.0));
    assert_eq!(r.sample_no, FieldValue::Text("0012".into()));
    assert_eq!(r.ct_ratio(), &FieldValue::Number(0.8));
    assert!(r.detected_unit.is_null());

    let fields = r.result_fields();
    assert_eq!(fields[6].0, FieldValue::Text("4.500".into()));
}

/// Sink that refuses every write, like a full disk.
struct FullDisk;

impl std::io::Write for FullDisk {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "no space left"))
    }
    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

#[test]
fn sink_failure_surfaces_as_io_error() {
    let book = build_workbook(&[record("S1", 1.0)], &[vec![1.0]]);
    match book.write_to(FullDisk) {
        Err(ExportError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::WriteZero),
        other => panic!("expected an io error, got {other:?}"),
    }
}
