// File: crates/sheet-export/src/record.rs
// Summary: Detection result record, the fixed result-sheet vocabulary, and display formatting.

use serde::{Deserialize, Serialize};

use crate::cell::{to_fixed, FieldValue, TypeHint};

/// Result-sheet header labels, in column order. Downstream consumers match
/// on these exact strings.
pub const RESULT_HEADERS: [&str; 16] = [
    "项目名称",
    "样品编号",
    "样品来源",
    "样品名称",
    "标准曲线",
    "批次号",
    "检测浓度",
    "参考值",
    "C",
    "T",
    "C/T比值",
    "检测结果",
    "检测时间",
    "检测单位",
    "检测人",
    "稀释倍数",
];

/// One detection result as listed by the project endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub id: FieldValue,
    pub project_name: FieldValue,
    pub sample_no: FieldValue,
    pub sample_source: FieldValue,
    pub sample_name: FieldValue,
    pub standard_curve: FieldValue,
    pub batch_code: FieldValue,
    pub detected_conc: FieldValue,
    pub reference_value: FieldValue,
    #[serde(rename = "C")]
    pub c: FieldValue,
    #[serde(rename = "T")]
    pub t: FieldValue,
    /// The backend spells the C/T ratio `radio`; `ratio` is accepted too.
    pub radio: FieldValue,
    pub ratio: FieldValue,
    pub result: FieldValue,
    pub detected_time: FieldValue,
    pub detected_unit: FieldValue,
    pub detected_person: FieldValue,
    pub dilution_info: FieldValue,
}

impl ProjectRecord {
    /// C/T ratio: `radio` unless null, then `ratio`.
    pub fn ct_ratio(&self) -> &FieldValue {
        if self.radio.is_null() { &self.ratio } else { &self.radio }
    }

    pub fn unit(&self) -> String { self.detected_unit.to_text().into_owned() }

    /// Result-sheet cells in [`RESULT_HEADERS`] order, with their forced types.
    /// Concentration and reference value become `"<value> <unit>"` text; the
    /// sample number stays text to keep leading zeros.
    pub fn result_fields(&self) -> Vec<(FieldValue, Option<TypeHint>)> {
        let unit = self.unit();
        let inferred = |v: &FieldValue| (v.clone(), None);
        vec![
            inferred(&self.project_name),
            (self.sample_no.clone(), Some(TypeHint::String)),
            inferred(&self.sample_source),
            inferred(&self.sample_name),
            inferred(&self.standard_curve),
            inferred(&self.batch_code),
            (with_unit(&self.detected_conc, &unit).into(), Some(TypeHint::String)),
            (with_unit(&self.reference_value, &unit).into(), Some(TypeHint::String)),
            inferred(&self.c),
            inferred(&self.t),
            inferred(self.ct_ratio()),
            inferred(&self.result),
            inferred(&self.detected_time),
            inferred(&self.detected_unit),
            inferred(&self.detected_person),
            inferred(&self.dilution_info),
        ]
    }
}

/// Three decimals, halves rounded away from zero; `0.000` when the value is
/// not a finite number.
pub fn format_fixed3(v: &FieldValue) -> String {
    to_fixed(v.coerce_number().unwrap_or(0.0), 3)
}

/// `"<fixed3> <unit>"`, trimmed when the unit is empty.
pub fn with_unit(v: &FieldValue, unit: &str) -> String {
    format!("{} {}", format_fixed3(v), unit).trim().to_string()
}

fn or_dash(v: &FieldValue) -> String {
    match v {
        FieldValue::Null => "-".to_string(),
        other => other.to_text().into_owned(),
    }
}

/// Labelled fields of the sample detail view, in [`RESULT_HEADERS`] order.
pub fn detail_fields(r: &ProjectRecord) -> Vec<(&'static str, String)> {
    let unit = r.unit();
    let values = [
        or_dash(&r.project_name),
        or_dash(&r.sample_no),
        or_dash(&r.sample_source),
        or_dash(&r.sample_name),
        or_dash(&r.standard_curve),
        or_dash(&r.batch_code),
        with_unit(&r.detected_conc, &unit),
        with_unit(&r.reference_value, &unit),
        format_fixed3(&r.c),
        format_fixed3(&r.t),
        format_fixed3(r.ct_ratio()),
        or_dash(&r.result),
        or_dash(&r.detected_time),
        if unit.is_empty() { "-".to_string() } else { unit.clone() },
        or_dash(&r.detected_person),
        or_dash(&r.dilution_info),
    ];
    RESULT_HEADERS.into_iter().zip(values).collect()
}
