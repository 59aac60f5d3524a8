use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::slug::slugify;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a spreadsheet row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value as it comes out of a spreadsheet, CSV or
/// JSON source.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            // Spreadsheets store every number as a float; `3.0` reads back as "3".
            CellValue::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Text form of the cell, `None` when it renders empty.
    pub fn as_text(&self) -> Option<String> {
        let text = self.to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// One untyped row: column header → cell. Blank cells are absent.
pub type RawRow = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Course – one normalized catalog entry
// ---------------------------------------------------------------------------

/// A training course in canonical form.
///
/// Every field is a plain string; missing spreadsheet values are empty
/// strings, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Zero-based source row index. Only stable within one load.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Top-level subject area, may be empty.
    pub knowledge_zone: String,
    /// Level tier label (free text), may be empty.
    pub section: String,
}

impl Course {
    /// URL slug derived from the title alone.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_render_without_fraction() {
        assert_eq!(CellValue::Float(3.0).to_string(), "3");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Integer(-7).to_string(), "-7");
    }

    #[test]
    fn null_and_empty_strings_have_no_text() {
        assert_eq!(CellValue::Null.as_text(), None);
        assert_eq!(CellValue::String(String::new()).as_text(), None);
        assert_eq!(
            CellValue::String("Pricing".into()).as_text().as_deref(),
            Some("Pricing")
        );
    }

    #[test]
    fn course_serializes_in_camel_case() {
        let course = Course {
            id: "0".into(),
            title: "A".into(),
            knowledge_zone: "Pricing".into(),
            ..Course::default()
        };
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["knowledgeZone"], "Pricing");
        assert_eq!(json["section"], "");
    }
}
