//! Worksheet row parsing.
//!
//! Walks a worksheet's `<sheetData>` and produces one sparse [`RawRow`] per
//! `<row>` element, in document order. Row position is semantically
//! load-bearing downstream (header/question/separator convention), so empty
//! rows are kept in the sequence rather than dropped.

use log::debug;

use crate::error::{Error, Result};
use crate::model::RawRow;

use super::cellref::split_cell_ref;
use super::shared_strings::SharedStrings;

/// How a cell's stored value is to be interpreted, per its `t` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    /// `t="s"`: the value node is an index into the shared string pool.
    Shared,
    /// `t="inlineStr"`: the text lives inline under `<is>`.
    Inline,
    /// Anything else (numeric, boolean, formula cache, no type): the value
    /// node's raw text is taken verbatim.
    Literal,
}

impl CellKind {
    fn from_attr(t: Option<&str>) -> Self {
        match t {
            Some("s") => CellKind::Shared,
            Some("inlineStr") => CellKind::Inline,
            _ => CellKind::Literal,
        }
    }
}

/// Parse worksheet XML into a sequence of sparse rows.
pub fn parse_worksheet(xml: &str, shared: &SharedStrings) -> Result<Vec<RawRow>> {
    let mut rows: Vec<RawRow> = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut in_row = false;
    let mut in_cell = false;
    let mut in_inline = false;
    let mut in_text = false;
    let mut current_row = RawRow::new();
    let mut cell_col: Option<usize> = None;
    let mut cell_kind = CellKind::Literal;
    let mut cell_raw = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e)) => match e.name().as_ref() {
                b"row" => {
                    in_row = true;
                    current_row = RawRow::new();
                }
                b"c" if in_row => {
                    in_cell = true;
                    in_inline = false;
                    cell_col = None;
                    cell_raw.clear();

                    let mut cell_type: Option<String> = None;
                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"r" => {
                                let r = String::from_utf8_lossy(&attr.value);
                                cell_col = split_cell_ref(&r);
                            }
                            b"t" => {
                                cell_type = Some(String::from_utf8_lossy(&attr.value).to_string());
                            }
                            _ => {}
                        }
                    }
                    cell_kind = CellKind::from_attr(cell_type.as_deref());
                }
                b"is" if in_cell => {
                    in_inline = true;
                }
                b"v" if in_cell => {
                    in_text = true;
                }
                b"t" if in_inline => {
                    in_text = true;
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Empty(ref e)) => match e.name().as_ref() {
                // A childless row still occupies its position in the sequence.
                b"row" => rows.push(RawRow::new()),
                b"c" if in_row => {
                    let mut col = None;
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"r" {
                            let r = String::from_utf8_lossy(&attr.value);
                            col = split_cell_ref(&r);
                        }
                    }
                    if let Some(col) = col {
                        current_row.insert(col, String::new());
                    }
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Text(ref e)) => {
                if in_text {
                    let text = e.unescape().unwrap_or_default();
                    cell_raw.push_str(&text);
                }
            }
            Ok(quick_xml::events::Event::End(ref e)) => match e.name().as_ref() {
                b"row" => {
                    rows.push(std::mem::take(&mut current_row));
                    in_row = false;
                }
                b"c" if in_cell => {
                    // Cells whose reference has no leading letters are skipped.
                    if let Some(col) = cell_col {
                        let value = resolve_value(cell_kind, &cell_raw, shared)?;
                        current_row.insert(col, value.trim().to_string());
                    }
                    in_cell = false;
                    in_inline = false;
                }
                b"is" => {
                    in_inline = false;
                }
                b"v" | b"t" => {
                    in_text = false;
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    debug!("parsed {} worksheet rows", rows.len());
    Ok(rows)
}

/// Resolve a cell's raw text into its final string value.
fn resolve_value(kind: CellKind, raw: &str, shared: &SharedStrings) -> Result<String> {
    match kind {
        CellKind::Shared => {
            let raw = raw.trim();
            // A shared cell with no value node resolves to the empty string.
            if raw.is_empty() {
                return Ok(String::new());
            }
            let index: usize = raw.parse().map_err(|_| {
                Error::InvalidData(format!("shared string index is not an integer: {:?}", raw))
            })?;
            Ok(shared.resolve(index)?.to_string())
        }
        CellKind::Inline | CellKind::Literal => Ok(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>{}</sheetData>
</worksheet>"#,
            body
        )
    }

    fn pool(entries: &[&str]) -> SharedStrings {
        let body: String = entries
            .iter()
            .map(|s| format!("<si><t>{}</t></si>", s))
            .collect();
        SharedStrings::parse(&format!("<sst>{}</sst>", body)).unwrap()
    }

    #[test]
    fn test_literal_and_shared_cells() {
        let shared = pool(&["ResponseId", "R_123"]);
        let xml = sheet(
            r#"<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1"><v>42</v></c></row>
<row r="2"><c r="A2" t="s"><v>1</v></c><c r="B2"><v>3.5</v></c></row>"#,
        );

        let rows = parse_worksheet(&xml, &shared).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), Some("ResponseId"));
        assert_eq!(rows[0].get(1), Some("42"));
        assert_eq!(rows[1].get(0), Some("R_123"));
        assert_eq!(rows[1].get(1), Some("3.5"));
    }

    #[test]
    fn test_inline_string() {
        let shared = SharedStrings::default();
        let xml = sheet(r#"<row><c r="A1" t="inlineStr"><is><t>  Tax Law  </t></is></c></row>"#);

        let rows = parse_worksheet(&xml, &shared).unwrap();
        assert_eq!(rows[0].get(0), Some("Tax Law"));
    }

    #[test]
    fn test_cell_without_value_node() {
        let shared = SharedStrings::default();
        let xml = sheet(r#"<row><c r="A1" t="s"/><c r="B1"/></row>"#);

        let rows = parse_worksheet(&xml, &shared).unwrap();
        assert_eq!(rows[0].get(0), Some(""));
        assert_eq!(rows[0].get(1), Some(""));
    }

    #[test]
    fn test_unparseable_reference_skipped() {
        let shared = SharedStrings::default();
        let xml = sheet(r#"<row><c r="123"><v>lost</v></c><c r="B1"><v>kept</v></c></row>"#);

        let rows = parse_worksheet(&xml, &shared).unwrap();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0].get(1), Some("kept"));
    }

    #[test]
    fn test_empty_rows_keep_position() {
        let shared = SharedStrings::default();
        let xml = sheet(r#"<row r="1"><c r="A1"><v>first</v></c></row><row r="2"/><row r="3"><c r="A3"><v>third</v></c></row>"#);

        let rows = parse_worksheet(&xml, &shared).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
        assert_eq!(rows[2].get(0), Some("third"));
    }

    #[test]
    fn test_shared_ref_without_pool_is_error() {
        let shared = SharedStrings::default();
        let xml = sheet(r#"<row><c r="A1" t="s"><v>0</v></c></row>"#);

        let err = parse_worksheet(&xml, &shared).unwrap_err();
        assert!(matches!(err, Error::SharedString { index: 0, len: 0 }));
    }

    #[test]
    fn test_shared_index_not_integer() {
        let shared = pool(&["only"]);
        let xml = sheet(r#"<row><c r="A1" t="s"><v>zero</v></c></row>"#);

        let err = parse_worksheet(&xml, &shared).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_values_trimmed() {
        let shared = SharedStrings::default();
        let xml = sheet(r#"<row><c r="A1"><v>  5 </v></c></row>"#);

        let rows = parse_worksheet(&xml, &shared).unwrap();
        assert_eq!(rows[0].get(0), Some("5"));
    }
}
