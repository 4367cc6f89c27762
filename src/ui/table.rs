//! Table rendering with `comfy-table`.
//!
//! Rows are row-major and row 0 is the header. A cell is plain text or
//! carries span and alignment metadata. The same shape can be read from
//! JSON, where a cell is a string, a number, or an object such as
//! `{"content": "a", "colSpan": 2, "hAlign": "center"}`.

use crate::error::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ColumnConstraint, Table, Width};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl From<HAlign> for CellAlignment {
    fn from(align: HAlign) -> Self {
        match align {
            HAlign::Left => CellAlignment::Left,
            HAlign::Center => CellAlignment::Center,
            HAlign::Right => CellAlignment::Right,
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub content: String,
    pub col_span: u16,
    pub row_span: u16,
    pub h_align: HAlign,
}

impl TableCell {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            col_span: 1,
            row_span: 1,
            h_align: HAlign::Left,
        }
    }

    pub fn col_span(mut self, span: u16) -> Self {
        self.col_span = span.max(1);
        self
    }

    pub fn row_span(mut self, span: u16) -> Self {
        self.row_span = span.max(1);
        self
    }

    pub fn align(mut self, align: HAlign) -> Self {
        self.h_align = align;
        self
    }
}

impl From<&str> for TableCell {
    fn from(content: &str) -> Self {
        TableCell::new(content)
    }
}

impl From<String> for TableCell {
    fn from(content: String) -> Self {
        TableCell::new(content)
    }
}

impl From<&String> for TableCell {
    fn from(content: &String) -> Self {
        TableCell::new(content.as_str())
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Fixed width per column, in cells; columns beyond the list size themselves.
    pub col_widths: Vec<u16>,
    /// Header text color. Only emitted when writing to a terminal.
    pub header_color: Option<Color>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            col_widths: Vec::new(),
            header_color: Some(Color::Red),
        }
    }
}

impl TableOptions {
    pub fn col_widths(mut self, widths: impl Into<Vec<u16>>) -> Self {
        self.col_widths = widths.into();
        self
    }

    pub fn header_color(mut self, color: Option<Color>) -> Self {
        self.header_color = color;
        self
    }
}

/// Renders `rows` (row 0 is the header) into a table string.
///
/// `comfy-table` has no cell spans: a `col_span` of n is drawn as the cell
/// followed by n - 1 empty cells, and `row_span` is ignored with a warning.
pub fn table<R, C>(rows: impl IntoIterator<Item = R>, options: &TableOptions) -> String
where
    R: IntoIterator<Item = C>,
    C: Into<TableCell>,
{
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return String::new();
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(expand_row(header, options.header_color));
    for row in rows {
        table.add_row(expand_row(row, None));
    }
    if !options.col_widths.is_empty() {
        table.set_constraints(
            options
                .col_widths
                .iter()
                .map(|w| ColumnConstraint::Absolute(Width::Fixed(*w))),
        );
    }
    table.to_string()
}

/// Like [`table`], with rows given as a JSON array of arrays.
///
/// # Errors
///
/// Returns `FftermError::Json` if `json` is not an array of arrays of cells.
pub fn table_from_json(json: &str, options: &TableOptions) -> Result<String> {
    let rows: Vec<Vec<JsonCell>> = serde_json::from_str(json)?;
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(TableCell::from));
    Ok(table(rows, options))
}

fn expand_row<R, C>(row: R, color: Option<Color>) -> Vec<Cell>
where
    R: IntoIterator<Item = C>,
    C: Into<TableCell>,
{
    let mut cells = Vec::new();
    for cell in row {
        let cell: TableCell = cell.into();
        if cell.row_span > 1 {
            warn!(
                "Row span {} on '{}' is not supported, drawing a single row",
                cell.row_span, cell.content
            );
        }
        let mut rendered = Cell::new(&cell.content).set_alignment(cell.h_align.into());
        if let Some(color) = color {
            rendered = rendered.fg(color);
        }
        cells.push(rendered);
        cells.extend((1..cell.col_span).map(|_| Cell::new("")));
    }
    cells
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCell {
    Spec(CellSpec),
    Scalar(Value),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CellSpec {
    content: Value,
    #[serde(default)]
    col_span: Option<u16>,
    #[serde(default)]
    row_span: Option<u16>,
    #[serde(default)]
    h_align: Option<HAlign>,
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<JsonCell> for TableCell {
    fn from(cell: JsonCell) -> Self {
        match cell {
            JsonCell::Scalar(value) => TableCell::new(scalar_text(value)),
            JsonCell::Spec(spec) => TableCell::new(scalar_text(spec.content))
                .col_span(spec.col_span.unwrap_or(1))
                .row_span(spec.row_span.unwrap_or(1))
                .align(spec.h_align.unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FftermError;

    fn plain() -> TableOptions {
        TableOptions::default().header_color(None)
    }

    #[test]
    fn renders_header_and_rows() {
        let rendered = table(
            vec![vec!["Name", "Qty"], vec!["apple", "3"], vec!["pear", "12"]],
            &plain(),
        );
        for needle in ["Name", "Qty", "apple", "3", "pear", "12"] {
            assert!(rendered.contains(needle), "missing {} in\n{}", needle, rendered);
        }
        let header_line = rendered.lines().position(|l| l.contains("Name")).unwrap();
        let body_line = rendered.lines().position(|l| l.contains("apple")).unwrap();
        assert!(header_line < body_line);
    }

    #[test]
    fn empty_input_renders_nothing() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert_eq!(table(rows, &plain()), "");
    }

    #[test]
    fn col_span_pads_with_empty_cells() {
        let cells = expand_row(vec![TableCell::new("wide").col_span(3), "x".into()], None);
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn reads_mixed_cells_from_json() {
        let json = r#"[
            ["id", "name", "score"],
            [1, {"content": "ana", "hAlign": "right"}, 9.5],
            [{"content": "total", "colSpan": 2}, null]
        ]"#;
        let rendered = table_from_json(json, &plain()).unwrap();
        for needle in ["id", "name", "score", "1", "ana", "9.5", "total"] {
            assert!(rendered.contains(needle), "missing {} in\n{}", needle, rendered);
        }
    }

    #[test]
    fn json_cell_metadata_is_read() {
        let cell: JsonCell =
            serde_json::from_str(r#"{"content": 7, "colSpan": 2, "rowSpan": 3, "hAlign": "center"}"#)
                .unwrap();
        let cell = TableCell::from(cell);
        assert_eq!(cell, TableCell::new("7").col_span(2).row_span(3).align(HAlign::Center));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = table_from_json(r#"{"not": "rows"}"#, &plain()).unwrap_err();
        assert!(matches!(err, FftermError::Json(_)));
    }

    #[test]
    fn fixed_widths_constrain_columns() {
        let rendered = table(
            vec![vec!["a", "b"], vec!["x", "y"]],
            &plain().col_widths(vec![10, 10]),
        );
        let top = rendered.lines().next().unwrap();
        assert!(unicode_width::UnicodeWidthStr::width(top) >= 20);
    }
}
