//! Final report: judgment matrix and membership degrees.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use saaty_types::{Element, JudgmentMatrix, MembershipVector, ReportFormat};

const COLUMN_GAP: &str = "  ";
const DEGREE_HEADER: &str = "degree of membership";

/// Everything a finished run prints.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub property: &'a str,
    pub elements: &'a [Element],
    pub matrix: &'a JudgmentMatrix,
    pub membership: &'a MembershipVector,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    property: &'a str,
    elements: &'a [Element],
    matrix: Vec<&'a [f64]>,
    membership: &'a MembershipVector,
}

pub fn render_report(
    report: &Report<'_>,
    format: ReportFormat,
    precision: usize,
) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report, precision)),
        ReportFormat::Json => render_json(report),
    }
}

/// Two aligned tables: the labelled matrix, then one degree per element.
#[must_use]
pub fn render_text(report: &Report<'_>, precision: usize) -> String {
    let labels: Vec<&str> = report.elements.iter().map(Element::as_str).collect();

    let matrix_rows: Vec<Vec<String>> = report
        .matrix
        .rows()
        .map(|row| row.iter().map(|v| format!("{v:.precision$}")).collect())
        .collect();
    let degree_rows: Vec<Vec<String>> = report
        .membership
        .iter()
        .map(|d| vec![format!("{d:.precision$}")])
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "Judgment matrix for fuzzy property: {}\n",
        report.property
    ));
    out.push_str(&table(&labels, &labels, &matrix_rows));
    out.push('\n');
    out.push_str("Membership function (mu) for each element:\n");
    out.push_str(&table(&[DEGREE_HEADER], &labels, &degree_rows));
    out
}

pub fn render_json(report: &Report<'_>) -> serde_json::Result<String> {
    let json = JsonReport {
        property: report.property,
        elements: report.elements,
        matrix: report.matrix.rows().collect(),
        membership: report.membership,
    };
    serde_json::to_string_pretty(&json)
}

/// Left-aligned row labels, right-aligned cells, columns sized to fit.
fn table(headers: &[&str], row_labels: &[&str], rows: &[Vec<String>]) -> String {
    let label_width = row_labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = " ".repeat(label_width);
    for (header, width) in headers.iter().zip(&col_widths) {
        out.push_str(COLUMN_GAP);
        push_right(&mut out, header, *width);
    }
    out.push('\n');

    for (label, row) in row_labels.iter().zip(rows) {
        push_left(&mut out, label, label_width);
        for (cell, width) in row.iter().zip(&col_widths) {
            out.push_str(COLUMN_GAP);
            push_right(&mut out, cell, *width);
        }
        out.push('\n');
    }
    out
}

fn push_left(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(width.saturating_sub(text.width())));
}

fn push_right(out: &mut String, text: &str, width: usize) {
    out.push_str(&" ".repeat(width.saturating_sub(text.width())));
    out.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::{Report, render_json, render_text, table};
    use saaty_types::{Element, JudgmentMatrix, MembershipVector};

    #[test]
    fn table_pads_by_display_width() {
        let rows = vec![vec!["1".to_string()], vec!["22".to_string()]];
        let out = table(&["h"], &["日本", "x"], &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "       h");
        assert_eq!(lines[1], "日本   1");
        assert_eq!(lines[2], "x     22");
    }

    #[test]
    fn text_report_respects_precision() {
        let elements = vec![Element::new("A").unwrap()];
        let matrix = JudgmentMatrix::neutral(1).unwrap();
        let membership = MembershipVector::new(vec![1.0]);
        let report = Report {
            property: "tall",
            elements: &elements,
            matrix: &matrix,
            membership: &membership,
        };
        let out = render_text(&report, 2);
        assert!(out.starts_with("Judgment matrix for fuzzy property: tall\n"));
        assert!(out.contains("A  1.00\n"));
        assert!(out.contains("degree of membership"));
    }

    #[test]
    fn json_report_shape() {
        let elements = vec![Element::new("A").unwrap()];
        let matrix = JudgmentMatrix::neutral(1).unwrap();
        let membership = MembershipVector::new(vec![1.0]);
        let report = Report {
            property: "tall",
            elements: &elements,
            matrix: &matrix,
            membership: &membership,
        };
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["property"], "tall");
        assert_eq!(value["elements"][0], "A");
        assert_eq!(value["matrix"][0][0], 1.0);
        assert_eq!(value["membership"][0], 1.0);
    }
}
