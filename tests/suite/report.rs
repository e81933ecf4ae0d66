//! Report rendering tests

use insta::assert_snapshot;
use saaty_tui::{Report, render_json, render_report, render_text};
use saaty_types::ReportFormat;

use crate::common::{elements, scripted_run};

#[test]
fn text_report_worked_example() {
    let labels = elements(&["A", "B"]);
    let (matrix, membership) = scripted_run(&["A", "B"], &[(2, 0)]);
    let report = Report {
        property: "comfort",
        elements: &labels,
        matrix: &matrix,
        membership: &membership,
    };

    assert_snapshot!(render_text(&report, 6).trim_end(), @r"
    Judgment matrix for fuzzy property: comfort
              A         B
    A  1.000000  3.000000
    B  0.333333  1.000000

    Membership function (mu) for each element:
       degree of membership
    A              0.750000
    B              0.250000
    ");
}

#[test]
fn json_report_worked_example() {
    let labels = elements(&["A", "B"]);
    let (matrix, membership) = scripted_run(&["A", "B"], &[(2, 0)]);
    let report = Report {
        property: "comfort",
        elements: &labels,
        matrix: &matrix,
        membership: &membership,
    };

    let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    assert_eq!(value["property"], "comfort");
    assert_eq!(value["elements"], serde_json::json!(["A", "B"]));
    assert_eq!(value["matrix"][0][1], 3.0);
    assert!((value["matrix"][1][0].as_f64().unwrap() - 1.0 / 3.0).abs() < 1e-15);
    assert!((value["membership"][0].as_f64().unwrap() - 0.75).abs() < 1e-12);
    assert!((value["membership"][1].as_f64().unwrap() - 0.25).abs() < 1e-12);
}

#[test]
fn report_format_dispatch() {
    let labels = elements(&["only"]);
    let (matrix, membership) = scripted_run(&["only"], &[]);
    let report = Report {
        property: "p",
        elements: &labels,
        matrix: &matrix,
        membership: &membership,
    };

    let text = render_report(&report, ReportFormat::Text, 3).unwrap();
    assert!(text.contains("only  1.000"));
    let json = render_report(&report, ReportFormat::Json, 3).unwrap();
    assert!(json.trim_start().starts_with('{'));
}
